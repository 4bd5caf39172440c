//! Forwarding error types.

use std::error::Error as StdError;

use axum::http::StatusCode;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors that can occur while forwarding a request to an origin.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The inbound body could not be read.
    #[error("Failed to read request body: {0}")]
    RequestBody(#[source] axum::Error),

    /// The inbound body is larger than the configured limit.
    #[error("Request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The outbound request could not be assembled from the inbound one.
    #[error("Failed to build upstream request: {0}")]
    Request(#[source] axum::http::Error),

    /// The origin could not be reached or did not answer in time.
    #[error("Connection failed to '{origin}': {source}")]
    Transport {
        origin: String,
        #[source]
        source: BoxError,
    },

    /// An origin URL could not be used as a forwarding base.
    #[error("Invalid origin URL '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    /// The TLS configuration for https origins could not be built.
    #[error("Failed to configure TLS: {0}")]
    Tls(#[source] rustls::Error),
}

impl ForwardError {
    /// Status used when the router has to answer on its own.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForwardError::RequestBody(_) | ForwardError::Request(_) => StatusCode::BAD_REQUEST,
            ForwardError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ForwardError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ForwardError::InvalidOrigin { .. } | ForwardError::Tls(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable description including every underlying cause.
    ///
    /// The hyper client keeps the interesting part (refused, DNS, TLS) in
    /// the source chain rather than in its own message.
    pub fn detail(&self) -> String {
        let source: &(dyn StdError + 'static) = match self {
            ForwardError::Transport { source, .. } => &**source,
            other => return other.to_string(),
        };

        let mut message = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ForwardError::BodyTooLarge { limit: 10 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ForwardError::InvalidOrigin {
                origin: "x".into(),
                reason: "relative URL without a base".into(),
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn detail_for_plain_variants_is_display() {
        let err = ForwardError::BodyTooLarge { limit: 1024 };
        assert_eq!(err.detail(), "Request body exceeds 1024 bytes");
    }

    #[test]
    fn detail_walks_transport_causes() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ForwardError::Transport {
            origin: "http://127.0.0.1:1".into(),
            source: Box::new(refused),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.detail(), "refused");
    }
}
