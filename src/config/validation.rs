//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Origins must be bare http(s) base URLs
//! - Routing paths must be absolute
//! - Validate value ranges (body limit > 0, timeouts > 0)
//! - Listener and (when enabled) metrics addresses must be socket addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::RouterConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid origin URL '{value}': {reason}")]
    InvalidOrigin {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field}: path '{value}' must start with '/'")]
    RelativePath { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    Zero { field: &'static str },

    #[error("listener.bind_address: '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address: '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    for (field, value) in [
        ("origins.frontend", &config.origins.frontend),
        ("origins.backend", &config.origins.backend),
    ] {
        if let Err(reason) = check_origin(value) {
            errors.push(ValidationError::InvalidOrigin {
                field,
                value: value.clone(),
                reason,
            });
        }
    }

    if !config.routing.api_prefix.starts_with('/') {
        errors.push(ValidationError::RelativePath {
            field: "routing.api_prefix",
            value: config.routing.api_prefix.clone(),
        });
    }

    for path in &config.routing.operational_paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                field: "routing.operational_paths",
                value: path.clone(),
            });
        }
    }

    if config.forwarding.max_body_bytes == 0 {
        errors.push(ValidationError::Zero {
            field: "forwarding.max_body_bytes",
        });
    }
    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::Zero {
            field: "timeouts.connect_secs",
        });
    }
    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// An origin is scheme + authority only; the request path is appended to it.
///
/// Shared with `Origin::parse` so a server built without a validated
/// config applies the same rules.
pub fn check_origin(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("query and fragment are not allowed".to_string());
    }
    if url.path() != "/" {
        return Err("path is not allowed".to_string());
    }
    Ok(())
}
