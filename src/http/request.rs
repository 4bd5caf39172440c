//! Request handling.
//!
//! # Responsibilities
//! - Give every request a unique ID for tracing
//! - Buffer the inbound body within the configured size limit
//!
//! # Design Decisions
//! - The request ID lives on the tracing span only; forwarded headers
//!   are never modified
//! - Size limit enforced while reading, before any origin is contacted

use axum::body::{Body, Bytes};
use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;
use uuid::Uuid;

use crate::upstream::ForwardError;

/// Span maker that tags each request with a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Read the whole inbound body, failing once it exceeds `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, ForwardError> {
    axum::body::to_bytes(body, limit).await.map_err(|err| {
        let inner = err.into_inner();
        if inner.is::<http_body_util::LengthLimitError>() {
            ForwardError::BodyTooLarge { limit }
        } else {
            ForwardError::RequestBody(axum::Error::new(inner))
        }
    })
}
