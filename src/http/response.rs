//! Response handling and transformation.
//!
//! # Responsibilities
//! - Pass origin responses through untouched
//! - Build the JSON diagnostic body for failures the router answers itself
//! - Apply the failure policy to frontend 403s and transport failures
//!
//! # Design Decisions
//! - Backend responses are never rewritten, whatever their status
//! - Backend transport failures are 502, never masked
//! - Frontend failures follow `FailurePolicy` (default: 200 + JSON)

use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::FailurePolicy;
use crate::upstream::{ForwardError, Origin};

pub const FRONTEND_BLOCKED: &str = "Frontend server is blocking requests";
pub const FRONTEND_BLOCKED_HINT: &str = "Please check your hosting server configuration";
pub const FRONTEND_UNREACHABLE: &str = "Cannot connect to frontend server";
pub const BACKEND_UNREACHABLE: &str = "Cannot connect to backend server";
pub const REQUEST_REJECTED: &str = "Request could not be forwarded";

/// JSON body of a response the router constructs itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
    pub message: String,
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl FailureBody {
    pub fn frontend_blocked(origin: &Origin, path: &str) -> Self {
        Self {
            error: FRONTEND_BLOCKED.to_string(),
            message: FRONTEND_BLOCKED_HINT.to_string(),
            server: origin.to_string(),
            path: Some(path.to_string()),
        }
    }

    pub fn frontend_unreachable(origin: &Origin, message: String) -> Self {
        Self {
            error: FRONTEND_UNREACHABLE.to_string(),
            message,
            server: origin.to_string(),
            path: None,
        }
    }

    pub fn backend_unreachable(origin: &Origin, message: String) -> Self {
        Self {
            error: BACKEND_UNREACHABLE.to_string(),
            message,
            server: origin.to_string(),
            path: None,
        }
    }

    pub fn rejected(origin: &Origin, path: &str, message: String) -> Self {
        Self {
            error: REQUEST_REJECTED.to_string(),
            message,
            server: origin.to_string(),
            path: Some(path.to_string()),
        }
    }

    /// Render as an `application/json` response with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response<Body> {
        (status, Json(self)).into_response()
    }
}

/// How a request was answered, for logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The origin's response was returned.
    Forwarded,
    /// A frontend 403 was replaced by a diagnostic.
    Blocked,
    /// The origin could not be reached.
    Unreachable,
    /// The inbound request was refused before forwarding.
    Rejected,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Forwarded => "forwarded",
            Outcome::Blocked => "blocked",
            Outcome::Unreachable => "unreachable",
            Outcome::Rejected => "rejected",
        }
    }
}

/// Finish a backend forward. The origin's answer is returned as-is.
pub fn backend_response(
    result: Result<Response<Body>, ForwardError>,
    origin: &Origin,
) -> (Response<Body>, Outcome) {
    match result {
        Ok(response) => (response, Outcome::Forwarded),
        Err(err) => {
            tracing::error!(origin = %origin, error = %err, "Backend request failed");
            let status = err.status_code();
            let body = FailureBody::backend_unreachable(origin, err.detail());
            (body.into_response_with(status), Outcome::Unreachable)
        }
    }
}

/// Finish a frontend forward, substituting diagnostics per `policy`.
pub fn frontend_response(
    result: Result<Response<Body>, ForwardError>,
    origin: &Origin,
    path: &str,
    policy: FailurePolicy,
) -> (Response<Body>, Outcome) {
    match result {
        Ok(response) if response.status() == StatusCode::FORBIDDEN => {
            if policy == FailurePolicy::Passthrough {
                return (response, Outcome::Forwarded);
            }
            tracing::warn!(origin = %origin, path = %path, "Frontend server answered 403");
            let status = match policy {
                FailurePolicy::Mask => StatusCode::OK,
                _ => StatusCode::FORBIDDEN,
            };
            let body = FailureBody::frontend_blocked(origin, path);
            (body.into_response_with(status), Outcome::Blocked)
        }
        Ok(response) => (response, Outcome::Forwarded),
        Err(err) => {
            tracing::error!(origin = %origin, error = %err, "Frontend request failed");
            let status = match policy {
                FailurePolicy::Mask => StatusCode::OK,
                _ => err.status_code(),
            };
            let body = FailureBody::frontend_unreachable(origin, err.detail());
            (body.into_response_with(status), Outcome::Unreachable)
        }
    }
}
