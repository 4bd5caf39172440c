//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request span)
//!     → request.rs (request ID, buffered body)
//!     → [routing layer classifies backend / frontend]
//!     → [upstream client forwards to the origin]
//!     → response.rs (pass through, or substitute a JSON diagnostic)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestSpan;
pub use response::{FailureBody, Outcome};
pub use server::{AppState, HttpServer};
