//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → logging.rs (structured log events inside a per-request span)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted strings, for anything queryable
//! - Request ID carried on the span, never injected into forwarded headers
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
