//! Shipment tracking against the API service.
//!
//! The API's public tracking endpoint is reached through the router like
//! any other `/api/` path; this module gives its JSON a typed shape.

pub mod client;
pub mod types;

pub use client::{normalize_number, TrackingClient, TrackingError};
pub use types::{StatusTone, TrackingRecord};
