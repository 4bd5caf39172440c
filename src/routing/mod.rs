//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request path
//!     → router.rs (classification)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: Destination::Backend or Destination::Frontend
//!
//! Route Compilation (at startup):
//!     RoutingConfig
//!     → API prefix matcher, then one exact matcher per operational path
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix and exact matching only)
//! - Deterministic: same path always classifies the same way

pub mod matcher;
pub mod router;

pub use router::{Destination, Router};
