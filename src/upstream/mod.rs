//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Classified request (Destination, parts, buffered body)
//!     → origin.rs (origin base + path + query)
//!     → client.rs (hyper send over http/https, stream response back)
//!     → error.rs (transport failures, status mapping)
//! ```

pub mod client;
pub mod error;
pub mod origin;

pub use client::UpstreamClient;
pub use error::ForwardError;
pub use origin::Origin;
