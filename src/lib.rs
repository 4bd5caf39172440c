//! Edge router for the logistics site.
//!
//! Every inbound request is classified by path and forwarded to one of two
//! origins: the API service or the static hosting server.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::Router ──┬─ /api/*, /health,   ──▶ backend origin
//!                    (span, body)      (classify path)   │  /docs, /openapi.json
//!                                                        └─ everything else     ──▶ frontend origin
//!
//!     Client Response
//!     ◀────────────── http::response ◀── upstream::UpstreamClient
//!                    (pass through, or JSON diagnostic on frontend failure)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

// API consumers
pub mod tracking;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
