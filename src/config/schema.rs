//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the edge router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Frontend and backend origin base URLs.
    pub origins: OriginsConfig,

    /// Path classification table.
    pub routing: RoutingConfig,

    /// How frontend failures are surfaced to the caller.
    pub failures: FailureConfig,

    /// Outbound request shaping.
    pub forwarding: ForwardingConfig,

    /// Transport timeout overrides.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// The two upstream origins requests are forwarded to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginsConfig {
    /// Static hosting server (scheme + host, no path).
    pub frontend: String,

    /// API service (scheme + host, no path).
    pub backend: String,
}

impl Default for OriginsConfig {
    fn default() -> Self {
        Self {
            frontend: "http://69.57.162.187".to_string(),
            backend: "https://eukexpress.onrender.com".to_string(),
        }
    }
}

/// Path classification table. Anything not matched goes to the frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Paths starting with this prefix go to the backend.
    pub api_prefix: String,

    /// Paths equal to one of these go to the backend.
    pub operational_paths: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api/".to_string(),
            operational_paths: vec![
                "/health".to_string(),
                "/docs".to_string(),
                "/openapi.json".to_string(),
            ],
        }
    }
}

/// Surfacing of frontend-origin failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Upstream 403 and transport failures become HTTP 200 with a JSON
    /// descriptor.
    #[default]
    Mask,
    /// Same JSON descriptor, but 403 stays 403 and transport failures
    /// become 502.
    Preserve,
    /// Upstream 403 is returned verbatim; transport failures become 502.
    Passthrough,
}

/// Failure handling configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FailureConfig {
    pub policy: FailurePolicy,
}

/// Outbound request shaping.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardingConfig {
    /// Forward the inbound Host header instead of the destination's.
    pub preserve_host: bool,

    /// Maximum inbound body size buffered for forwarding, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            preserve_host: false,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Timeout overrides for the upstream transport.
///
/// Unset values leave the transport's own defaults in place.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: Option<u64>,

    /// Time allowed until the origin's response head arrives, in seconds.
    pub request_secs: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
