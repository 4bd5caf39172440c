//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled backend matchers
//! - Classify a request path as backend or frontend
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Every path classifies; the frontend is the catch-all

use std::fmt;

use crate::config::RoutingConfig;
use crate::routing::matcher::{AnyMatcher, ExactPathMatcher, Matcher, PathPrefixMatcher};

/// Where a request is forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The API service.
    Backend,
    /// The static hosting server.
    Frontend,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Backend => "backend",
            Destination::Frontend => "frontend",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path classifier compiled from the routing table.
#[derive(Debug)]
pub struct Router {
    backend: AnyMatcher,
}

impl Router {
    /// Compile the routing table. The API prefix is checked before the
    /// operational paths.
    pub fn from_config(config: &RoutingConfig) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> =
            Vec::with_capacity(config.operational_paths.len() + 1);
        matchers.push(Box::new(PathPrefixMatcher::new(config.api_prefix.clone())));
        for path in &config.operational_paths {
            matchers.push(Box::new(ExactPathMatcher::new(path.clone())));
        }

        Self {
            backend: AnyMatcher::new(matchers),
        }
    }

    /// Classify a request path (without query string).
    pub fn classify(&self, path: &str) -> Destination {
        if self.backend.matches(path) {
            Destination::Backend
        } else {
            Destination::Frontend
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_and_operational_paths_go_to_backend() {
        let router = Router::default();

        for path in [
            "/api/v1/public/track/ABC12345",
            "/api/v1/auth/login",
            "/api/",
            "/health",
            "/docs",
            "/openapi.json",
        ] {
            assert_eq!(router.classify(path), Destination::Backend, "{path}");
        }
    }

    #[test]
    fn everything_else_goes_to_frontend() {
        let router = Router::default();

        for path in [
            "/",
            "/about.html",
            "/track.html",
            "/api",
            "/healthz",
            "/docs/",
            "/css/style.css",
            "/js/tracking.js",
        ] {
            assert_eq!(router.classify(path), Destination::Frontend, "{path}");
        }
    }

    #[test]
    fn prefix_only_table() {
        let router = Router::from_config(&RoutingConfig {
            api_prefix: "/api/".into(),
            operational_paths: Vec::new(),
        });

        assert_eq!(router.classify("/api/v1"), Destination::Backend);
        assert_eq!(router.classify("/health"), Destination::Frontend);
        assert_eq!(router.classify("/docs"), Destination::Frontend);
    }
}
