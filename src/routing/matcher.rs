//! Route matching logic.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Match exact path (case-sensitive)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Matchers look at the path only; query strings never affect routing
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_prefix_matcher() {
        let matcher = PathPrefixMatcher::new("/api/");

        assert!(matcher.matches("/api/v1/public/track/ABC"));
        assert!(matcher.matches("/api/"));
        assert!(!matcher.matches("/api"));
        assert!(!matcher.matches("/apiary"));
        assert!(!matcher.matches("/API/v1"));
    }

    #[test]
    fn test_exact_path_matcher() {
        let matcher = ExactPathMatcher::new("/docs");

        assert!(matcher.matches("/docs"));
        assert!(!matcher.matches("/docs/"));
        assert!(!matcher.matches("/docs/oauth2-redirect"));
        assert!(!matcher.matches("/Docs"));
    }

    #[test]
    fn test_any_matcher() {
        let matcher = AnyMatcher::new(vec![
            Box::new(PathPrefixMatcher::new("/api/")),
            Box::new(ExactPathMatcher::new("/health")),
        ]);

        assert!(matcher.matches("/api/v1"));
        assert!(matcher.matches("/health"));
        assert!(!matcher.matches("/healthz"));

        let empty = AnyMatcher::new(Vec::new());
        assert!(!empty.matches("/"));
    }
}
