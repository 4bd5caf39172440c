//! Origin base URLs.

use std::fmt;

use crate::config::validation::check_origin;
use crate::upstream::error::ForwardError;

/// A scheme + authority that request paths are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    base: String,
}

impl Origin {
    /// Parse an origin, dropping any trailing slash so that
    /// `base + "/path?query"` is the full forwarding URL.
    ///
    /// The same rules as config validation apply: http(s), a host, and
    /// no path, query or fragment.
    pub fn parse(value: &str) -> Result<Self, ForwardError> {
        check_origin(value).map_err(|reason| ForwardError::InvalidOrigin {
            origin: value.to_string(),
            reason,
        })?;

        Ok(Self {
            base: value.trim_end_matches('/').to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Build the forwarding URL. Path and query are appended untouched.
    pub fn join(&self, path_and_query: &str) -> String {
        if path_and_query.is_empty() {
            format!("{}/", self.base)
        } else {
            format!("{}{}", self.base, path_and_query)
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
