//! Target URL extraction from the inbound request path.
//!
//! The path, stripped of leading and trailing `/`, is taken as the target as
//! is: no percent-decoding, no normalization. Only the scheme prefix is
//! checked here; full URL parsing happens when the fetch is issued.

use std::fmt;

use crate::relay::error::{RelayError, RelayResult};

/// Scheme of a target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

/// A candidate outbound destination that passed the scheme-prefix check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    scheme: Scheme,
    raw: String,
}

impl TargetUrl {
    /// Derive a target from a raw request path.
    pub fn from_path(path: &str) -> RelayResult<Self> {
        let candidate = path.trim_matches('/');

        let scheme = if candidate.starts_with("https:") {
            Scheme::Https
        } else if candidate.starts_with("http:") {
            Scheme::Http
        } else {
            return Err(RelayError::InvalidTarget(path.to_string()));
        };

        Ok(Self {
            scheme,
            raw: candidate.to_string(),
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The target exactly as it appeared in the path.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
