//! Failure taxonomy for the relay pipeline.
//!
//! None of these kinds are visible to the caller: every one of them ends in
//! the same `404 Not Found`. They exist so the pipeline can be tested and
//! logged per kind.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while relaying a single request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request path does not encode a scheme-prefixed URL.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// The outbound call did not complete within the fetch budget.
    #[error("upstream fetch timed out after {0:?}")]
    FetchTimeout(Duration),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// DNS, connect, TLS or protocol failure talking to the upstream.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Anything else that went wrong while fetching or translating.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Coarse classification matching the four failure kinds of the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidTarget,
    FetchTimeout,
    UpstreamFailure,
    UnexpectedFailure,
}

impl RelayError {
    /// The failure kind this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            RelayError::InvalidTarget(_) => FailureKind::InvalidTarget,
            RelayError::FetchTimeout(_) => FailureKind::FetchTimeout,
            RelayError::UpstreamStatus(_) | RelayError::Upstream(_) => FailureKind::UpstreamFailure,
            RelayError::Unexpected(_) => FailureKind::UnexpectedFailure,
        }
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
