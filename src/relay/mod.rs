//! Per-request relay pipeline.
//!
//! # Data Flow
//! ```text
//! request path
//!     → target.rs (trim separators, check scheme prefix)
//!     → fetch.rs (single GET, 10s budget, 2xx only, full body)
//!     → outcome.rs (Success: content-type + body)
//!
//! Any failure at any stage → outcome.rs (NotFound: 404, empty body)
//! ```
//!
//! # Design Decisions
//! - Exactly one outcome per request; the first failure is terminal
//! - Failure kinds are kept internally (error.rs) but never surfaced
//! - The only shared state is the upstream client's connection pool

pub mod error;
pub mod fetch;
pub mod outcome;
pub mod target;

pub use error::{FailureKind, RelayError, RelayResult};
pub use fetch::{UpstreamClient, UpstreamResponse, FETCH_TIMEOUT};
pub use outcome::RelayOutcome;
pub use target::{Scheme, TargetUrl};

/// The relay core: extract, fetch, translate, or fall back.
#[derive(Clone)]
pub struct Relay {
    upstream: UpstreamClient,
}

impl Relay {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Run the pipeline for one request path.
    pub async fn handle(&self, path: &str) -> RelayOutcome {
        let result = self.run(path).await;

        if let Err(e) = &result {
            tracing::debug!(
                path = %path,
                kind = ?e.kind(),
                error = %e,
                "Relay failed"
            );
        }

        RelayOutcome::from_result(result)
    }

    async fn run(&self, path: &str) -> RelayResult<UpstreamResponse> {
        let target = TargetUrl::from_path(path)?;
        tracing::debug!(url = %target, scheme = ?target.scheme(), "Fetching upstream");
        self.upstream.fetch(&target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> Relay {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        Relay::new(UpstreamClient::new(client))
    }

    #[tokio::test]
    async fn test_invalid_paths_never_reach_upstream() {
        let relay = relay();
        for path in ["/", "/favicon.ico", "/ftp://example.com", ""] {
            assert_eq!(relay.handle(path).await, RelayOutcome::NotFound);
        }
    }
}
