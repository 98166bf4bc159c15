//! Upstream fetching with a fixed time budget.
//!
//! # Responsibilities
//! - Issue exactly one GET per target over the shared client
//! - Bound connect, headers and body read by a single deadline
//! - Reject non-2xx statuses
//! - Buffer the whole body before handing it on
//!
//! Dropping the in-flight future on timeout cancels the request and releases
//! its connection; other requests on the same client are unaffected.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use tokio::time::timeout;
use url::Url;

use crate::relay::error::{RelayError, RelayResult};
use crate::relay::target::TargetUrl;

/// Wall-clock budget for a whole outbound call.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully-read successful upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: HeaderValue,
    pub body: Bytes,
}

/// Outbound side of the relay.
///
/// Wraps a `reqwest::Client` built once at startup. Cloning is cheap and
/// shares the same connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: FETCH_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch `target`, failing on timeout, transport errors or non-2xx.
    pub async fn fetch(&self, target: &TargetUrl) -> RelayResult<UpstreamResponse> {
        let url = Url::parse(target.as_str())
            .map_err(|e| RelayError::InvalidTarget(format!("{target}: {e}")))?;

        match timeout(self.timeout, self.send(url)).await {
            Ok(result) => result,
            Err(_) => Err(RelayError::FetchTimeout(self.timeout)),
        }
    }

    async fn send(&self, url: Url) -> RelayResult<UpstreamResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .cloned()
            .ok_or_else(|| RelayError::Unexpected("upstream response has no content-type".into()))?;

        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
