//! Outbound result of a relayed request.
//!
//! The variant is chosen once, when the pipeline finishes, and converted
//! straight into a response. Success carries the upstream content-type and
//! body unchanged; every failure collapses to a bare 404.

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::relay::error::RelayResult;
use crate::relay::fetch::UpstreamResponse;

/// Terminal value of the relay pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Success {
        content_type: HeaderValue,
        body: Bytes,
    },
    NotFound,
}

impl RelayOutcome {
    /// Translate a fully-read upstream response.
    pub fn translate(upstream: UpstreamResponse) -> Self {
        RelayOutcome::Success {
            content_type: upstream.content_type,
            body: upstream.body,
        }
    }

    /// Collapse a pipeline result, sending any failure to `NotFound`.
    pub fn from_result(result: RelayResult<UpstreamResponse>) -> Self {
        match result {
            Ok(upstream) => Self::translate(upstream),
            Err(_) => RelayOutcome::NotFound,
        }
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        match self {
            RelayOutcome::Success { content_type, body } => {
                (StatusCode::OK, [(CONTENT_TYPE, content_type)], body).into_response()
            }
            RelayOutcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
