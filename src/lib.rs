//! URL relay library.
//!
//! Accepts a request whose path is a full `http:`/`https:` URL, fetches it
//! with a 10 second budget, and returns the upstream content-type and body
//! unchanged. Every failure becomes a bare `404 Not Found`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{Relay, RelayOutcome, FETCH_TIMEOUT};
