//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, request span)
//!     → relay (extract target, fetch, translate or fall back)
//!     → RelayOutcome::into_response
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
