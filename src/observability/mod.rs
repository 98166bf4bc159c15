//! Observability subsystem.
//!
//! Structured logging only. Each relayed request runs inside a span carrying
//! a generated `request_id`; relay failures are logged at debug level with
//! their kind and never surface to the caller.

pub mod logging;

pub use logging::init_logging;
