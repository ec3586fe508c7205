//! Observability module
//!
//! Structured logging for annotation runs. Logs always go to stderr so
//! annotated HTML on stdout stays clean.

pub mod logging;

pub use logging::{LogFormat, init_logging};
