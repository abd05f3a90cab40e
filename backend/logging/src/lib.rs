//! Structured logging setup for chatfmt.
//!
//! Installs a `tracing` subscriber with env-based level control, a console
//! layer on stderr, and an optional daily-rotating JSON file.

pub mod logger;

pub use logger::{init_console_logger, init_logger};
