//! Structured Logger
//!
//! Wraps `tracing` to provide JSON-formatted file output with daily rotation
//! (NDJSON) and environment-based level control. Console output goes to
//! stderr so that command output on stdout stays machine-readable.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Base name of the rolling log file.
const LOG_FILE_PREFIX: &str = "chatfmt.log";

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global logger with a console layer and a rolling file layer.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    // Writes NDJSON to `<log_dir>/chatfmt.log.YYYY-MM-DD`
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_ansi(false);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Initialize a console-only logger on stderr.
pub fn init_console_logger(level: &str) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}
