//! Logging Infrastructure
//!
//! Structured logging setup for both development and production hosts.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_target(log_dir) {
        LogTarget::File(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "storefront");
            let _ = subscriber.with_writer(file_appender).try_init();
        }
        LogTarget::Stdout => {
            let _ = subscriber.try_init();
        }
        LogTarget::MissingDir(dir) => {
            let _ = subscriber.try_init();
            // Reported only once the stdout subscriber is in place
            tracing::warn!(log_dir = %dir, "Log directory missing, logging to stdout");
        }
    }
}

/// Where log output goes
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Stdout,
    /// Daily rolling files in this directory
    File(&'a str),
    /// A directory was configured but does not exist; stdout instead
    MissingDir(&'a str),
}

fn log_target(log_dir: Option<&str>) -> LogTarget<'_> {
    match log_dir {
        None => LogTarget::Stdout,
        Some(dir) if Path::new(dir).is_dir() => LogTarget::File(dir),
        Some(dir) => LogTarget::MissingDir(dir),
    }
}
