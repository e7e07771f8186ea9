//! Logging Infrastructure
//!
//! tracing setup for the server. The level comes from `RUST_LOG` when set,
//! otherwise from the configured level. With a log directory, output goes
//! to a daily-rolling file instead of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize logging with defaults (info level, stdout)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging with an explicit level and optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => {
            let appender = tracing_appender::rolling::daily(dir, "tab-server.log");
            builder.with_ansi(false).with_writer(appender).init();
        }
        Some(dir) => {
            builder.init();
            tracing::warn!(
                "Log directory {} does not exist, logging to stdout",
                dir.display()
            );
        }
        None => builder.init(),
    }
}
