use std::path::Path;

use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

/// Routes `tracing` output to `<dir>/<file>` through a non-blocking writer,
/// keeping stdout free for the report.
///
/// Fails if the log directory or file cannot be created.
/// Keep the returned guard alive until exit; dropping it flushes pending lines.
/// If a global subscriber is already installed the new one is ignored.
pub fn init_logging(dir: &Path, file: &str, level: Level) -> Result<WorkerGuard, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}
