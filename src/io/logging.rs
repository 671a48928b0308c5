//! File logging for the TUI.
//!
//! The terminal belongs to the UI, so log output only ever goes to files
//! under the directory passed on the command line.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "tick";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    Level(String),
    #[error("could not create log directory {path}: {source}")]
    Dir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Default level for the current build mode
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Normalize a user-supplied level name
pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::Level(other.to_string())),
    }
}

/// Start rotating file logs in `log_dir`.
///
/// The returned handle must stay alive for as long as logging is wanted;
/// dropping it flushes and stops the logger.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    let level = normalize_level(level)?;
    std::fs::create_dir_all(log_dir).map_err(|e| LoggingError::Dir {
        path: log_dir.to_path_buf(),
        source: e,
    })?;

    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!(
        "event=app_start status=ok version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(handle)
}
