//! Tracing subscriber initialization.
//!
//! A TUI owns the terminal, so logs go to a file instead of stdout; users
//! can follow them with `tail -f`. Logging stays off unless `CRSL_LOG`
//! names a log file.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initializes file logging when `CRSL_LOG` is set; returns the log path
/// actually used so the caller can report it.
pub fn init_from_env() -> Result<Option<PathBuf>, LoggingError> {
    let Some(raw) = std::env::var_os("CRSL_LOG") else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(raw);
    init(&path)?;
    Ok(Some(path))
}

/// Initializes the tracing subscriber writing to `log_path`, creating the
/// parent directory if needed. Respects `RUST_LOG`, defaulting to "info".
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::init;

    #[test]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("crsl_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // Subscriber may already be set by another test; directory creation
        // happens first either way.
        let _ = init(&log_file);

        assert!(test_dir.exists(), "log directory should be created");
        let _ = fs::remove_dir_all(&test_dir);
    }
}
