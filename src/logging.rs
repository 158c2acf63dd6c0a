//! Log sink setup
//!
//! The terminal belongs to the UI, so events go to a file under the user's
//! local data directory instead of stderr.

use crate::config::AppConfig;
use crate::{AppError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default location of the log file
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter, letting `RUST_LOG` override the configured level
pub fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// Returns the log file in use, or `None` when file logging is disabled or
/// no data directory exists.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    if !config.log_to_file {
        return Ok(None);
    }
    let Some(path) = log_file_path() else {
        return Ok(None);
    };

    init_at(config, &path)?;
    Ok(Some(path))
}

/// Install the global subscriber writing to `path`
pub fn init_at(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_file_logging() {
        let config = AppConfig {
            log_to_file: false,
            ..AppConfig::default()
        };
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE);

        // Another test may already own the global subscriber
        let _ = init_at(&AppConfig::default(), &path);
        assert!(path.exists());
    }

    #[test]
    fn test_log_file_path() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("appfit/appfit.log"));
        }
    }
}
