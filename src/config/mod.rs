//! Configuration management module
//!
//! Handles loading and validation of the UI tuning values. The file is
//! optional; a missing file means defaults. No user data lives here.

use crate::{AppError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Spacing between stopwatch display refreshes
    #[serde(with = "duration_str")]
    pub refresh_interval: Duration,
    /// Idle poll timeout of the event loop
    #[serde(with = "duration_str")]
    pub tick_rate: Duration,
    /// `EnvFilter` directive, e.g. "info" or "appfit=debug"
    pub log_level: String,
    /// Write logs to the data directory
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(1),
            tick_rate: Duration::from_millis(250),
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl AppConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval.is_zero() {
            return Err(AppError::Config(
                "refresh_interval must be greater than 0".to_string(),
            ));
        }

        const MAX_REFRESH: Duration = Duration::from_secs(60);
        if self.refresh_interval > MAX_REFRESH {
            return Err(AppError::Config(format!(
                "refresh_interval too long: {}s (max: {}s)",
                self.refresh_interval.as_secs(),
                MAX_REFRESH.as_secs()
            )));
        }

        if self.tick_rate.is_zero() {
            return Err(AppError::Config(
                "tick_rate must be greater than 0".to_string(),
            ));
        }

        if tracing_subscriber::EnvFilter::try_new(&self.log_level).is_err() {
            return Err(AppError::Config(format!(
                "invalid log_level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/appfit/appfit.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            AppError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

// Durations as human-readable strings ("1s", "250ms")
mod duration_str {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(D::Error::custom)
    }
}
