//! App Fitness
//!
//! A full-screen terminal fitness companion with a BMI calculator,
//! two static workout plans and a stopwatch.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Weight or height could not be parsed as a number
    #[error("Invalid {field}: {value:?} is not a number")]
    InvalidMeasurement {
        /// Which input field was rejected
        field: &'static str,
        /// The raw text the user typed
        value: String,
    },
    /// Navigation requested a page that does not exist
    #[error("Unknown page: {0}")]
    UnknownPage(String),
    /// A stopwatch display string was not in MM:SS form
    #[error("Invalid elapsed time: {0}")]
    InvalidElapsed(String),
    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Configuration file could not be parsed
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Log sink could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Error handling utilities
pub mod error {
    use super::AppError;

    /// Message shown when the BMI inputs are not numeric
    pub const MEASUREMENT_MESSAGE: &str = "Por favor, insira valores numéricos para peso e altura.";

    /// Convert error to the message shown to the user in a dialog
    pub fn user_friendly_message(error: &AppError) -> String {
        match error {
            AppError::InvalidMeasurement { .. } => MEASUREMENT_MESSAGE.to_string(),
            AppError::UnknownPage(name) => format!("Página desconhecida: {}", name),
            AppError::Config(msg) => {
                format!("Erro de configuração: {}. Verifique o arquivo de configuração.", msg)
            }
            _ => error.to_string(),
        }
    }

    /// Whether the user can simply correct the input and try again
    pub fn is_user_recoverable(error: &AppError) -> bool {
        matches!(
            error,
            AppError::InvalidMeasurement { .. } | AppError::UnknownPage(_)
        )
    }
}

// Common types and constants
pub const APP_NAME: &str = "appfit";
pub const WINDOW_TITLE: &str = "App Fitness";
pub const CONFIG_FILE: &str = "appfit.toml";
pub const LOG_FILE: &str = "appfit.log";
