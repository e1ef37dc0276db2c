//! # Error Types
//!
//! Logging itself never fails; these errors cover the fallible edges
//! around the logger (value conversion, mode parsing, configuration).

use thiserror::Error;

/// Unified error type for pyx-log operations.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to serialize value for display: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid logger mode: '{value}' (expected 'normal' or 'silent')")]
    InvalidMode { value: String },

    #[error(transparent)]
    Config(ConfigError),
}

impl From<ConfigError> for LogError {
    fn from(e: ConfigError) -> Self {
        LogError::Config(e)
    }
}

impl From<serde_json::Error> for LogError {
    fn from(source: serde_json::Error) -> Self {
        LogError::Serialize { source }
    }
}

/// Configuration-related errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read config {path}: {msg}")]
    Load { path: String, msg: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
