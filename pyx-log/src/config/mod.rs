use crate::error::{ConfigError, LogError};
use crate::logger::Mode;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable that enables the debug channel
pub const DEFAULT_DEBUG_VAR: &str = "DEBUG_MODE";

fn default_debug_var() -> String {
    DEFAULT_DEBUG_VAR.to_string()
}

fn default_ansi() -> bool {
    true
}

/// Settings for building a [`Logger`](crate::Logger).
///
/// ```toml
/// name = "Me"
/// mode = "silent"
/// debug_var = "MY_APP_DEBUG"
/// ansi = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_debug_var")]
    pub debug_var: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl LoggerConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: Mode::default(),
            debug_var: default_debug_var(),
            ansi: default_ansi(),
        }
    }

    /// Loads settings from a config file (format picked from the extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: shown }.into());
        }

        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| ConfigError::Load {
                path: shown.clone(),
                msg: e.to_string(),
            })?;

        let config: LoggerConfig = settings.try_deserialize().map_err(|e| ConfigError::Load {
            path: shown.clone(),
            msg: e.to_string(),
        })?;
        config.validate()?;

        debug!(path = %shown, name = %config.name, "Loaded logger config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let debug_var = self.debug_var.trim();
        if debug_var.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "debug_var".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if debug_var.contains('=') || debug_var.contains('\0') {
            return Err(ConfigError::InvalidValue {
                field: "debug_var".to_string(),
                reason: format!("'{}' is not a valid variable name", self.debug_var),
            });
        }
        Ok(())
    }
}
