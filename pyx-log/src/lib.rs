//! # pyx-log - Simple and Pretty Console Logging
//!
//! A named logger that prints styled header, log, debug and alert lines to
//! standard output.
//!
//! ```no_run
//! use pyx_log::{log_values, Logger};
//!
//! let me = Logger::create("Me");
//! me.header("Initializing World Domination");
//! me.log(["Worlds: 1"]);
//! me.debug(log_values!["Is world worth dominating?", true]);
//! me.alert("WORLD IS RESISTING");
//! ```
//!
//! ## Modules
//!
//! - [`logger`] - The [`Logger`] and its output [`Mode`]
//! - [`value`] - Loggable values and their text renderings
//! - [`traits`] - Environment access used by the debug channel
//! - [`sink`] - In-memory output capture
//! - [`config`] - File-based logger settings
//! - [`error`] - Typed error handling with thiserror

pub mod config;
pub mod error;
pub mod logger;
pub mod sink;
pub mod traits;
pub(crate) mod utils;
pub mod value;

pub use crate::config::{LoggerConfig, DEFAULT_DEBUG_VAR};
pub use error::{ConfigError, LogError};
pub use logger::{Logger, LoggerBuilder, Mode};
pub use sink::CaptureSink;
pub use traits::{EnvSource, MapEnv, ProcessEnv};
pub use value::LogValue;

// Utils are pub(crate) - only export specific public utilities
pub use utils::{setup_diagnostics, setup_diagnostics_with_file, DiagnosticFormatter};
