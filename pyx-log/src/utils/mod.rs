//! # Utilities Module
//!
//! Internal utility modules for the pyx-log crate.

pub(crate) mod diagnostics;
pub(crate) mod style;

pub use diagnostics::{setup_diagnostics, setup_diagnostics_with_file, DiagnosticFormatter};
