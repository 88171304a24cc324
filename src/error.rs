//! Error types for ignition-lint operations.
//!
//! This module defines [`LintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and surface before any file is linted
//! - Document parse errors are recovered per file by the orchestrator
//! - Script linter errors degrade script linting, never the whole run
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ignition-lint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// Both a named style and a pattern were given for the same region.
    #[error("Cannot specify both ({region}_style: {style}, {region}_style_rgx: {pattern}). Please choose one or the other.")]
    ConflictingStyles {
        region: &'static str,
        style: String,
        pattern: String,
    },

    /// Neither a named style nor a pattern was given for a region.
    #[error("{label} naming style not specified. Use either ({region}_style) or ({region}_style_rgx).")]
    MissingStyle {
        region: &'static str,
        label: &'static str,
    },

    /// A named style that cannot be used for the given region.
    #[error("{style} is not a valid {region} naming style. Please use a different style.")]
    DisallowedStyle { region: &'static str, style: String },

    /// A custom pattern failed to compile.
    #[error("Invalid naming pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A view document is not valid JSON.
    #[error("Error parsing file {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// The external script linter could not be started.
    #[error("Script linter '{program}' is not available: {message}")]
    ScriptLinterUnavailable { program: String, message: String },

    /// The external script linter failed in a way that produced no usable output.
    #[error("Script linter failed on {context}: {message}")]
    ScriptLinterFailed { context: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Whether this error is a configuration problem that must stop the run.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConflictingStyles { .. }
                | Self::MissingStyle { .. }
                | Self::DisallowedStyle { .. }
                | Self::InvalidPattern { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for ignition-lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
