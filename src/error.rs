//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the error type for things that
//! stop the validator from running at all, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Unmet requirements are *not* errors: they are reported as
//!   [`ValidationError`](crate::requirements::ValidationError) values
//! - Use `PreflightError` when the validator itself cannot do its job
//!   (unreadable config, PHP binary missing, unparsable probe output)
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Config file given explicitly but not present.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The PHP binary could not be started.
    #[error("Failed to run PHP binary '{binary}': {message}")]
    RuntimeUnavailable { binary: String, message: String },

    /// The PHP probe ran but its output could not be understood.
    #[error("Unexpected output from runtime probe: {message}")]
    ProbeOutput { message: String },

    /// A spawned command did not finish in time.
    #[error("Command timed out after {seconds}s: {command}")]
    Timeout { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
