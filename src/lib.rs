//! Preflight - basic requirement checks for PHP applications.
//!
//! Before the application boots, Preflight makes sure the PHP runtime and
//! the file system can support it: PHP version, extensions, functions,
//! settings, memory limits and writable folders. The first unmet
//! requirement is reported with a stable code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`files`] - Filesystem helpers
//! - [`requirements`] - The requirement checks
//! - [`runtime`] - Inspection of the PHP runtime
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use preflight::requirements::BasicRequirements;
//! use preflight::runtime::StaticRuntime;
//! use tempfile::TempDir;
//!
//! let root = TempDir::new().unwrap();
//! let runtime = StaticRuntime::complete();
//!
//! assert!(BasicRequirements::new(&runtime, root.path()).find_error().is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod requirements;
pub mod runtime;
pub mod shell;
pub mod ui;

pub use error::{PreflightError, Result};
