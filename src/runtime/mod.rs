//! Inspection of the PHP runtime the application will run on.
//!
//! The requirement checks never talk to PHP directly; they go through the
//! [`Runtime`] trait. [`PhpRuntime`] answers by running the PHP binary,
//! [`StaticRuntime`] answers from values held in memory.
//!
//! # Modules
//!
//! - [`snapshot`] - Serializable description of a PHP runtime
//! - [`php`] - Process-backed runtime
//! - [`fixed`] - In-memory runtime
//! - [`limits`] - Execution time limits of the current process

pub mod fixed;
pub mod limits;
pub mod php;
pub mod snapshot;

pub use fixed::StaticRuntime;
pub use php::PhpRuntime;
pub use snapshot::{CliLimitResponse, RuntimeSnapshot};

use crate::error::Result;

/// Everything the requirement checks need to know about the host runtime.
pub trait Runtime {
    /// PHP version string (e.g. `8.2.12-1ubuntu1`).
    fn version(&self) -> &str;

    /// Whether an extension is loaded. Names match case-insensitively.
    fn has_extension(&self, name: &str) -> bool;

    /// Whether a function exists and is not disabled.
    fn has_function(&self, name: &str) -> bool;

    /// The runtime's directory separator (`/` on POSIX).
    fn directory_separator(&self) -> &str;

    /// Windows major version, when running on Windows.
    fn windows_major_version(&self) -> Option<u32>;

    /// Whether reflection can read doc comments back.
    fn preserves_doc_comments(&self) -> bool;

    /// Whether sessions are started automatically on every request.
    fn session_auto_start(&self) -> bool;

    /// Raw `memory_limit` of the long-running process; empty if unset.
    fn memory_limit(&self) -> &str;

    /// Lift execution time limits, best effort.
    fn disable_time_limit(&self);

    /// Ask the command-line runtime for its `memory_limit`.
    ///
    /// `Ok(None)` means it ran but reported nothing usable. `Err` means the
    /// query could not be completed (spawn failure, timeout).
    fn query_cli_memory_limit(&self) -> Result<Option<String>>;
}

/// Whether a PHP ini flag value reads as enabled.
///
/// PHP accepts `1`, `on`, `yes` and `true` for boolean settings.
pub fn ini_flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "on" | "yes" | "true"
    )
}
