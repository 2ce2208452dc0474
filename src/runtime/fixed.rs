//! Runtime answered from values held in memory.
//!
//! Used to replay a saved snapshot (`preflight check --snapshot`) and to
//! simulate environments in tests.
//!
//! # Example
//!
//! ```
//! use preflight::runtime::{Runtime, StaticRuntime};
//!
//! let runtime = StaticRuntime::complete()
//!     .without_extension("json")
//!     .with_memory_limit("64M");
//! assert!(!runtime.has_extension("json"));
//! assert_eq!(runtime.memory_limit(), "64M");
//! ```

use std::cell::Cell;

use crate::error::{PreflightError, Result};
use crate::requirements::catalog::{MULTIBYTE_EXTENSION, REQUIRED_EXTENSIONS, REQUIRED_FUNCTIONS};

use super::snapshot::{CliLimitResponse, RuntimeSnapshot};
use super::Runtime;

/// An in-memory [`Runtime`].
#[derive(Debug, Clone)]
pub struct StaticRuntime {
    snapshot: RuntimeSnapshot,
    time_limit_disabled: Cell<bool>,
}

impl StaticRuntime {
    /// A runtime answering from `snapshot`, CLI memory limit included.
    pub fn from_snapshot(snapshot: RuntimeSnapshot) -> Self {
        Self {
            snapshot,
            time_limit_disabled: Cell::new(false),
        }
    }

    /// A runtime meeting every requirement.
    pub fn complete() -> Self {
        let mut extensions: Vec<String> = REQUIRED_EXTENSIONS
            .iter()
            .map(|entry| entry.name.to_string())
            .collect();
        extensions.push(MULTIBYTE_EXTENSION.to_string());

        let functions = REQUIRED_FUNCTIONS
            .iter()
            .map(|entry| (entry.name.to_string(), true))
            .collect();

        Self::from_snapshot(RuntimeSnapshot {
            version: "8.2.0".to_string(),
            extensions,
            functions,
            directory_separator: "/".to_string(),
            windows_major: None,
            doc_comments: true,
            session_auto_start: "0".to_string(),
            memory_limit: "256M".to_string(),
            opcache_enable: String::new(),
            opcache_save_comments: String::new(),
            cli_memory_limit: CliLimitResponse::Reported("256M".to_string()),
        })
    }

    /// Replace the PHP version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.snapshot.version = version.to_string();
        self
    }

    /// Unload an extension (case-insensitive).
    pub fn without_extension(mut self, name: &str) -> Self {
        self.snapshot
            .extensions
            .retain(|loaded| !loaded.eq_ignore_ascii_case(name));
        self
    }

    /// Disable a function.
    pub fn without_function(mut self, name: &str) -> Self {
        self.snapshot.functions.insert(name.to_string(), false);
        self
    }

    /// Pretend to run on Windows with the given major version.
    pub fn on_windows(mut self, major: u32) -> Self {
        self.snapshot.directory_separator = "\\".to_string();
        self.snapshot.windows_major = Some(major);
        self
    }

    /// Pretend doc comments are stripped.
    pub fn without_doc_comments(mut self) -> Self {
        self.snapshot.doc_comments = false;
        self
    }

    /// Set `opcache.enable` and `opcache.save_comments`.
    pub fn with_opcache(mut self, enable: &str, save_comments: &str) -> Self {
        self.snapshot.opcache_enable = enable.to_string();
        self.snapshot.opcache_save_comments = save_comments.to_string();
        self
    }

    /// Set `session.auto_start`.
    pub fn with_session_auto_start(mut self, value: &str) -> Self {
        self.snapshot.session_auto_start = value.to_string();
        self
    }

    /// Set the service memory limit.
    pub fn with_memory_limit(mut self, value: &str) -> Self {
        self.snapshot.memory_limit = value.to_string();
        self
    }

    /// Set what the CLI memory limit query answers.
    pub fn with_cli(mut self, response: CliLimitResponse) -> Self {
        self.snapshot.cli_memory_limit = response;
        self
    }

    /// Set the CLI memory limit.
    pub fn with_cli_memory_limit(self, value: &str) -> Self {
        self.with_cli(CliLimitResponse::Reported(value.to_string()))
    }

    /// Whether [`Runtime::disable_time_limit`] has been called.
    pub fn time_limit_disabled(&self) -> bool {
        self.time_limit_disabled.get()
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &RuntimeSnapshot {
        &self.snapshot
    }
}

impl Runtime for StaticRuntime {
    fn version(&self) -> &str {
        &self.snapshot.version
    }

    fn has_extension(&self, name: &str) -> bool {
        self.snapshot.has_extension(name)
    }

    fn has_function(&self, name: &str) -> bool {
        self.snapshot.has_function(name)
    }

    fn directory_separator(&self) -> &str {
        &self.snapshot.directory_separator
    }

    fn windows_major_version(&self) -> Option<u32> {
        self.snapshot.windows_major
    }

    fn preserves_doc_comments(&self) -> bool {
        self.snapshot.preserves_doc_comments()
    }

    fn session_auto_start(&self) -> bool {
        super::ini_flag_enabled(&self.snapshot.session_auto_start)
    }

    fn memory_limit(&self) -> &str {
        &self.snapshot.memory_limit
    }

    fn disable_time_limit(&self) {
        self.time_limit_disabled.set(true);
    }

    fn query_cli_memory_limit(&self) -> Result<Option<String>> {
        match &self.snapshot.cli_memory_limit {
            CliLimitResponse::Reported(value) => Ok(Some(value.clone())),
            CliLimitResponse::Empty => Ok(None),
            CliLimitResponse::Fails => Err(PreflightError::RuntimeUnavailable {
                binary: "php".to_string(),
                message: "CLI memory limit query failed".to_string(),
            }),
        }
    }
}
