//! Configuration schema definitions for preflight.
//!
//! This module contains the struct that maps to the YAML configuration
//! file format (`.preflight/config.yml`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default PHP binary looked up on PATH.
pub const DEFAULT_PHP_BINARY: &str = "php";

/// Default time allowed for a single PHP invocation.
pub const DEFAULT_CLI_TIMEOUT_SECS: u64 = 10;

/// Root configuration structure for `.preflight/config.yml`.
///
/// Every field is optional; an absent file is equivalent to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreflightConfig {
    /// PHP binary used for both the service snapshot and the CLI query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_binary: Option<String>,

    /// ini file of the long-running service (passed to PHP as `-c`).
    ///
    /// Relative paths are resolved against the application root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ini: Option<PathBuf>,

    /// Raise the required PHP version above the built-in minimum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_php_version: Option<String>,

    /// Seconds before a PHP invocation is killed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_timeout_secs: Option<u64>,
}

impl PreflightConfig {
    /// PHP binary to run, falling back to [`DEFAULT_PHP_BINARY`].
    pub fn php_binary(&self) -> &str {
        self.php_binary.as_deref().unwrap_or(DEFAULT_PHP_BINARY)
    }

    /// Timeout for PHP invocations, falling back to [`DEFAULT_CLI_TIMEOUT_SECS`].
    pub fn cli_timeout_secs(&self) -> u64 {
        self.cli_timeout_secs.unwrap_or(DEFAULT_CLI_TIMEOUT_SECS)
    }

    /// Apply values from `other` on top of `self`; set fields win.
    pub fn merge(mut self, other: PreflightConfig) -> Self {
        if other.php_binary.is_some() {
            self.php_binary = other.php_binary;
        }
        if other.service_ini.is_some() {
            self.service_ini = other.service_ini;
        }
        if other.minimum_php_version.is_some() {
            self.minimum_php_version = other.minimum_php_version;
        }
        if other.cli_timeout_secs.is_some() {
            self.cli_timeout_secs = other.cli_timeout_secs;
        }
        self
    }
}
