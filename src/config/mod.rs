//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use preflight::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".preflight");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "php_binary: php8.2").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.php_binary(), "php8.2");
//! ```
//!
//! # Configuration File Location
//!
//! `.preflight/config.yml` below the application root, unless `--config`
//! names another file. Command-line flags override file values.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{PreflightConfig, DEFAULT_CLI_TIMEOUT_SECS, DEFAULT_PHP_BINARY};
