//! Basic requirement checks run before the application starts.
//!
//! [`BasicRequirements::find_error`] runs the environment checks (PHP
//! version, extensions, functions, settings, memory limits) and then the
//! file permission checks, and returns the first unmet requirement.
//!
//! # Modules
//!
//! - [`catalog`] - Required extensions, functions and folders with their codes
//! - [`status`] - `ValidationError` and `MemoryStatus`
//! - [`environment`] - Runtime environment checks
//! - [`memory`] - Service vs. CLI memory limit comparison
//! - [`permissions`] - Writable folder checks
//! - [`bytes`] - Size shorthand parser
//! - [`version`] - Version comparison
//! - [`validator`] - The `BasicRequirements` entry point

pub mod bytes;
pub mod catalog;
pub mod environment;
pub mod memory;
pub mod permissions;
pub mod status;
pub mod validator;
pub mod version;

pub use bytes::bytes;
pub use catalog::{codes, RequirementEntry};
pub use memory::{check_memory_limit, MemoryLimit, MemoryLimitValue};
pub use status::{MemoryStatus, ValidationError};
pub use validator::{BasicRequirements, ENVIRONMENT_ERROR_TITLE, FILE_PERMISSIONS_ERROR_TITLE};
