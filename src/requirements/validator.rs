//! Entry point tying the environment and file permission checks together.

use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::environment::ensure_required_environment;
use super::permissions::check_file_permissions;
use super::status::ValidationError;
use super::version::{satisfies_minimum, MINIMUM_PHP_VERSION};

/// Title of errors raised by the environment checks.
pub const ENVIRONMENT_ERROR_TITLE: &str = "Environment requirements not fulfilled";

/// Title of errors raised by the file permission checks.
pub const FILE_PERMISSIONS_ERROR_TITLE: &str = "Error with file system permissions";

/// Validates the basic requirements of the application before it starts.
///
/// Nothing is cached: every call to [`find_error`](Self::find_error) runs
/// all checks again.
///
/// # Example
///
/// ```
/// use preflight::requirements::BasicRequirements;
/// use preflight::runtime::StaticRuntime;
/// use tempfile::TempDir;
///
/// let root = TempDir::new().unwrap();
/// let runtime = StaticRuntime::complete().without_extension("json");
/// let requirements = BasicRequirements::new(&runtime, root.path());
///
/// let error = requirements.find_error().unwrap();
/// assert_eq!(error.code, Some(1329403181));
/// ```
pub struct BasicRequirements<'a> {
    runtime: &'a dyn Runtime,
    app_root: PathBuf,
    minimum_version: String,
}

impl<'a> BasicRequirements<'a> {
    /// Create a validator for the application at `app_root`.
    pub fn new(runtime: &'a dyn Runtime, app_root: &Path) -> Self {
        Self {
            runtime,
            app_root: app_root.to_path_buf(),
            minimum_version: MINIMUM_PHP_VERSION.to_string(),
        }
    }

    /// Require a newer PHP than the built-in minimum.
    ///
    /// Versions below the built-in minimum are ignored.
    pub fn with_minimum_version(mut self, version: &str) -> Self {
        if satisfies_minimum(version, MINIMUM_PHP_VERSION) {
            self.minimum_version = version.to_string();
        } else {
            tracing::warn!(
                "Ignoring minimum PHP version {} below built-in {}",
                version,
                MINIMUM_PHP_VERSION
            );
        }
        self
    }

    /// The PHP version currently required.
    pub fn minimum_version(&self) -> &str {
        &self.minimum_version
    }

    /// The application root the folders are resolved against.
    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// Find the first unmet requirement.
    ///
    /// Environment checks run first; file permissions are only checked when
    /// the environment is fine. Returns `None` when everything is met.
    pub fn find_error(&self) -> Option<ValidationError> {
        if let Some(error) = self.ensure_required_environment() {
            return Some(error.with_title(ENVIRONMENT_ERROR_TITLE));
        }

        if let Some(error) = self.check_file_permissions() {
            return Some(error.with_title(FILE_PERMISSIONS_ERROR_TITLE));
        }

        tracing::debug!("All basic requirements fulfilled");
        None
    }

    /// Run only the environment checks.
    pub fn ensure_required_environment(&self) -> Option<ValidationError> {
        ensure_required_environment(self.runtime, &self.minimum_version)
    }

    /// Run only the file permission checks.
    pub fn check_file_permissions(&self) -> Option<ValidationError> {
        check_file_permissions(&self.app_root)
    }
}
