//! Settings shared by every command: application root, config and runtime.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{load_config, PreflightConfig};
use crate::error::{PreflightError, Result};
use crate::runtime::{PhpRuntime, Runtime, RuntimeSnapshot, StaticRuntime};

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    app_root: PathBuf,
    config: PreflightConfig,
}

impl RunContext {
    /// Build a context from an application root and a config.
    pub fn new(app_root: &Path, config: PreflightConfig) -> Self {
        Self {
            app_root: app_root.to_path_buf(),
            config,
        }
    }

    /// Load the config for `app_root` and apply `overrides` on top.
    pub fn load(
        app_root: &Path,
        config_path: Option<&Path>,
        overrides: PreflightConfig,
    ) -> Result<Self> {
        let config = load_config(app_root, config_path)?.merge(overrides);
        if config.cli_timeout_secs() == 0 {
            return Err(PreflightError::ConfigValidationError {
                message: "cli_timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(Self::new(app_root, config))
    }

    /// The application root.
    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// The effective config.
    pub fn config(&self) -> &PreflightConfig {
        &self.config
    }

    /// The service ini file, resolved against the application root.
    pub fn service_ini(&self) -> Option<PathBuf> {
        self.config
            .service_ini
            .as_ref()
            .map(|ini| self.app_root.join(ini))
    }

    /// Inspect the configured PHP binary.
    pub fn php_runtime(&self) -> Result<PhpRuntime> {
        PhpRuntime::collect(
            self.config.php_binary(),
            self.service_ini().as_deref(),
            Duration::from_secs(self.config.cli_timeout_secs()),
        )
    }

    /// The runtime to check: a saved snapshot if given, PHP otherwise.
    pub fn runtime(&self, snapshot: Option<&Path>) -> Result<Box<dyn Runtime>> {
        match snapshot {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let snapshot: RuntimeSnapshot =
                    serde_json::from_str(&content).map_err(|e| PreflightError::ProbeOutput {
                        message: format!("invalid snapshot {}: {}", path.display(), e),
                    })?;
                Ok(Box::new(StaticRuntime::from_snapshot(snapshot)))
            }
            None => Ok(Box::new(self.php_runtime()?)),
        }
    }
}
