//! Configuration file discovery and loading.

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the config file relative to the application root.
pub fn default_config_path(app_root: &Path) -> PathBuf {
    app_root.join(".preflight").join("config.yml")
}

/// Load a single config file and parse it into PreflightConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PreflightConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreflightError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PreflightError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into PreflightConfig.
///
/// An empty document is treated as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PreflightConfig> {
    if content.trim().is_empty() {
        return Ok(PreflightConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| PreflightError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the default
/// `.preflight/config.yml` under `app_root` is used if present; otherwise
/// the defaults apply.
pub fn load_config(app_root: &Path, config_override: Option<&Path>) -> Result<PreflightConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    let path = default_config_path(app_root);
    if path.exists() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(PreflightConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, content: &str) {
        let dir = root.join(".preflight");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
    }

    #[test]
    fn missing_default_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PreflightConfig::default());
    }

    #[test]
    fn loads_default_location() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "php_binary: php8.2\n");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.php_binary(), "php8.2");
    }

    #[test]
    fn empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PreflightConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let result = load_config(temp.path(), Some(&missing));
        assert!(matches!(
            result,
            Err(PreflightError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "cli_timeout_secs: [not a number");

        let result = load_config(temp.path(), None);
        assert!(matches!(
            result,
            Err(PreflightError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn explicit_file_overrides_default_location() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "php_binary: php8.2\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "php_binary: php7.4\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.php_binary(), "php7.4");
    }
}
