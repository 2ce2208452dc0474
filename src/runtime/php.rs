//! Runtime backed by a real PHP binary.

use std::path::Path;
use std::time::Duration;

use crate::error::{PreflightError, Result};
use crate::shell::{execute, CommandOptions};

use super::limits::{lift_cpu_time_limit, php_time_limit_args};
use super::snapshot::{parse_probe_output, probe_script, CliLimitResponse, RuntimeSnapshot};
use super::Runtime;

/// PHP code asking the command-line runtime for its memory limit.
pub const CLI_MEMORY_LIMIT_SCRIPT: &str = r#"echo ini_get("memory_limit");"#;

/// A PHP installation inspected through its binary.
///
/// The long-running service is described by a snapshot taken once, with the
/// service's ini file when one is configured. The command-line memory limit
/// is queried fresh on every call.
#[derive(Debug, Clone)]
pub struct PhpRuntime {
    binary: String,
    timeout: Duration,
    snapshot: RuntimeSnapshot,
}

impl PhpRuntime {
    /// Run the probe script and build a runtime from its output.
    ///
    /// # Errors
    ///
    /// `RuntimeUnavailable` if the binary can't be started, `Timeout` if it
    /// hangs, `ProbeOutput` if it fails or prints something unexpected.
    pub fn collect(binary: &str, service_ini: Option<&Path>, timeout: Duration) -> Result<Self> {
        let mut args = Vec::new();
        if let Some(ini) = service_ini {
            args.push("-c".to_string());
            args.push(ini.to_string_lossy().to_string());
        }
        args.extend(php_time_limit_args());
        args.push("-r".to_string());
        args.push(probe_script());

        let options = CommandOptions {
            timeout: Some(timeout),
        };
        let result = execute(binary, &args, &options)?;

        if !result.success {
            return Err(PreflightError::ProbeOutput {
                message: format!(
                    "{} exited with {:?}: {}",
                    binary,
                    result.exit_code,
                    result.stderr.trim()
                ),
            });
        }

        let snapshot = parse_probe_output(&result.stdout)?;
        tracing::debug!(
            "Probed PHP {} with {} extension(s)",
            snapshot.version,
            snapshot.extensions.len()
        );

        Ok(Self {
            binary: binary.to_string(),
            timeout,
            snapshot,
        })
    }

    /// The snapshot of the long-running service.
    pub fn snapshot(&self) -> &RuntimeSnapshot {
        &self.snapshot
    }

    /// The service snapshot with the CLI memory limit queried and stored,
    /// ready to be saved and replayed through a `StaticRuntime`.
    pub fn snapshot_with_cli_limit(&self) -> RuntimeSnapshot {
        let mut snapshot = self.snapshot.clone();
        snapshot.cli_memory_limit = match self.query_cli_memory_limit() {
            Ok(Some(value)) => CliLimitResponse::Reported(value),
            Ok(None) => CliLimitResponse::Empty,
            Err(e) => {
                tracing::warn!("Could not read CLI memory limit: {}", e);
                CliLimitResponse::Fails
            }
        };
        snapshot
    }
}

impl Runtime for PhpRuntime {
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
        if let Err(e) = lift_cpu_time_limit() {
            tracing::warn!("Could not lift CPU time limit: {}", e);
        }
    }

    fn query_cli_memory_limit(&self) -> Result<Option<String>> {
        let mut args = php_time_limit_args();
        args.push("-r".to_string());
        args.push(CLI_MEMORY_LIMIT_SCRIPT.to_string());

        let options = CommandOptions {
            timeout: Some(self.timeout),
        };
        let result = execute(&self.binary, &args, &options)?;

        if !result.success {
            tracing::debug!(
                "CLI memory limit query exited with {:?}",
                result.exit_code
            );
            return Ok(None);
        }

        Ok(result.first_line().map(str::to_string))
    }
}
