//! Serializable description of a PHP runtime.
//!
//! A snapshot is collected by running a small PHP script that prints one
//! `key<TAB>value` line per fact. The line format keeps the probe usable on
//! installations that lack the very extensions being checked (`json`
//! included).
//!
//! The command-line memory limit is not part of the probe output; it comes
//! from a separate PHP call and is stored in the snapshot when one is saved
//! for replay.

use crate::error::{PreflightError, Result};
use crate::requirements::catalog::REQUIRED_FUNCTIONS;

use super::ini_flag_enabled;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facts about a PHP runtime needed by the requirement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    /// `PHP_VERSION`.
    pub version: String,
    /// `get_loaded_extensions()`.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// `function_exists()` for each required function.
    #[serde(default)]
    pub functions: BTreeMap<String, bool>,
    /// `DIRECTORY_SEPARATOR`.
    #[serde(default = "default_separator")]
    pub directory_separator: String,
    /// `PHP_WINDOWS_VERSION_MAJOR`, when defined.
    #[serde(default)]
    pub windows_major: Option<u32>,
    /// Whether `ReflectionFunction::getDocComment()` returned the comment.
    #[serde(default)]
    pub doc_comments: bool,
    /// Raw `session.auto_start`.
    #[serde(default)]
    pub session_auto_start: String,
    /// Raw `memory_limit`.
    #[serde(default)]
    pub memory_limit: String,
    /// Raw `opcache.enable`; empty when OPcache is not loaded.
    #[serde(default)]
    pub opcache_enable: String,
    /// Raw `opcache.save_comments`; empty when OPcache is not loaded.
    #[serde(default)]
    pub opcache_save_comments: String,
    /// What the command-line memory limit query answered.
    #[serde(default)]
    pub cli_memory_limit: CliLimitResponse,
}

/// What the command-line memory limit query answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum CliLimitResponse {
    /// The CLI printed this value.
    Reported(String),
    /// The CLI ran but printed nothing usable, or was never asked.
    #[default]
    Empty,
    /// The query could not be run at all.
    Fails,
}

fn default_separator() -> String {
    "/".to_string()
}

impl RuntimeSnapshot {
    /// Whether an extension is loaded, ignoring case like `extension_loaded()`.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions
            .iter()
            .any(|loaded| loaded.eq_ignore_ascii_case(name))
    }

    /// Whether a function was reported as available.
    ///
    /// Functions that were not probed count as unavailable.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.get(name).copied().unwrap_or(false)
    }

    /// Whether doc comments survive in the long-running service.
    ///
    /// `php -r` code bypasses OPcache, so an enabled OPcache with
    /// `opcache.save_comments` off counts as stripping too.
    pub fn preserves_doc_comments(&self) -> bool {
        let strips_comments = ini_flag_enabled(&self.opcache_enable)
            && !self.opcache_save_comments.trim().is_empty()
            && !ini_flag_enabled(&self.opcache_save_comments);
        self.doc_comments && !strips_comments
    }
}

/// PHP source passed to `php -r` to collect a snapshot.
pub fn probe_script() -> String {
    let functions = REQUIRED_FUNCTIONS
        .iter()
        .map(|entry| format!("'{}'", entry.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"/** preflight doc comment probe */
function preflight_doc_probe() {{}}
echo "version\t", PHP_VERSION, "\n";
foreach (get_loaded_extensions() as $e) {{ echo "extension\t", $e, "\n"; }}
foreach (array({functions}) as $f) {{ echo "function\t", $f, "\t", function_exists($f) ? '1' : '0', "\n"; }}
echo "directory_separator\t", DIRECTORY_SEPARATOR, "\n";
if (defined('PHP_WINDOWS_VERSION_MAJOR')) {{ echo "windows_major\t", PHP_WINDOWS_VERSION_MAJOR, "\n"; }}
$doc = false;
if (class_exists('ReflectionFunction')) {{ $r = new ReflectionFunction('preflight_doc_probe'); $doc = $r->getDocComment(); }}
echo "doc_comments\t", ($doc !== false && $doc !== '') ? '1' : '0', "\n";
echo "session_auto_start\t", ini_get('session.auto_start'), "\n";
echo "memory_limit\t", ini_get('memory_limit'), "\n";
echo "opcache_enable\t", ini_get('opcache.enable'), "\n";
echo "opcache_save_comments\t", ini_get('opcache.save_comments'), "\n";
"#
    )
}

/// Parse the output of [`probe_script`].
///
/// Unknown keys and lines without a tab are ignored (PHP notices end up
/// there). A missing `version` line is an error.
pub fn parse_probe_output(output: &str) -> Result<RuntimeSnapshot> {
    let mut version = None;
    let mut snapshot = RuntimeSnapshot {
        version: String::new(),
        extensions: Vec::new(),
        functions: BTreeMap::new(),
        directory_separator: default_separator(),
        windows_major: None,
        doc_comments: false,
        session_auto_start: String::new(),
        memory_limit: String::new(),
        opcache_enable: String::new(),
        opcache_save_comments: String::new(),
        cli_memory_limit: CliLimitResponse::Empty,
    };

    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        let mut parts = line.splitn(3, '\t');
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };

        match key {
            "version" => version = Some(value.trim().to_string()),
            "extension" => snapshot.extensions.push(value.to_string()),
            "function" => {
                let available = parts.next().map(|flag| flag.trim() == "1").unwrap_or(false);
                snapshot.functions.insert(value.to_string(), available);
            }
            "directory_separator" => snapshot.directory_separator = value.to_string(),
            "windows_major" => snapshot.windows_major = value.trim().parse().ok(),
            "doc_comments" => snapshot.doc_comments = value.trim() == "1",
            "session_auto_start" => snapshot.session_auto_start = value.trim().to_string(),
            "memory_limit" => snapshot.memory_limit = value.trim().to_string(),
            "opcache_enable" => snapshot.opcache_enable = value.trim().to_string(),
            "opcache_save_comments" => {
                snapshot.opcache_save_comments = value.trim().to_string()
            }
            other => tracing::debug!("Ignoring unknown probe key '{}'", other),
        }
    }

    snapshot.version = version.ok_or_else(|| PreflightError::ProbeOutput {
        message: "no version line in probe output".to_string(),
    })?;

    Ok(snapshot)
}
