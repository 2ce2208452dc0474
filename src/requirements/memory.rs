//! Memory limit comparison between the service and the command line.
//!
//! PHP keeps separate ini files for the long-running service and for CLI
//! invocations, so the two `memory_limit` values can differ. Both have to
//! reach [`MINIMUM_MEMORY_LIMIT`].

use crate::runtime::Runtime;

use super::bytes::bytes;
use super::status::MemoryStatus;

/// Below this the application will run into problems.
pub const MINIMUM_MEMORY_LIMIT: &str = "128M";

/// Suggested in warnings as the comfortable value.
pub const RECOMMENDED_MEMORY_LIMIT: &str = "256M";

/// A parsed memory limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryLimit {
    /// No ceiling (`-1`, or unset on the service side).
    Unlimited,
    /// A ceiling in bytes.
    Bytes(u64),
    /// The CLI did not report a value.
    Unknown,
}

impl MemoryLimit {
    /// Whether this limit reaches `minimum` bytes; `None` when unknown.
    pub fn meets(&self, minimum: u64) -> Option<bool> {
        match self {
            MemoryLimit::Unlimited => Some(true),
            MemoryLimit::Bytes(value) => Some(*value >= minimum),
            MemoryLimit::Unknown => None,
        }
    }
}

/// A configured limit as written, next to its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLimitValue {
    /// The value as PHP reported it.
    pub raw: String,
    /// The parsed limit.
    pub limit: MemoryLimit,
}

impl MemoryLimitValue {
    /// Limit of the long-running service. Empty means unlimited.
    pub fn service(raw: &str) -> Self {
        let trimmed = raw.trim();
        let limit = if trimmed.is_empty() {
            MemoryLimit::Unlimited
        } else {
            parse_set_limit(trimmed)
        };
        Self {
            raw: trimmed.to_string(),
            limit,
        }
    }

    /// Limit reported by the CLI. Missing or empty output is unknown and
    /// never reaches the byte parser.
    pub fn cli(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self {
                raw: value.to_string(),
                limit: parse_set_limit(value),
            },
            None => Self {
                raw: String::new(),
                limit: MemoryLimit::Unknown,
            },
        }
    }
}

/// Negative values (PHP uses `-1`) mean no limit.
fn parse_set_limit(value: &str) -> MemoryLimit {
    if value.starts_with('-') {
        MemoryLimit::Unlimited
    } else {
        MemoryLimit::Bytes(bytes(value))
    }
}

/// Compare the service and CLI memory limits against the minimum.
///
/// The CLI limit is read by running PHP; if that can't be done the result
/// is [`MemoryStatus::Unverifiable`].
pub fn check_memory_limit(runtime: &dyn Runtime) -> MemoryStatus {
    let service = MemoryLimitValue::service(runtime.memory_limit());

    let cli = match runtime.query_cli_memory_limit() {
        Ok(raw) => MemoryLimitValue::cli(raw.as_deref()),
        Err(e) => {
            tracing::warn!("Could not read CLI memory limit: {}", e);
            return MemoryStatus::Unverifiable;
        }
    };

    tracing::debug!(
        "Memory limits: service={:?} ({:?}), cli={:?} ({:?})",
        service.raw,
        service.limit,
        cli.raw,
        cli.limit
    );

    compare_limits(&service, &cli)
}

/// Decide the memory status for a pair of limits.
pub fn compare_limits(service: &MemoryLimitValue, cli: &MemoryLimitValue) -> MemoryStatus {
    let minimum = bytes(MINIMUM_MEMORY_LIMIT);

    if service.limit == cli.limit {
        return match service.limit.meets(minimum) {
            Some(false) => MemoryStatus::Insufficient(format!(
                "Your memory limit is too low! With {} you will encounter problems. {}",
                service.raw,
                advice()
            )),
            _ => MemoryStatus::Sufficient,
        };
    }

    // An unknown CLI limit can't be judged; only the service side counts then.
    let service_ok = service.limit.meets(minimum).unwrap_or(true);
    let cli_ok = cli.limit.meets(minimum).unwrap_or(true);

    match (service_ok, cli_ok) {
        (true, true) => MemoryStatus::Sufficient,
        (false, false) => MemoryStatus::Insufficient(format!(
            "Your memory limits for the web server and the CLI are too low! With {} (web server) and {} (CLI) you will encounter problems. {}",
            service.raw,
            cli.raw,
            advice()
        )),
        (false, true) => MemoryStatus::Insufficient(format!(
            "Your memory limit for the web server is too low! With {} you will encounter problems. {}",
            service.raw,
            advice()
        )),
        (true, false) => MemoryStatus::Insufficient(format!(
            "Your memory limit for the CLI is too low! With {} you will encounter problems. {}",
            cli.raw,
            advice()
        )),
    }
}

fn advice() -> String {
    format!(
        "Raise the memory limit to at least {}. More than {} would be even better.",
        MINIMUM_MEMORY_LIMIT, RECOMMENDED_MEMORY_LIMIT
    )
}
