//! PHP version parsing and comparison.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Oldest PHP version the application runs on.
pub const MINIMUM_PHP_VERSION: &str = "5.3.2";

/// Leading dotted-numeric part of a version string ("8.2.12" in "8.2.12-1+ubuntu22.04").
static VERSION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*v?(\d+(?:\.\d+)*)").expect("VERSION_PREFIX must compile")
});

/// Extract the numeric components of a version string.
///
/// Returns `None` if the string does not start with a number.
pub fn parse_version(version: &str) -> Option<Vec<u32>> {
    let caps = VERSION_PREFIX.captures(version)?;
    caps[1]
        .split('.')
        .map(|part| part.parse().ok())
        .collect()
}

/// Compare two version strings component by component.
///
/// The shorter version is padded with zeros, so `"8.1"` equals `"8.1.0"`.
/// An unparsable version sorts before every parsable one.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => {
            let len = a.len().max(b.len());
            for i in 0..len {
                let l = a.get(i).copied().unwrap_or(0);
                let r = b.get(i).copied().unwrap_or(0);
                match l.cmp(&r) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Whether `actual` is at least `minimum`.
pub fn satisfies_minimum(actual: &str, minimum: &str) -> bool {
    compare_versions(actual, minimum) != Ordering::Less
}
