//! Parsing of PHP ini size values ("128M", "1G", "512K").

/// Multiplier tiers selected by the unit suffix: `value × 1024^tier`.
const UNIT_TIERS: &[(char, u32)] = &[('k', 1), ('m', 2), ('g', 3)];

/// Convert a shorthand size value into bytes.
///
/// Surrounding whitespace is ignored. The leading decimal digits form the
/// number (no digits yields 0) and the last character, case-insensitively,
/// selects the unit. Any other trailing character, digits included, leaves
/// the number as-is.
///
/// Only the integer part counts, the way PHP itself reads ini sizes:
/// `"1.5G"` is 1 GiB, not 1.5 GiB.
///
/// Unset and unlimited (`-1`) values have no byte count; callers must
/// handle them before calling this.
///
/// ```
/// use preflight::requirements::bytes;
///
/// assert_eq!(bytes("128M"), 128 * 1024 * 1024);
/// assert_eq!(bytes("1000"), 1000);
/// ```
pub fn bytes(value: &str) -> u64 {
    let value = value.trim();

    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let number = value[..digits_end].parse::<u64>().unwrap_or(0);

    let tier = value
        .chars()
        .last()
        .map(|c| c.to_ascii_lowercase())
        .and_then(|unit| {
            UNIT_TIERS
                .iter()
                .find(|(suffix, _)| *suffix == unit)
                .map(|(_, tier)| *tier)
        })
        .unwrap_or(0);

    number.saturating_mul(1024u64.pow(tier))
}
