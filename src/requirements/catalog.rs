//! Requirement catalogs and stable error codes.
//!
//! Catalog order is significant: checks walk each catalog front to back and
//! report the first entry that is not met.

/// A named requirement and the code reported when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementEntry {
    /// Extension or function name as PHP knows it.
    pub name: &'static str,
    /// Stable error code.
    pub code: u32,
}

const fn entry(name: &'static str, code: u32) -> RequirementEntry {
    RequirementEntry { name, code }
}

/// Stable numeric codes carried by [`ValidationError`](super::ValidationError).
pub mod codes {
    pub const VERSION_MISMATCH: u32 = 1172215790;
    pub const MBSTRING_MISSING: u32 = 1207148809;
    pub const PLATFORM_UNSUPPORTED: u32 = 1312463704;
    pub const REFLECTION_UNSUPPORTED: u32 = 1329405326;
    pub const SESSION_AUTO_START: u32 = 1224003190;
    pub const DIRECTORY_CREATE_FAILED: u32 = 1330363887;
    pub const DIRECTORY_NOT_WRITABLE: u32 = 1330372964;
}

/// PHP extensions that must be loaded.
pub const REQUIRED_EXTENSIONS: &[RequirementEntry] = &[
    entry("Reflection", 1329403179),
    entry("tokenizer", 1329403180),
    entry("json", 1329403181),
    entry("session", 1329403182),
    entry("ctype", 1329403183),
    entry("dom", 1329403184),
    entry("date", 1329403185),
    entry("libxml", 1329403186),
    entry("xmlreader", 1329403187),
    entry("xmlwriter", 1329403188),
    entry("SimpleXML", 1329403189),
    entry("openssl", 1329403190),
    entry("pcre", 1329403191),
    entry("zlib", 1329403192),
    entry("filter", 1329403193),
    entry("SPL", 1329403194),
    entry("iconv", 1329403195),
    entry("PDO", 1329403196),
    entry("hash", 1329403198),
];

/// PHP functions that must be callable (not disabled).
pub const REQUIRED_FUNCTIONS: &[RequirementEntry] = &[
    entry("system", 1330707108),
    entry("shell_exec", 1330707133),
    entry("escapeshellcmd", 1330707156),
    entry("escapeshellarg", 1330707177),
];

/// Directories below the application root that must be writable.
pub const REQUIRED_WRITABLE_DIRECTORIES: &[&str] =
    &["Configuration", "Data", "Packages", "Web/_Resources"];

/// The extension checked ahead of the catalog.
pub const MULTIBYTE_EXTENSION: &str = "mbstring";

/// Oldest Windows major version with usable symbolic links (Vista / Server 2008).
pub const MINIMUM_WINDOWS_MAJOR: u32 = 6;
