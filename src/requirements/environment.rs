//! Runtime environment checks: version, extensions, functions, settings.

use crate::runtime::Runtime;

use super::catalog::{
    codes, RequirementEntry, MINIMUM_WINDOWS_MAJOR, MULTIBYTE_EXTENSION, REQUIRED_EXTENSIONS,
    REQUIRED_FUNCTIONS,
};
use super::memory::check_memory_limit;
use super::status::{MemoryStatus, ValidationError};
use super::version::satisfies_minimum;

/// Check the runtime against every environment requirement.
///
/// Checks run in a fixed order and the first failure is returned. The
/// memory limit comes last; an unverifiable memory check is not a failure.
pub fn ensure_required_environment(
    runtime: &dyn Runtime,
    minimum_version: &str,
) -> Option<ValidationError> {
    if !satisfies_minimum(runtime.version(), minimum_version) {
        return Some(ValidationError::new(
            "This application requires PHP version %s or higher but your installed version is currently %s.",
            codes::VERSION_MISMATCH,
            vec![minimum_version.to_string(), runtime.version().to_string()],
        ));
    }

    if !runtime.has_extension(MULTIBYTE_EXTENSION) {
        return Some(ValidationError::new(
            "This application requires the PHP extension \"mbstring\" to be available.",
            codes::MBSTRING_MISSING,
            Vec::new(),
        ));
    }

    if runtime.directory_separator() != "/"
        && runtime.windows_major_version().unwrap_or(0) < MINIMUM_WINDOWS_MAJOR
    {
        return Some(ValidationError::new(
            "Windows versions older than Windows Vista or Windows Server 2008 are not supported, because they lack proper support for symbolic links.",
            codes::PLATFORM_UNSUPPORTED,
            Vec::new(),
        ));
    }

    if let Some(missing) = first_missing(REQUIRED_EXTENSIONS, |name| runtime.has_extension(name)) {
        return Some(ValidationError::new(
            "This application requires the PHP extension \"%s\" to be available.",
            missing.code,
            vec![missing.name.to_string()],
        ));
    }

    if let Some(missing) = first_missing(REQUIRED_FUNCTIONS, |name| runtime.has_function(name)) {
        return Some(ValidationError::new(
            "This application requires the PHP function \"%s\" to be available.",
            missing.code,
            vec![missing.name.to_string()],
        ));
    }

    if !runtime.preserves_doc_comments() {
        return Some(ValidationError::new(
            "Reflection of doc comments is not supported by your PHP setup. Please check if you have installed an accelerator which removes doc comments.",
            codes::REFLECTION_UNSUPPORTED,
            Vec::new(),
        ));
    }

    runtime.disable_time_limit();

    if runtime.session_auto_start() {
        return Some(ValidationError::new(
            "This application requires the PHP setting \"session.auto_start\" set to off.",
            codes::SESSION_AUTO_START,
            Vec::new(),
        ));
    }

    match check_memory_limit(runtime) {
        MemoryStatus::Insufficient(message) => Some(ValidationError::message_only(message)),
        MemoryStatus::Unverifiable => {
            tracing::warn!("Memory limits could not be verified, continuing");
            None
        }
        MemoryStatus::Sufficient => None,
    }
}

/// First catalog entry rejected by `present`, in catalog order.
fn first_missing<F>(catalog: &'static [RequirementEntry], present: F) -> Option<&'static RequirementEntry>
where
    F: Fn(&str) -> bool,
{
    catalog.iter().find(|entry| {
        let found = present(entry.name);
        if !found {
            tracing::debug!("Requirement '{}' not met", entry.name);
        }
        !found
    })
}
