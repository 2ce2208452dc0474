//! Filesystem helpers used when provisioning the application folders.

use std::fs;
use std::io;
use std::path::Path;

/// Create a directory and all of its missing parents.
pub fn create_directory_recursively(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)?;
    tracing::debug!("Created directory {}", path.display());
    Ok(())
}

/// Whether `path` is a symbolic link (dangling links included).
pub fn is_link(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Whether the current process may write to `path`.
///
/// Uses `access(2)`, so the effective uid, group membership and ACLs are
/// taken into account the same way the kernel will when writing.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

/// Whether the current process may write to `path`.
///
/// Only the read-only attribute is available here.
#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Check if running as root.
#[cfg(test)]
pub(crate) fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
