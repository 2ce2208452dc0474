//! Writable folder checks below the application root.

use std::path::Path;

use crate::files::{create_directory_recursively, is_link, is_writable};

use super::catalog::{codes, REQUIRED_WRITABLE_DIRECTORIES};
use super::status::ValidationError;

/// Make sure every required folder exists and is writable.
///
/// Missing folders are created. The first folder that can't be created or
/// written to is reported; the rest are not looked at.
pub fn check_file_permissions(app_root: &Path) -> Option<ValidationError> {
    check_folders(app_root, is_writable)
}

fn check_folders<W>(app_root: &Path, writable: W) -> Option<ValidationError>
where
    W: Fn(&Path) -> bool,
{
    for folder in REQUIRED_WRITABLE_DIRECTORIES {
        let folder_path = app_root.join(folder);
        let display_path = folder_path.to_string_lossy().to_string();

        if !folder_path.is_dir() && !is_link(&folder_path) {
            if let Err(e) = create_directory_recursively(&folder_path) {
                tracing::debug!("Creating {} failed: {}", display_path, e);
                return Some(ValidationError::new(
                    "Unable to create folder \"%s\". Check your file permissions (did you run setfilepermissions?).",
                    codes::DIRECTORY_CREATE_FAILED,
                    vec![display_path],
                ));
            }
        }

        if !writable(&folder_path) {
            return Some(ValidationError::new(
                "The folder \"%s\" is not writable. Check your file permissions (did you run setfilepermissions?).",
                codes::DIRECTORY_NOT_WRITABLE,
                vec![display_path],
            ));
        }
    }

    None
}
