//! Build directory handling.

use std::path::Path;

use crate::RunError;

/// Attempt to create the per-trial build directory.
///
/// Idempotent: an already-existing directory is left untouched and is
/// not an error, matching the original scripts' existence check
/// before `makedirs`.
///
/// # Errors
/// Errors if the directory is absent and cannot be created.
pub fn create_build_dir(path: &Path) -> Result<(), RunError> {
    std::fs::create_dir_all(path).map_err(|source| RunError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
