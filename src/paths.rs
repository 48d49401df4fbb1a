//! Dataset directory resolution
//!
//! The CLI accepts a directory argument that may be relative; these helpers
//! resolve it against the working directory and check it before loading.

use std::path::{Path, PathBuf};

use crate::{DegreesError, Result};

/// Dataset directory used when none is given
pub const DEFAULT_DATA_DIR: &str = "large";

/// Resolve the dataset directory, defaulting to [`DEFAULT_DATA_DIR`].
pub fn resolve_data_dir(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR));
    resolve_path_or_cwd(path)
}

/// Resolve a path, treating relative paths as relative to CWD.
///
/// - Absolute paths are returned as-is
/// - Relative paths are joined with the current working directory
pub fn resolve_path_or_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|e| DegreesError::DataSource {
            path: path.display().to_string(),
            message: format!("cannot read current directory: {}", e),
        })?;
        Ok(cwd.join(path))
    }
}

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<&Path> {
    if !path.exists() {
        return Err(DegreesError::DataSource {
            path: path.display().to_string(),
            message: "directory does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(DegreesError::DataSource {
            path: path.display().to_string(),
            message: "not a directory".to_string(),
        });
    }
    Ok(path)
}
