// src/validate.rs
use std::path::Path;

use crate::error::ScanError;

/// Confirms the scan target exists and is a directory.
///
/// Both subcommands run this single check before canonicalizing, so a bad
/// target always fails the same way regardless of mode.
///
/// # Errors
///
/// Returns `ScanError::TargetNotFound` when nothing exists at `path`, or
/// `ScanError::TargetNotADirectory` when something does but it is not a
/// directory.
pub fn target_directory(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        return Err(ScanError::TargetNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ScanError::TargetNotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
