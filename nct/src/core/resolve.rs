// src/core/resolve.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Resolves the scan target to an absolute canonical path.
///
/// Runs once before the walk; the result becomes the immutable root of the
/// scan and the base every relative display is computed against.
///
/// # Errors
///
/// Returns `ScanError::TargetNotFound` when the path does not exist, or
/// another `ScanError` kind for other I/O failures.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ScanError> {
    fs::canonicalize(path).map_err(|source| ScanError::io(path, source))
}

/// Returns the suffix of `current` beyond the leading prefix it shares
/// with `root`, with at most one leading separator removed.
///
/// This is a pure string computation: for entries yielded by a walk rooted
/// at `root`, it produces the root-relative path. Identical inputs produce
/// the empty string.
#[must_use]
pub fn relative_display(root: &Path, current: &Path) -> String {
    let root = root.to_string_lossy();
    let current = current.to_string_lossy();
    let shared = root
        .chars()
        .zip(current.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix: String = current.chars().skip(shared).collect();
    match suffix.strip_prefix('/') {
        Some(stripped) => stripped.to_owned(),
        None => suffix,
    }
}
