// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or running a scan.
///
/// Pre-scan failures (an unknown convention, a bad pattern, a missing or
/// non-directory target) are fatal: one `Error: ...` line and a non-zero
/// exit. The I/O kinds also describe unreadable branches inside a walk,
/// where the walker prints them to stderr and keeps going.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{name} is not a valid naming convention")]
    UnknownConvention { name: String },

    #[error("invalid naming pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{path} does not exist")]
    TargetNotFound { path: PathBuf },

    #[error("{path} is not a directory")]
    TargetNotADirectory { path: PathBuf },

    #[error("cannot access {path}: {source}")]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Wraps an I/O error with path context, picking the specific kind
    /// where the `ErrorKind` identifies one.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::TargetNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}
