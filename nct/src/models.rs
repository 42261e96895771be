// src/models.rs
use std::fs::FileType;
use std::path::PathBuf;

use crate::core::naming::{CompiledPattern, Convention, Strictness};

/// Everything a scan needs, fixed before traversal begins.
///
/// `root_path` is already canonical and absolute; walkers and reporters
/// treat the whole struct as immutable context.
#[derive(Debug)]
pub struct ScanRequest {
    pub root_path: PathBuf,
    pub pattern: CompiledPattern,
    pub convention: &'static Convention,
    pub strictness: Strictness,
    pub recursive: bool,
}

/// Output controls that only apply to enumeration.
///
/// The default (`show_matches = false`) prints the entries that violate
/// the convention; that inversion is the point of the audit.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumerateOptions {
    pub full_path: bool,
    pub show_matches: bool,
}

impl EnumerateOptions {
    /// Whether an entry with the given match status gets printed. The
    /// default selects non-matching entries; `show_matches` inverts that.
    #[must_use]
    pub const fn selects(&self, matched: bool) -> bool {
        matched == self.show_matches
    }
}

/// Classification of a directory entry by file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    RegularFile,
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::RegularFile
        } else {
            Self::Other
        }
    }
}

/// Aggregate result of an analyze scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub match_count: u64,
    pub non_match_count: u64,
}

impl ScanStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            match_count: 0,
            non_match_count: 0,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.match_count.saturating_add(self.non_match_count)
    }

    #[must_use]
    pub fn compliance_percentage(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.match_count as f64 / self.total() as f64) * 100.0
    }
}
