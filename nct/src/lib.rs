// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod validate;

pub use crate::cli::{Cli, Command, run};
pub use crate::core::modes::{print_summary, run_analyze, run_search};
pub use crate::core::naming::{CONVENTIONS, CompiledPattern, Convention, Strictness, find_convention};
pub use crate::core::resolve::{canonicalize_root, relative_display};
pub use crate::core::walker::{ClassifiedEntry, EntrySink, walk_tree};
pub use crate::error::ScanError;
pub use crate::models::{EntryKind, EnumerateOptions, ScanRequest, ScanStats};
