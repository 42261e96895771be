// tests/integration_tests/common.rs
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;
use nct::{
    ClassifiedEntry, EntryKind, EntrySink, ScanRequest, Strictness, canonicalize_root,
    find_convention,
};

/// Creates an empty file under `dir`, with parents as needed.
pub fn create_entry(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)?;
    Ok(())
}

/// Builds a request the way the CLI does: the root is canonical before
/// the walk starts.
pub fn scan_request(
    root: &Path,
    convention: &str,
    strictness: Strictness,
    recursive: bool,
) -> Result<ScanRequest> {
    let convention = find_convention(convention)?;
    let pattern = convention.pattern(strictness)?;
    Ok(ScanRequest {
        root_path: canonicalize_root(root)?,
        pattern,
        convention,
        strictness,
        recursive,
    })
}

/// Collects every counted entry of a walk for assertions.
#[derive(Debug, Default)]
pub struct Collector {
    pub entries: Vec<(PathBuf, EntryKind, bool)>,
}

impl EntrySink for Collector {
    fn on_entry(&mut self, entry: &ClassifiedEntry<'_>) {
        self.entries
            .push((entry.path.to_path_buf(), entry.kind, entry.matched));
    }
}

/// Runs the compiled binary with `args`, capturing status and output.
pub fn run_tool(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_nct")).args(args).output()?;
    Ok(output)
}

/// The captured stdout, split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}
