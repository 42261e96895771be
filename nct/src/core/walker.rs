// src/core/walker.rs
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::models::{EntryKind, ScanRequest};

/// One counted entry, handed to the sink at the moment it is visited.
#[derive(Debug)]
pub struct ClassifiedEntry<'a> {
    pub path: &'a Path,
    pub kind: EntryKind,
    pub matched: bool,
}

/// Receives every counted entry of a walk, in traversal order.
///
/// Both modes are sinks over the same walk: enumeration prints as entries
/// arrive, analysis tallies them.
pub trait EntrySink {
    fn on_entry(&mut self, entry: &ClassifiedEntry<'_>);
}

/// Walks the request's root and feeds classified entries to the sink.
///
/// The walk is depth-first and pre-order in readdir order: a directory's
/// own name is classified as an entry first, then (for recursive scans)
/// its contents are visited. The root itself is not an entry. Entries that
/// are neither directories nor regular files are skipped without being
/// counted. A branch that cannot be read is reported on stderr and pruned;
/// the rest of the walk continues, so a completed scan never fails.
pub fn walk_tree(request: &ScanRequest, sink: &mut dyn EntrySink) {
    let mut walker = WalkDir::new(&request.root_path).min_depth(1);
    if !request.recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report_access_error(err);
                continue;
            }
        };

        let kind = EntryKind::from(entry.file_type());
        if kind == EntryKind::Other {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let classified = ClassifiedEntry {
            path: entry.path(),
            kind,
            matched: request.pattern.matches(&name),
        };
        sink.on_entry(&classified);
    }
}

fn report_access_error(err: walkdir::Error) {
    let path = err.path().map(Path::to_path_buf);
    // Loop-detection errors carry no io::Error; those fall back to
    // walkdir's own message.
    let fallback = err.to_string();
    match (path, err.into_io_error()) {
        (Some(path), Some(source)) => eprintln!("Error: {}", ScanError::io(path, source)),
        _ => eprintln!("Error: {fallback}"),
    }
}
