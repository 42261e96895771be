// src/core/modes.rs
use std::path::Path;

use crate::core::resolve::relative_display;
use crate::core::walker::{ClassifiedEntry, EntrySink, walk_tree};
use crate::models::{EnumerateOptions, ScanRequest, ScanStats};

/// Prints each qualifying entry as the walk reaches it.
struct EntryPrinter<'a> {
    root: &'a Path,
    options: EnumerateOptions,
}

impl EntrySink for EntryPrinter<'_> {
    fn on_entry(&mut self, entry: &ClassifiedEntry<'_>) {
        if !self.options.selects(entry.matched) {
            return;
        }
        if self.options.full_path {
            println!("{}", entry.path.display());
        } else {
            println!("{}", relative_display(self.root, entry.path));
        }
    }
}

/// Tallies matches and non-matches without producing any output.
#[derive(Debug, Default)]
struct MatchTally {
    stats: ScanStats,
}

impl EntrySink for MatchTally {
    fn on_entry(&mut self, entry: &ClassifiedEntry<'_>) {
        if entry.matched {
            self.stats.match_count = self.stats.match_count.saturating_add(1);
        } else {
            self.stats.non_match_count = self.stats.non_match_count.saturating_add(1);
        }
    }
}

/// Runs an enumerating scan, streaming qualifying entries to stdout.
///
/// By default the non-matching entries print; `options.show_matches`
/// inverts that. Unreadable branches are reported on stderr and do not
/// abort the scan.
pub fn run_search(request: &ScanRequest, options: EnumerateOptions) {
    let mut printer = EntryPrinter {
        root: &request.root_path,
        options,
    };
    walk_tree(request, &mut printer);
}

/// Runs an aggregating scan. The walk itself prints nothing; callers
/// render the result with [`print_summary`].
#[must_use]
pub fn run_analyze(request: &ScanRequest) -> ScanStats {
    let mut tally = MatchTally::default();
    walk_tree(request, &mut tally);
    tally.stats
}

/// Prints the analyze report for a finished scan.
pub fn print_summary(request: &ScanRequest, stats: ScanStats) {
    println!("Target: {}", request.root_path.display());
    println!(
        "Convention: {} ({})",
        request.convention.name, request.strictness
    );
    println!("Matches: {}", stats.match_count);
    println!("Non-matches: {}", stats.non_match_count);
    println!("Compliance: {:.3}%", stats.compliance_percentage());
}
