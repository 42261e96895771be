// src/cli.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::modes::{print_summary, run_analyze, run_search};
use crate::core::naming::{Strictness, find_convention};
use crate::core::resolve::canonicalize_root;
use crate::models::{EnumerateOptions, ScanRequest};
use crate::validate;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List entries whose names violate (or with -m, satisfy) a convention
    Search {
        /// Naming convention to audit against (camelcase, snakecase, kebabcase)
        convention: String,

        /// Directory to scan
        directory: PathBuf,

        /// Print absolute paths instead of paths relative to the scan root
        #[arg(short = 'f', long)]
        full_path: bool,

        /// Print matching entries instead of non-matching ones
        #[arg(short = 'm', long)]
        matches: bool,

        /// Apply the strict variant of the convention
        #[arg(short = 's', long)]
        strict: bool,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,
    },

    /// Report how much of a tree complies with a convention
    Analyze {
        /// Naming convention to audit against (camelcase, snakecase, kebabcase)
        convention: String,

        /// Directory to scan
        directory: PathBuf,

        /// Apply the strict variant of the convention
        #[arg(short = 's', long)]
        strict: bool,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,
    },
}

/// Dispatches a parsed command line to its mode entry point.
///
/// # Errors
///
/// Returns an error for the fatal pre-scan failures: unknown convention,
/// missing target, or a target that is not a directory. A failed branch
/// inside an otherwise valid scan is not an error here.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search {
            convention,
            directory,
            full_path,
            matches,
            strict,
            recursive,
        } => {
            let request = build_request(&convention, &directory, strict, recursive)?;
            let options = EnumerateOptions {
                full_path,
                show_matches: matches,
            };
            run_search(&request, options);
            Ok(())
        }
        Command::Analyze {
            convention,
            directory,
            strict,
            recursive,
        } => {
            let request = build_request(&convention, &directory, strict, recursive)?;
            let stats = run_analyze(&request);
            print_summary(&request, stats);
            Ok(())
        }
    }
}

/// Builds the immutable scan context, failing fast in a fixed order:
/// convention lookup, target validation, canonicalization, compilation.
fn build_request(
    convention: &str,
    directory: &Path,
    strict: bool,
    recursive: bool,
) -> Result<ScanRequest> {
    let strictness = if strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let convention = find_convention(convention)?;
    validate::target_directory(directory)?;
    let root_path = canonicalize_root(directory)?;
    let pattern = convention.pattern(strictness)?;
    Ok(ScanRequest {
        root_path,
        pattern,
        convention,
        strictness,
        recursive,
    })
}
