// src/main.rs
use anyhow::Result;
use clap::Parser;

use nct::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
