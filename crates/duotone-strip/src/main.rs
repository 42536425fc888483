//! Command-line front end for the dark-class stripper.
//!
//! Walks a directory (or a single file), removes written `dark:` class
//! variants in place, and prints a report of what was found. `--dry-run`
//! reports without touching anything; `--output` switches the report
//! between styled text and structured formats.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use duotone_strip::{process_tree, render_report, ReportFormat};

#[derive(Parser)]
#[command(name = "duotone-strip")]
#[command(version)]
#[command(about = "Remove dark: class variants from files under a directory")]
struct Cli {
    /// Directory (or single file) to process
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Show what would be changed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "auto")]
    output: ReportFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let report = process_tree(&cli.dir, cli.dry_run)
        .with_context(|| format!("processing {}", cli.dir.display()))?;
    println!("{}", render_report(&report, cli.output)?);
    Ok(())
}
