//! # comptab
//!
//! **CLI Binary**
//!
//! Entry point for the `comptab` command-line application. It orchestrates
//! the other crates: walk the tree, print the detailed table, write the
//! summary report.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Validate the scan target
//! * Dispatch to the walker, model, and formatter
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod error_hints;

use anyhow::{Result, bail};
use clap::Parser;

use comptab_config::{Cli, Config};
use comptab_git::{FixedStatus, GitStatus, StatusResolver, git_available};

/// Entry point used by the `comptab` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with(&cli)
}

/// Run a full scan for already-parsed arguments.
pub fn run_with(cli: &Cli) -> Result<()> {
    if !cli.dir.is_dir() {
        bail!("Directory '{}' not found", cli.dir.display());
    }

    let config = Config::from(cli);
    config.debug(&format!("Starting file scan in {}", cli.dir.display()));

    // Git annotation is best-effort; when git is absent every state is
    // Unmodified rather than an error. Probing once up front avoids a doomed
    // subprocess per file.
    let resolver: Box<dyn StatusResolver> = if cli.no_git || !git_available() {
        Box::new(FixedStatus::default())
    } else {
        Box::new(GitStatus)
    };

    let records = comptab_walk::walk(&cli.dir, resolver.as_ref(), &config)?;
    config.debug(&format!("Found {} files", records.len()));

    print!("{}", comptab_format::render_detailed(&records));

    let report = comptab_model::summarize(&records);
    let path = comptab_format::write_summary_report(&cli.dir, &report)?;
    println!("\nSummary table written to {}", path.display());

    Ok(())
}

/// Render an error chain (plus any hints) for the binary's stderr.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
