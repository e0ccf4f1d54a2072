//! # comptab-config
//!
//! **Tier 4 (Configuration)**
//!
//! CLI argument definitions and the run configuration threaded through the
//! scan. Currently it couples the Clap parsing structs with the plain
//! `Config` value; nothing else imports Clap.
//!
//! ## What belongs here
//! * Clap `Parser` structs
//! * The `Config` value passed down the call tree
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O beyond stderr diagnostics

use std::path::PathBuf;

use clap::Parser;
use time::macros::format_description;

/// `comptab` — scan a Salesforce source tree and emit component tables.
///
/// Prints a detailed per-file Markdown table to stdout and writes a
/// type-by-module summary table next to the scanned tree.
#[derive(Parser, Debug)]
#[command(name = "comptab", version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Diagnostic output to stderr (timestamps, per-directory progress).
    #[arg(long)]
    pub verbose: bool,

    /// Skip the per-file git status lookup; all change states render empty.
    #[arg(long)]
    pub no_git: bool,
}

/// Run configuration threaded through the scan instead of process-wide
/// state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub verbose: bool,
}

impl Config {
    /// Print a timestamped diagnostic line to stderr when verbose.
    ///
    /// Diagnostics are independent of normal output: the detailed table on
    /// stdout stays machine-consumable with `--verbose` on.
    pub fn debug(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        let fmt = format_description!("[hour]:[minute]:[second].[subsecond digits:6]");
        let timestamp = time::OffsetDateTime::now_utc()
            .time()
            .format(&fmt)
            .unwrap_or_default();
        eprintln!("[DEBUG {timestamp}] {msg}");
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["comptab", "--verbose", "--no-git", "src"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_git);
        assert_eq!(cli.dir, PathBuf::from("src"));
    }

    #[test]
    fn cli_requires_directory_argument() {
        assert!(Cli::try_parse_from(["comptab"]).is_err());
    }

    #[test]
    fn config_from_cli_carries_verbose() {
        let cli = Cli::try_parse_from(["comptab", "--verbose", "src"]).unwrap();
        let config = Config::from(&cli);
        assert!(config.verbose);
    }

    #[test]
    fn quiet_config_debug_is_silent() {
        // Mostly asserts it doesn't panic; stderr capture is not worth a dep.
        Config::default().debug("ignored");
    }
}
