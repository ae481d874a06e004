//! Command-line argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Podlint - schema validation for pod resource manifests
///
/// Checks a single manifest against the fixed pod schema and reports every
/// violation with its source line. A clean manifest produces no output and
/// exit code 0.
#[derive(Parser, Debug)]
#[command(
    name = "podlint",
    version,
    author,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the manifest file (YAML)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for diagnostics
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `file:line message` output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["podlint", "-vv", "manifest.yaml"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["podlint", "--quiet", "manifest.yaml"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_output_format_parsing() {
        let cli = Cli::parse_from(["podlint", "--output", "json", "manifest.yaml"]);
        assert_eq!(cli.output, OutputFormat::Json);

        let cli = Cli::parse_from(["podlint", "manifest.yaml"]);
        assert_eq!(cli.output, OutputFormat::Human);
    }
}
