//! Podlint CLI - validate one pod resource manifest against the fixed
//! schema
//!
//! This is the thin I/O layer around the core engine: argument parsing,
//! file reading, diagnostic reporting, and exit-code mapping. All of the
//! actual validation lives in `podlint-core`.

mod cli;
mod error;
mod logging;
mod output;

use cli::{Cli, OutputFormat};
use colored::control;
use error::{Error, Result};
use output::OutputWriter;
use podlint_core::{load_manifest, validate};
use std::process;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());
    logging::init_logging(cli.verbosity_level(), cli.quiet);

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            if !e.is_reported() {
                eprintln!(
                    "{}",
                    error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
                );
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    if !cli.manifest.exists() {
        return Err(Error::FileNotFound { path: cli.manifest });
    }

    info!(file = %cli.manifest.display(), "validating manifest");
    output.info(&format!("Validating manifest: {}", cli.manifest.display()))?;

    let root = load_manifest(&cli.manifest)?;
    let diagnostics = validate(&root);
    debug!(count = diagnostics.len(), "validation finished");

    let file = cli
        .manifest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("<manifest>");

    if diagnostics.is_empty() {
        match cli.output {
            OutputFormat::Human => output.success(&format!("{}: manifest is valid", file))?,
            _ => output.report(file, &diagnostics)?,
        }
        return Ok(());
    }

    output.report(file, &diagnostics)?;
    Err(Error::ValidationFailed {
        count: diagnostics.len(),
    })
}
