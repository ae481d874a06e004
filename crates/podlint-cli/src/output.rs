//! Output formatting and writing utilities
//!
//! The reporter prefixes each diagnostic with the manifest's file name and,
//! when known, the source line; the core itself knows nothing about files
//! or output streams.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use podlint_core::{Diagnostic, Diagnostics};
use std::io::{self, Write};
use tracing::debug;

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only, suppressed when quiet)
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only, suppressed when quiet)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Report the collected diagnostics.
    ///
    /// Human format writes one line per diagnostic; JSON formats serialize
    /// the whole collection, including the empty one.
    pub fn report(&mut self, file: &str, diagnostics: &Diagnostics) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let rendered = serde_json::to_string(diagnostics)?;
                self.writeln(&rendered)
            }
            OutputFormat::JsonPretty => {
                let rendered = serde_json::to_string_pretty(diagnostics)?;
                self.writeln(&rendered)
            }
            OutputFormat::Human => {
                for diagnostic in diagnostics {
                    let line = format_human_line(file, diagnostic);
                    if self.use_color {
                        self.writeln(&line.red().to_string())?;
                    } else {
                        self.writeln(&line)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Classic reporter format: `file:LINE message` when the line is known,
/// `file: message` otherwise.
pub(crate) fn format_human_line(file: &str, diagnostic: &Diagnostic) -> String {
    if diagnostic.line > 0 {
        format!("{}:{} {}", file, diagnostic.line, diagnostic.message)
    } else {
        format!("{}: {}", file, diagnostic.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_line_includes_line_number_when_known() {
        let with_line = Diagnostic::invalid_format("image", "myimage", 9);
        assert_eq!(
            format_human_line("manifest.yaml", &with_line),
            "manifest.yaml:9 image has invalid format 'myimage'"
        );
    }

    #[test]
    fn human_line_omits_zero_lines() {
        let without = Diagnostic::required("metadata");
        assert_eq!(
            format_human_line("manifest.yaml", &without),
            "manifest.yaml: metadata is required"
        );
    }

    #[test]
    fn json_report_serializes_empty_collections() {
        let mut sink = OutputWriter::with_writer(
            OutputFormat::Json,
            false,
            false,
            Box::new(io::sink()),
        );
        assert!(sink.report("manifest.yaml", &Diagnostics::new()).is_ok());
    }
}
