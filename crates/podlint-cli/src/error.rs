//! Error types and handling for the CLI
//!
//! Validation diagnostics are data, not errors; this module only covers
//! the failure modes around them (reading, parsing, reporting) plus the
//! final exit-code mapping.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading or parsing the manifest failed before validation started
    #[error(transparent)]
    Loader(#[from] podlint_core::LoaderError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest parsed but failed schema validation
    #[error("manifest failed validation with {count} diagnostic(s)")]
    ValidationFailed { count: usize },
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 1,
            Self::Io(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Loader(_) => 4,
            Self::Json(_) => 5,
        }
    }

    /// Diagnostics are reported by the output writer, so this error
    /// carries no message of its own worth printing.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
