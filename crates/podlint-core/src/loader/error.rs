//! Error types for manifest loading operations
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised before validation ever starts: reading and parsing
/// failures are earlier-stage problems and never become diagnostics.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("cannot read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("{path}: cannot parse yaml: {source}")]
    Parse {
        path: PathBuf,
        source: marked_yaml::LoadError,
    },

    /// Blank input
    #[error("{path}: empty yaml document")]
    Empty { path: PathBuf },

    /// Unsupported file format
    #[error("unsupported file format for '{path}'. Expected .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a YAML parsing error with path context
    pub fn parse(path: PathBuf, source: marked_yaml::LoadError) -> Self {
        Self::Parse { path, source }
    }

    /// Create an empty-document error
    pub fn empty(path: PathBuf) -> Self {
        Self::Empty { path }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } => path,
            Self::Parse { path, .. } => path,
            Self::Empty { path } => path,
            Self::UnsupportedFormat { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_their_path() {
        let path = PathBuf::from("manifest.yaml");

        let io = LoaderError::io(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(io, LoaderError::Io { .. }));
        assert_eq!(io.path(), &path);

        let empty = LoaderError::empty(path.clone());
        assert_eq!(empty.to_string(), "manifest.yaml: empty yaml document");

        let format = LoaderError::unsupported_format(PathBuf::from("manifest.toml"));
        assert!(format.to_string().contains("manifest.toml"));
    }
}
