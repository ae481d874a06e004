//! Diagnostic type and the ordered collector validators append to
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// One validation failure.
///
/// `line` is the 1-based source line the failure was observed on; 0 means
/// "no specific line" and is used for document-level errors and for missing
/// required fields (the field does not exist to report a position from).
/// `message` is fully rendered text with the field name and offending value
/// already interpolated. There are no severity levels; every diagnostic is
/// a hard error. Diagnostics are never mutated or deduplicated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source line, 0 = unknown
    pub line: usize,
    /// Fully rendered message
    pub message: String,
}

impl Diagnostic {
    /// Required field is absent. Carries no line.
    pub fn required(field: &str) -> Self {
        Self::required_at(field, 0)
    }

    /// Required field is present but empty; attached to the value's line.
    pub fn required_at(field: &str, line: usize) -> Self {
        Self {
            line,
            message: format!("{} is required", field),
        }
    }

    /// Field is present but has the wrong shape or kind.
    pub fn type_mismatch(field: &str, expected: &str, line: usize) -> Self {
        Self {
            line,
            message: format!("{} must be {}", field, expected),
        }
    }

    /// Field fails a pattern or well-formedness check. Also reused for
    /// container name uniqueness violations.
    pub fn invalid_format(field: &str, value: &str, line: usize) -> Self {
        Self {
            line,
            message: format!("{} has invalid format '{}'", field, value),
        }
    }

    /// Field value is well-formed but not in the allowed value set.
    pub fn unsupported(field: &str, value: &str, line: usize) -> Self {
        Self {
            line,
            message: format!("{} has unsupported value '{}'", field, value),
        }
    }

    /// Numeric field is outside its valid bound. Range errors never echo
    /// the offending value.
    pub fn out_of_range(field: &str, line: usize) -> Self {
        Self {
            line,
            message: format!("{} value out of range", field),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: {}", self.line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Ordered, append-only collection of diagnostics.
///
/// Concatenation preserves the order children were visited, so the final
/// sequence follows schema-declared field order. This ordering is an
/// observable contract that tests may assert against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Collected diagnostics in visit order
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append everything from another collection, preserving its order
    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Check whether any diagnostics were collected
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of collected diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Iterate over the collected diagnostics in order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Convert to a result: `Ok` when empty, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
