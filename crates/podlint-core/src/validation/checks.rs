//! Leaf validators: stateless primitive checks for type, format, value
//! set, and numeric range
//!
//! These are pure functions: a value plus its constraint in, a diagnostic
//! or nothing out. Field validators compose them; nothing here recurses.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

use crate::document::{MappingNode, Node, ScalarNode, SequenceNode};
use crate::validation::diagnostic::Diagnostic;
use regex::Regex;

/// Require a scalar node; `expected` names the type in the diagnostic
/// (e.g. "string" or "int").
pub fn expect_scalar<'a>(
    node: &'a Node,
    field: &str,
    expected: &str,
) -> Result<&'a ScalarNode, Diagnostic> {
    node.as_scalar()
        .ok_or_else(|| Diagnostic::type_mismatch(field, expected, node.line()))
}

/// Require a mapping node.
pub fn expect_mapping<'a>(node: &'a Node, field: &str) -> Result<&'a MappingNode, Diagnostic> {
    node.as_mapping()
        .ok_or_else(|| Diagnostic::type_mismatch(field, "object", node.line()))
}

/// Require a sequence node.
pub fn expect_sequence<'a>(node: &'a Node, field: &str) -> Result<&'a SequenceNode, Diagnostic> {
    node.as_sequence()
        .ok_or_else(|| Diagnostic::type_mismatch(field, "array", node.line()))
}

/// Check a scalar against a format pattern. The offending value is quoted
/// in the diagnostic.
pub fn match_pattern(scalar: &ScalarNode, field: &str, pattern: &Regex) -> Option<Diagnostic> {
    if pattern.is_match(&scalar.value) {
        None
    } else {
        Some(Diagnostic::invalid_format(field, &scalar.value, scalar.line))
    }
}

/// Check a scalar against an allowed value set.
pub fn match_set(scalar: &ScalarNode, field: &str, allowed: &[&str]) -> Option<Diagnostic> {
    if allowed.contains(&scalar.value.as_str()) {
        None
    } else {
        Some(Diagnostic::unsupported(field, &scalar.value, scalar.line))
    }
}

/// Check that a scalar holds an integer within `lo..=hi`.
///
/// A value that does not parse as an integer is a type mismatch; a value
/// outside the bounds is out-of-range. Range diagnostics never echo the
/// value.
pub fn check_int_in_range(scalar: &ScalarNode, field: &str, lo: i64, hi: i64) -> Option<Diagnostic> {
    match scalar.value.parse::<i64>() {
        Err(_) => Some(Diagnostic::type_mismatch(field, "int", scalar.line)),
        Ok(v) if v < lo || v > hi => Some(Diagnostic::out_of_range(field, scalar.line)),
        Ok(_) => None,
    }
}
