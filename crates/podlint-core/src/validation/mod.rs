//! Recursive-descent schema validation over the generic document tree
//!
//! The orchestrator walks the tree top-down, root to leaves, in
//! schema-declared field order, and accumulates every violation into an
//! ordered diagnostic list. Individual field failures never unwind the
//! descent; the only early returns are the two structurally-unrecoverable
//! cases (root is not a mapping, or a substructure has the wrong container
//! kind), and those stop only the affected subtree.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

pub mod checks;
pub mod diagnostic;
mod fields;
pub mod patterns;

pub use diagnostic::{Diagnostic, Diagnostics};

use crate::document::Node;

/// Validate a parsed manifest against the fixed pod schema.
///
/// Returns the full ordered diagnostic sequence; an empty result means the
/// document satisfies every contract. The call is a pure computation over
/// the immutable tree: no I/O, no state shared across calls, so concurrent
/// invocations need no synchronization.
///
/// # Examples
///
/// ```rust
/// use podlint_core::{parse_manifest, validate};
///
/// let root = parse_manifest("apiVersion: v1\nkind: Pod\n").unwrap();
/// let diagnostics = validate(&root);
/// assert!(diagnostics.iter().any(|d| d.message == "metadata is required"));
/// ```
pub fn validate(root: &Node) -> Diagnostics {
    fields::validate_pod(root)
}
