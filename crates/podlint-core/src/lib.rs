//! Podlint core - schema validation engine for pod resource manifests
//!
//! The engine walks a parsed manifest tree top-down and checks it against
//! a fixed, hand-coded schema, accumulating every violation instead of
//! stopping at the first. It is split into three collaborating pieces:
//!
//! - [`document`]: the generic node tree the engine consumes (scalar /
//!   mapping / sequence, each with a source line)
//! - [`loader`]: turns raw YAML text into that tree, preserving line numbers
//! - [`validation`]: the recursive-descent validators and the diagnostic
//!   collector they feed
//!
//! Validation is a pure computation over an immutable tree: no I/O, no
//! shared mutable state, and independent calls are safe to run in parallel.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod loader;
pub mod validation;

pub use document::{MappingNode, Node, ScalarNode, ScalarTag, SequenceNode};
pub use loader::{load_manifest, parse_manifest, LoaderError, LoaderResult};
pub use validation::{validate, Diagnostic, Diagnostics};
