//! Manifest loading: raw YAML text in, generic document tree out
//!
//! Parsing goes through `marked-yaml` so every node keeps the source line
//! it came from; the marked tree is then converted into the engine's own
//! [`Node`](crate::document::Node) union. The validation engine never sees
//! the parser's types, only the converted tree.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

pub mod error;

pub use error::{LoaderError, LoaderResult};

use crate::document::{MappingNode, Node, ScalarNode, ScalarTag, SequenceNode};
use marked_yaml::types::MarkedScalarNode;
use marked_yaml::{LoaderOptions, Span};
use std::path::Path;

/// Read and parse a manifest file. Only `.yaml` / `.yml` files are
/// accepted.
pub fn load_manifest(path: &Path) -> LoaderResult<Node> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"))
        .unwrap_or(false);
    if !supported {
        return Err(LoaderError::unsupported_format(path.to_path_buf()));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| LoaderError::io(path.to_path_buf(), e))?;
    parse_named(&content, path)
}

/// Parse manifest content that did not come from a file.
pub fn parse_manifest(content: &str) -> LoaderResult<Node> {
    parse_named(content, Path::new("<content>"))
}

fn parse_named(content: &str, path: &Path) -> LoaderResult<Node> {
    if content.trim().is_empty() {
        return Err(LoaderError::empty(path.to_path_buf()));
    }

    // Coercion prevention must be on, otherwise quoted scalars coerce to
    // integers too and the cpu literal check cannot tell them apart.
    let options = LoaderOptions::default().prevent_coercion(true);
    let root = marked_yaml::parse_yaml_with_options(0, content, options)
        .map_err(|e| LoaderError::parse(path.to_path_buf(), e))?;
    Ok(convert(&root))
}

fn convert(node: &marked_yaml::Node) -> Node {
    match node {
        marked_yaml::Node::Scalar(scalar) => Node::Scalar(convert_scalar(scalar)),
        marked_yaml::Node::Mapping(mapping) => Node::Mapping(MappingNode {
            entries: mapping
                .iter()
                .map(|(key, value)| (convert_scalar(key), convert(value)))
                .collect(),
            line: start_line(mapping.span()),
        }),
        marked_yaml::Node::Sequence(sequence) => Node::Sequence(SequenceNode {
            items: sequence.iter().map(convert).collect(),
            line: start_line(sequence.span()),
        }),
    }
}

fn convert_scalar(scalar: &MarkedScalarNode) -> ScalarNode {
    // With coercion prevention enabled at parse time, `as_i64` only
    // succeeds for plain (unquoted) integer literals, which is exactly
    // the literal-vs-string distinction the cpu check needs.
    let tag = if scalar.as_i64().is_some() {
        ScalarTag::Int
    } else {
        ScalarTag::Str
    };
    let value: &str = scalar;
    ScalarNode {
        value: value.to_string(),
        tag,
        line: start_line(scalar.span()),
    }
}

fn start_line(span: &Span) -> usize {
    span.start().map(|marker| marker.line()).unwrap_or(0)
}
