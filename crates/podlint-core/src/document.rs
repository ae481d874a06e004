//! Generic document tree consumed by the validation engine
//!
//! The parser hands the engine a closed tagged union of scalar, mapping,
//! and sequence nodes, each carrying the source line it came from. Nodes
//! are immutable views into the parsed input; validators only ever read
//! them. Deliberately there is no path-based or recursive querying here:
//! [`Node::lookup`] is the sole traversal primitive, which keeps every
//! field validator's contract local and auditable.
//!
//! Copyright (c) 2025 Podlint Team
//! Licensed under the Apache-2.0 license

/// Scalar type tag reported by the parser.
///
/// Only one distinction matters to the engine: whether a scalar was an
/// unquoted integer literal or a (possibly quoted) string. The `cpu`
/// resource check is the sole consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    /// Plain string scalar, including quoted numbers
    Str,
    /// Unquoted integer literal
    Int,
}

/// A scalar node: raw text value, type tag, and source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarNode {
    /// Raw textual value as written in the document
    pub value: String,
    /// Type tag, see [`ScalarTag`]
    pub tag: ScalarTag,
    /// 1-based source line, 0 if unknown
    pub line: usize,
}

impl ScalarNode {
    /// Create a scalar node
    pub fn new<V: Into<String>>(value: V, tag: ScalarTag, line: usize) -> Self {
        Self {
            value: value.into(),
            tag,
            line,
        }
    }
}

/// A mapping node: ordered key/value entries with scalar keys
///
/// Duplicate keys are tolerated; lookup takes the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingNode {
    /// Entries in document order
    pub entries: Vec<(ScalarNode, Node)>,
    /// 1-based source line, 0 if unknown
    pub line: usize,
}

/// A sequence node: ordered list of child nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceNode {
    /// Items in document order
    pub items: Vec<Node>,
    /// 1-based source line, 0 if unknown
    pub line: usize,
}

/// A parsed fragment of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Textual value
    Scalar(ScalarNode),
    /// Ordered key/value pairs
    Mapping(MappingNode),
    /// Ordered list
    Sequence(SequenceNode),
}

impl Node {
    /// Source line this node starts on (0 = unknown)
    pub fn line(&self) -> usize {
        match self {
            Node::Scalar(s) => s.line,
            Node::Mapping(m) => m.line,
            Node::Sequence(s) => s.line,
        }
    }

    /// View this node as a scalar, if it is one
    pub fn as_scalar(&self) -> Option<&ScalarNode> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// View this node as a mapping, if it is one
    pub fn as_mapping(&self) -> Option<&MappingNode> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// View this node as a sequence, if it is one
    pub fn as_sequence(&self) -> Option<&SequenceNode> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a mapping entry by key.
    ///
    /// Returns `None` when this node is not a mapping or no entry's key
    /// equals `key` by exact string comparison. First match wins, so
    /// duplicate keys resolve to the earliest occurrence. No side effects.
    pub fn lookup(&self, key: &str) -> Option<&Node> {
        let mapping = self.as_mapping()?;
        mapping
            .entries
            .iter()
            .find(|(k, _)| k.value == key)
            .map(|(_, v)| v)
    }
}
