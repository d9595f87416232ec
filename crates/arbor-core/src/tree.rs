//! Parsed syntax tree model.
//!
//! A [`Node`] is what the bracket notation parser produces: a label, an
//! ordered list of signed [`Feature`]s, an optional movement identifier and
//! an ordered list of owned children. Nodes are plain values; once built they
//! are only read.
//!
//! # Example
//!
//! ```
//! # use arbor_core::tree::{Feature, Node, Sign};
//! // [CP[+WH] [DP#wh who] [C t#wh]]
//! let tree = Node::new("CP")
//!     .with_feature(Feature::new(Sign::Plus, "WH"))
//!     .with_child(Node::new("DP").with_id("wh").with_child(Node::new("who")))
//!     .with_child(Node::new("C").with_child(Node::new("t").with_id("wh")));
//!
//! assert_eq!(tree.children().len(), 2);
//! assert!(tree.children()[1].children()[0].is_trace());
//! ```

use std::fmt;

/// Label reserved for trace nodes.
pub const TRACE_MARKER: &str = "t";

/// Polarity of a [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Maps a leading `+`/`-` character to a sign.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A signed, named annotation on a node such as `+WH`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feature {
    sign: Sign,
    name: String,
}

impl Feature {
    pub fn new(sign: Sign, name: impl Into<String>) -> Self {
        Self {
            sign,
            name: name.into(),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of characters in the rendered badge text (sign included).
    pub fn text_len(&self) -> usize {
        1 + self.name.chars().count()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.name)
    }
}

/// A node of a parsed syntax tree.
///
/// Children are owned and kept in left-to-right surface order. Features keep
/// insertion order; duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: String,
    features: Vec<Feature>,
    id: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a childless node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            features: Vec::new(),
            id: None,
            children: Vec::new(),
        }
    }

    /// Sets the movement identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a feature.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Appends a child to the right of the existing children.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if the label is exactly [`TRACE_MARKER`].
    pub fn is_trace(&self) -> bool {
        self.label == TRACE_MARKER
    }

    /// Combined character count of all feature badge texts.
    pub fn feature_text_len(&self) -> usize {
        self.features.iter().map(Feature::text_len).sum()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_display() {
        assert_eq!(Feature::new(Sign::Plus, "WH").to_string(), "+WH");
        assert_eq!(Feature::new(Sign::Minus, "Q").to_string(), "-Q");
        assert_eq!(Feature::new(Sign::Minus, "Q").text_len(), 2);
    }

    #[test]
    fn test_sign_from_char() {
        assert_eq!(Sign::from_char('+'), Some(Sign::Plus));
        assert_eq!(Sign::from_char('-'), Some(Sign::Minus));
        assert_eq!(Sign::from_char('x'), None);
    }

    #[test]
    fn test_node_builders_preserve_order() {
        let node = Node::new("VP")
            .with_feature(Feature::new(Sign::Plus, "F"))
            .with_feature(Feature::new(Sign::Plus, "F"))
            .with_child(Node::new("V"))
            .with_child(Node::new("DP"));

        assert_eq!(node.features().len(), 2);
        assert_eq!(node.children()[0].label(), "V");
        assert_eq!(node.children()[1].label(), "DP");
        assert_eq!(node.feature_text_len(), 4);
    }

    #[test]
    fn test_node_trace_detection() {
        assert!(Node::new("t").with_id("i").is_trace());
        assert!(!Node::new("T").is_trace());
        assert!(!Node::new("tt").is_trace());
    }

    #[test]
    fn test_node_depth_and_count() {
        let tree = Node::new("S")
            .with_child(Node::new("NP").with_child(Node::new("she")))
            .with_child(Node::new("VP"));

        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.count(), 4);
        assert!(tree.children()[1].is_leaf());
    }
}
