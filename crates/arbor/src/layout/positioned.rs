//! Positioned tree arena.
//!
//! A [`PositionedTree`] stores its nodes in a flat vector in pre-order, so
//! the root is always at index 0 and every parent comes before its children.
//! Nodes refer to each other by [`NodeIndex`]; the parent link is a plain
//! index, never an owning reference.

use std::fmt;

use arbor_core::{
    geometry::{Bounds, Point, Size},
    tree::{Feature, Node},
};

use super::sizing;

/// Index of a node within a [`PositionedTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree node annotated with its box geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    label: String,
    features: Vec<Feature>,
    id: Option<String>,
    bounds: Bounds,
    depth: usize,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl PositionedNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The node's box in diagram coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children, left to right.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_trace(&self) -> bool {
        self.label == arbor_core::tree::TRACE_MARKER
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }
}

/// A laid-out tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedTree {
    nodes: Vec<PositionedNode>,
}

impl PositionedTree {
    /// Flattens `root` into pre-order with every box sized and placed on its
    /// depth level at `x = 0`. Engines fill in the horizontal positions.
    pub(crate) fn from_node(root: &Node) -> Self {
        let mut nodes: Vec<PositionedNode> = Vec::with_capacity(root.count());
        let mut stack: Vec<(&Node, Option<NodeIndex>, usize)> = vec![(root, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            let index = NodeIndex(nodes.len());
            if let Some(parent) = parent {
                nodes[parent.0].children.push(index);
            }

            let top_left = Point::new(0.0, sizing::level_y(depth));
            nodes.push(PositionedNode {
                label: node.label().to_string(),
                features: node.features().to_vec(),
                id: node.id().map(str::to_string),
                bounds: Bounds::new_from_top_left(top_left, sizing::box_size(node)),
                depth,
                parent,
                children: Vec::with_capacity(node.children().len()),
            });

            // Reversed so the leftmost child is visited next
            for child in node.children().iter().rev() {
                stack.push((child, Some(index), depth + 1));
            }
        }

        Self { nodes }
    }

    /// Moves the box of `index` so its left edge is at `x`.
    pub(crate) fn set_x(&mut self, index: NodeIndex, x: f32) {
        let bounds = &mut self.nodes[index.0].bounds;
        *bounds = bounds.translate(Point::new(x - bounds.min_x(), 0.0));
    }

    /// Shifts every box horizontally so the leftmost one starts at `x = 0`.
    pub(crate) fn normalize(&mut self) {
        let min_x = self
            .nodes
            .iter()
            .map(|node| node.bounds.min_x())
            .fold(f32::INFINITY, f32::min);

        if min_x.is_finite() && min_x != 0.0 {
            let offset = Point::new(-min_x, 0.0);
            for node in &mut self.nodes {
                node.bounds = node.bounds.translate(offset);
            }
        }
    }

    pub fn root(&self) -> &PositionedNode {
        &self.nodes[NodeIndex::ROOT.0]
    }

    /// Returns the node at `index`, if it belongs to this tree.
    pub fn get(&self, index: NodeIndex) -> Option<&PositionedNode> {
        self.nodes.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in pre-order together with their indices.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeIndex, &PositionedNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeIndex(index), node))
    }

    /// Iterates `(parent, child)` pairs in pre-order of the child.
    pub fn edges(&self) -> impl Iterator<Item = (&PositionedNode, &PositionedNode)> {
        self.nodes
            .iter()
            .filter_map(|node| node.parent.map(|parent| (&self.nodes[parent.0], node)))
    }

    /// Diagram extent: the furthest right and bottom box edges.
    pub fn size(&self) -> Size {
        self.nodes.iter().fold(Size::default(), |size, node| {
            size.max(Size::new(node.bounds.max_x(), node.bounds.max_y()))
        })
    }
}

impl std::ops::Index<NodeIndex> for PositionedTree {
    type Output = PositionedNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.0]
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn sample() -> Node {
        Node::new("S")
            .with_child(Node::new("NP").with_child(Node::new("she")))
            .with_child(Node::new("VP").with_child(Node::new("left")))
    }

    #[test]
    fn test_from_node_is_pre_order() {
        let tree = PositionedTree::from_node(&sample());
        let labels: Vec<&str> = tree.iter().map(|(_, node)| node.label()).collect();

        assert_eq!(labels, vec!["S", "NP", "she", "VP", "left"]);
        assert_eq!(tree.root().children(), &[NodeIndex(1), NodeIndex(3)]);
        assert_eq!(tree[NodeIndex(2)].parent(), Some(NodeIndex(1)));
        assert_eq!(tree.root().parent(), None);
    }

    #[test]
    fn test_from_node_sets_depth_and_level() {
        let tree = PositionedTree::from_node(&sample());
        let she = &tree[NodeIndex(2)];

        assert_eq!(she.depth(), 2);
        assert!(approx_eq!(f32, she.bounds().min_y(), 140.0));
        assert!(approx_eq!(f32, she.bounds().height(), sizing::BOX_HEIGHT));
    }

    #[test]
    fn test_normalize_and_size() {
        let mut tree = PositionedTree::from_node(&sample());
        tree.set_x(NodeIndex(1), -30.0);
        tree.set_x(NodeIndex(3), 50.0);
        tree.normalize();

        assert!(approx_eq!(f32, tree[NodeIndex(1)].bounds().min_x(), 0.0));
        assert!(approx_eq!(f32, tree[NodeIndex(3)].bounds().min_x(), 80.0));

        let size = tree.size();
        assert!(approx_eq!(f32, size.width(), 120.0));
        assert!(approx_eq!(f32, size.height(), 170.0));
    }

    #[test]
    fn test_edges() {
        let tree = PositionedTree::from_node(&sample());
        let edges: Vec<(&str, &str)> = tree
            .edges()
            .map(|(parent, child)| (parent.label(), child.label()))
            .collect();

        assert_eq!(
            edges,
            vec![("S", "NP"), ("NP", "she"), ("S", "VP"), ("VP", "left")]
        );
    }
}
