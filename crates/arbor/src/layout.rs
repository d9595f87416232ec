//! Tree layout.
//!
//! Layout turns a parsed [`Node`] into a [`PositionedTree`]: every node gets
//! a box whose size depends only on its own label and features, a vertical
//! position determined by its depth, and a horizontal position chosen by the
//! selected [`LayoutEngine`]. After placement the tree is shifted so the
//! leftmost box starts at `x = 0`.
//!
//! Layout never fails and is a pure function of the tree and the engine.

mod engines;
mod positioned;
pub mod sizing;

pub use engines::TreeEngine;
pub use positioned::{NodeIndex, PositionedNode, PositionedTree};

use log::debug;

use arbor_core::{LayoutEngine, tree::Node};

/// Lay out `node` with the given engine.
///
/// # Example
///
/// ```
/// # use arbor::layout::layout_tree;
/// # use arbor_core::{LayoutEngine, tree::Node};
/// let tree = Node::new("DP")
///     .with_child(Node::new("D").with_child(Node::new("the")))
///     .with_child(Node::new("NP").with_child(Node::new("dog")));
///
/// let positioned = layout_tree(&tree, LayoutEngine::Basic);
/// assert_eq!(positioned.len(), 5);
/// assert!(positioned.iter().all(|(_, node)| node.bounds().min_x() >= 0.0));
/// ```
pub fn layout_tree(node: &Node, engine: LayoutEngine) -> PositionedTree {
    let positioned = engines::engine_for(engine).calculate(node);

    let size = positioned.size();
    debug!(
        engine:?,
        nodes_count = positioned.len(),
        width = size.width(),
        height = size.height();
        "Tree laid out"
    );

    positioned
}
