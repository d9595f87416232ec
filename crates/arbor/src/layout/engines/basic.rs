//! Basic tree layout engine
//!
//! Two passes over the pre-order arena:
//!
//! 1. **Sizing** (children before parents): a subtree's extent is the larger
//!    of its own box width and the span of its children's extents plus one
//!    gap between each adjacent pair.
//! 2. **Placement** (parents before children): each subtree is given a left
//!    edge; the box is centered within the subtree's extent and the children
//!    are packed left to right, their span centered under the parent.
//!
//! Subtree extents nest, so sibling subtrees never overlap at any depth.

use log::trace;

use arbor_core::tree::Node;

use crate::layout::{NodeIndex, PositionedTree, engines::TreeEngine, sizing};

/// Basic layout engine implementation that implements the TreeEngine trait
pub struct Engine {
    gap: f32,
}

impl Engine {
    /// Create a new basic layout engine
    pub fn new() -> Self {
        Self {
            gap: sizing::H_GAP,
        }
    }

    /// Width taken by `children`, including the gaps between them.
    fn children_span(&self, children: &[NodeIndex], extents: &[f32]) -> f32 {
        if children.is_empty() {
            return 0.0;
        }

        let widths: f32 = children.iter().map(|child| extents[child.index()]).sum();
        self.gap.mul_add((children.len() - 1) as f32, widths)
    }

    /// Subtree extent of every node, indexed like the arena.
    fn subtree_extents(&self, tree: &PositionedTree) -> Vec<f32> {
        let mut extents = vec![0.0; tree.len()];
        for (index, node) in tree.iter().rev() {
            let i = index.index();
            extents[i] = node.width().max(self.children_span(node.children(), &extents));
        }
        extents
    }

    fn place(&self, tree: &mut PositionedTree, extents: &[f32]) {
        let mut lefts = vec![0.0; tree.len()];
        let mut box_xs = Vec::with_capacity(tree.len());

        for (index, node) in tree.iter() {
            let i = index.index();
            let extent = extents[i];
            box_xs.push((index, lefts[i] + (extent - node.width()) / 2.0));

            let span = self.children_span(node.children(), extents);
            let mut cursor = lefts[i] + (extent - span) / 2.0;
            for child in node.children() {
                lefts[child.index()] = cursor;
                cursor += extents[child.index()] + self.gap;
            }
        }

        for (index, x) in box_xs {
            tree.set_x(index, x);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEngine for Engine {
    fn calculate(&self, tree: &Node) -> PositionedTree {
        let mut positioned = PositionedTree::from_node(tree);

        let extents = self.subtree_extents(&positioned);
        trace!(root_extent = extents.first().copied().unwrap_or_default(); "Subtree extents computed");

        self.place(&mut positioned, &extents);
        positioned.normalize();
        positioned
    }
}
