//! Contour tree layout engine
//!
//! A Reingold–Tilford style layout. Every subtree is described by its
//! contour: for each depth below the subtree root, the leftmost and rightmost
//! box edges relative to the root's center. Sibling subtrees are placed left
//! to right, each shifted by the smallest amount that keeps it one gap clear
//! of the merged contour of its left siblings at every shared depth. The
//! parent is then centered above its first and last child.
//!
//! Unlike the basic engine, a narrow subtree may slide underneath a wide
//! neighbour's empty levels, so uneven trees come out narrower.

use log::trace;

use arbor_core::tree::Node;

use crate::layout::{PositionedTree, engines::TreeEngine, sizing};

/// Left and right box edges per depth, relative to a subtree root's center.
type Contour = Vec<(f32, f32)>;

/// Contour layout engine implementation that implements the TreeEngine trait
pub struct Engine {
    gap: f32,
}

impl Engine {
    /// Create a new contour layout engine
    pub fn new() -> Self {
        Self {
            gap: sizing::H_GAP,
        }
    }

    /// Smallest shift placing `right` one gap clear of `left` at every depth
    /// both contours reach.
    fn separation(&self, left: &Contour, right: &Contour) -> f32 {
        left.iter()
            .zip(right)
            .map(|(&(_, left_edge), &(right_edge, _))| left_edge - right_edge + self.gap)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Merge `right`, shifted by `shift`, into `merged`.
    fn merge(merged: &mut Contour, right: &Contour, shift: f32) {
        for (depth, &(left_edge, right_edge)) in right.iter().enumerate() {
            let shifted = (left_edge + shift, right_edge + shift);
            match merged.get_mut(depth) {
                Some(level) => {
                    level.0 = level.0.min(shifted.0);
                    level.1 = level.1.max(shifted.1);
                }
                None => merged.push(shifted),
            }
        }
    }

    /// Center offset of every node relative to its parent's center, indexed
    /// like the arena. The root's offset is 0.
    fn relative_offsets(&self, tree: &PositionedTree) -> Vec<f32> {
        let mut offsets = vec![0.0; tree.len()];
        let mut contours: Vec<Contour> = vec![Vec::new(); tree.len()];

        // Reverse pre-order visits every child before its parent
        for (index, node) in tree.iter().rev() {
            let half = node.width() / 2.0;
            let mut contour: Contour = vec![(-half, half)];

            if let Some((first, rest)) = node.children().split_first() {
                let mut merged = std::mem::take(&mut contours[first.index()]);
                let mut last_shift = 0.0;

                for child in rest {
                    let child_contour = std::mem::take(&mut contours[child.index()]);
                    let shift = self.separation(&merged, &child_contour);
                    Self::merge(&mut merged, &child_contour, shift);
                    offsets[child.index()] = shift;
                    last_shift = shift;
                }

                // Center the parent between its first and last child
                let mid = last_shift / 2.0;
                for child in node.children() {
                    offsets[child.index()] -= mid;
                }
                contour.extend(merged.into_iter().map(|(l, r)| (l - mid, r - mid)));
            }

            contours[index.index()] = contour;
        }

        offsets
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
        let offsets = self.relative_offsets(&positioned);

        // Pre-order visits every parent before its children
        let mut centers = vec![0.0; positioned.len()];
        let mut box_xs = Vec::with_capacity(positioned.len());
        for (index, node) in positioned.iter() {
            let i = index.index();
            if let Some(parent) = node.parent() {
                centers[i] = centers[parent.index()] + offsets[i];
            }
            box_xs.push((index, centers[i] - node.width() / 2.0));
        }

        for (index, x) in box_xs {
            positioned.set_x(index, x);
        }
        trace!(nodes_count = positioned.len(); "Contour placement done");

        positioned.normalize();
        positioned
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::layout::engines::basic;

    fn min_x(tree: &PositionedTree, label: &str) -> f32 {
        tree.iter()
            .find(|(_, node)| node.label() == label)
            .map(|(_, node)| node.bounds().min_x())
            .expect("label present")
    }

    #[test]
    fn test_two_leaves() {
        let node = Node::new("S").with_child(Node::new("A")).with_child(Node::new("B"));
        let tree = Engine::new().calculate(&node);

        assert!(approx_eq!(f32, min_x(&tree, "A"), 0.0));
        assert!(approx_eq!(f32, min_x(&tree, "B"), 60.0));
        assert!(approx_eq!(f32, min_x(&tree, "S"), 30.0));
    }

    #[test]
    fn test_parent_centered_over_first_and_last_child() {
        let node = Node::new("S")
            .with_child(Node::new("A"))
            .with_child(Node::new("B"))
            .with_child(Node::new("LongerLabel"));
        let tree = Engine::new().calculate(&node);

        let root = tree.root();
        let first = tree[root.children()[0]].bounds().center().x();
        let last = tree[root.children()[2]].bounds().center().x();
        assert!(approx_eq!(
            f32,
            root.bounds().center().x(),
            (first + last) / 2.0,
            epsilon = 1e-3
        ));
    }

    #[test]
    fn test_uneven_subtrees_interlock() {
        // A wide label deep on the right may slide under the empty left side
        let node = Node::new("S")
            .with_child(Node::new("A"))
            .with_child(
                Node::new("B").with_child(
                    Node::new("C").with_child(Node::new("AVeryLongDeepLabel")),
                ),
            );

        let contour = Engine::new().calculate(&node);
        let basic = basic::Engine::new().calculate(&node);

        assert!(contour.size().width() <= basic.size().width() + 1e-3);
    }

    #[test]
    fn test_deep_cousins_are_separated() {
        let node = Node::new("S")
            .with_child(Node::new("A").with_child(Node::new("x").with_child(Node::new("WideLeftLeaf"))))
            .with_child(Node::new("B").with_child(Node::new("y").with_child(Node::new("WideRightLeaf"))));
        let tree = Engine::new().calculate(&node);

        let left = tree
            .iter()
            .find(|(_, n)| n.label() == "WideLeftLeaf")
            .map(|(_, n)| n.bounds())
            .expect("left leaf");
        let right = tree
            .iter()
            .find(|(_, n)| n.label() == "WideRightLeaf")
            .map(|(_, n)| n.bounds())
            .expect("right leaf");

        assert!(left.max_x() + sizing::H_GAP <= right.min_x() + 1e-3);
    }

    #[test]
    fn test_separation_uses_widest_level() {
        let engine = Engine::new();
        let left: Contour = vec![(-20.0, 20.0), (-50.0, 50.0)];
        let right: Contour = vec![(-20.0, 20.0), (-10.0, 10.0)];

        // Level 0 needs 60, level 1 needs 80
        assert!(approx_eq!(f32, engine.separation(&left, &right), 80.0));
    }
}
