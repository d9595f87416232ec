//! Movement resolution.
//!
//! Nodes sharing a movement identifier (`#id`) are grouped: trace nodes
//! (label `t`) are the positions a moved element left behind, and the single
//! non-trace node is its origin. Each origin/trace pair becomes one arc in
//! the scene.
//!
//! When several non-trace nodes claim the same identifier the first one in
//! document order stays the origin; later claims are recorded as conflicts
//! and logged.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::layout::{NodeIndex, PositionedTree};

/// Nodes sharing one movement identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementGroup {
    origin: Option<NodeIndex>,
    traces: Vec<NodeIndex>,
    conflicts: Vec<NodeIndex>,
}

impl MovementGroup {
    /// The first non-trace node carrying the identifier.
    pub fn origin(&self) -> Option<NodeIndex> {
        self.origin
    }

    /// Trace nodes in document order.
    pub fn traces(&self) -> &[NodeIndex] {
        &self.traces
    }

    /// Non-trace nodes that re-used the identifier after the origin.
    pub fn conflicts(&self) -> &[NodeIndex] {
        &self.conflicts
    }

    /// Returns `true` if the group produces arcs: it has an origin and at
    /// least one trace.
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && !self.traces.is_empty()
    }
}

/// Movement groups keyed by identifier, in order of first appearance.
pub type MovementGroups = IndexMap<String, MovementGroup>;

/// Group every identified node of `tree` by identifier.
///
/// # Example
///
/// ```
/// # use arbor::{layout::layout_tree, movement::resolve_movement};
/// # use arbor_core::{LayoutEngine, tree::Node};
/// let tree = Node::new("CP")
///     .with_child(Node::new("DP").with_id("wh").with_child(Node::new("who")))
///     .with_child(Node::new("VP").with_child(Node::new("t").with_id("wh")));
///
/// let groups = resolve_movement(&layout_tree(&tree, LayoutEngine::Basic));
/// let wh = &groups["wh"];
/// assert!(wh.origin().is_some());
/// assert_eq!(wh.traces().len(), 1);
/// ```
pub fn resolve_movement(tree: &PositionedTree) -> MovementGroups {
    let mut groups = MovementGroups::new();

    for (index, node) in tree.iter() {
        let Some(id) = node.id() else {
            continue;
        };
        let group = groups.entry(id.to_string()).or_default();

        if node.is_trace() {
            group.traces.push(index);
        } else if let Some(origin) = group.origin {
            warn!(
                id = id,
                origin = tree[origin].label(),
                ignored = node.label();
                "Identifier already has an origin; keeping the first"
            );
            group.conflicts.push(index);
        } else {
            group.origin = Some(index);
        }
    }

    let arcs_count: usize = groups
        .values()
        .filter(|group| group.is_complete())
        .map(|group| group.traces.len())
        .sum();
    debug!(groups_count = groups.len(), arcs_count; "Movement resolved");

    groups
}

#[cfg(test)]
mod tests {
    use arbor_core::{LayoutEngine, tree::Node};

    use super::*;
    use crate::layout::layout_tree;

    fn resolve(node: &Node) -> (PositionedTree, MovementGroups) {
        let tree = layout_tree(node, LayoutEngine::Basic);
        let groups = resolve_movement(&tree);
        (tree, groups)
    }

    #[test]
    fn test_origin_and_trace() {
        let node = Node::new("CP")
            .with_child(Node::new("DP").with_id("wh"))
            .with_child(Node::new("VP").with_child(Node::new("t").with_id("wh")));
        let (tree, groups) = resolve(&node);

        assert_eq!(groups.len(), 1);
        let group = &groups["wh"];
        assert_eq!(tree[group.origin().expect("origin")].label(), "DP");
        assert_eq!(group.traces().len(), 1);
        assert_eq!(tree[group.traces()[0]].label(), "t");
        assert!(group.conflicts().is_empty());
        assert!(group.is_complete());
    }

    #[test]
    fn test_trace_before_origin() {
        let node = Node::new("S")
            .with_child(Node::new("t").with_id("i"))
            .with_child(Node::new("NP").with_id("i"));
        let (tree, groups) = resolve(&node);

        let group = &groups["i"];
        assert_eq!(tree[group.origin().expect("origin")].label(), "NP");
        assert_eq!(group.traces().len(), 1);
    }

    #[test]
    fn test_first_origin_wins() {
        let node = Node::new("S")
            .with_child(Node::new("DP").with_id("k"))
            .with_child(Node::new("NP").with_id("k"))
            .with_child(Node::new("t").with_id("k"));
        let (tree, groups) = resolve(&node);

        let group = &groups["k"];
        assert_eq!(tree[group.origin().expect("origin")].label(), "DP");
        assert_eq!(group.conflicts().len(), 1);
        assert_eq!(tree[group.conflicts()[0]].label(), "NP");
    }

    #[test]
    fn test_incomplete_groups() {
        let node = Node::new("S")
            .with_child(Node::new("t").with_id("orphan"))
            .with_child(Node::new("DP").with_id("lonely"));
        let (_, groups) = resolve(&node);

        assert!(!groups["orphan"].is_complete());
        assert!(groups["orphan"].origin().is_none());
        assert!(!groups["lonely"].is_complete());
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let node = Node::new("S")
            .with_child(Node::new("B").with_id("second"))
            .with_child(Node::new("A").with_id("first"));
        let (_, groups) = resolve(&node);

        // Pre-order puts "second" first
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["second", "first"]);
    }

    #[test]
    fn test_unidentified_nodes_ignored() {
        let node = Node::new("S").with_child(Node::new("t"));
        let (_, groups) = resolve(&node);
        assert!(groups.is_empty());
    }
}
