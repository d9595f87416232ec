//! Property tests for layout, movement and scene emission over generated trees.

use proptest::prelude::*;

use arbor::{
    LayoutEngine,
    draw::Primitive,
    layout::{PositionedTree, layout_tree, sizing},
    movement::resolve_movement,
    scene::emit_scene,
    tree::{Feature, Node, Sign},
};

const TOLERANCE: f32 = 1e-3;

fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Z][a-z]{0,2}",
        1 => "[a-z]{4,12}",
        1 => Just("t".to_string()),
    ]
}

fn arb_node(label: String, id: Option<String>, features: Vec<(bool, String)>) -> Node {
    let mut node = Node::new(label);
    if let Some(id) = id {
        node = node.with_id(id);
    }
    for (plus, name) in features {
        let sign = if plus { Sign::Plus } else { Sign::Minus };
        node = node.with_feature(Feature::new(sign, name));
    }
    node
}

fn arb_id() -> impl Strategy<Value = Option<String>> {
    proptest::option::weighted(0.3, "[ij]")
}

fn arb_features() -> impl Strategy<Value = Vec<(bool, String)>> {
    proptest::collection::vec((any::<bool>(), "[A-Z]{1,4}"), 0..2)
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = (arb_label(), arb_id(), arb_features())
        .prop_map(|(label, id, features)| arb_node(label, id, features));

    leaf.prop_recursive(5, 40, 4, |inner| {
        (
            arb_label(),
            arb_id(),
            arb_features(),
            proptest::collection::vec(inner, 1..5),
        )
            .prop_map(|(label, id, features, children)| {
                children
                    .into_iter()
                    .fold(arb_node(label, id, features), Node::with_child)
            })
    })
}

fn arb_engine() -> impl Strategy<Value = LayoutEngine> {
    prop_oneof![Just(LayoutEngine::Basic), Just(LayoutEngine::Contour)]
}

fn assert_sibling_separation(tree: &PositionedTree) -> Result<(), TestCaseError> {
    for (_, node) in tree.iter() {
        for pair in node.children().windows(2) {
            let left = tree[pair[0]].bounds();
            let right = tree[pair[1]].bounds();
            prop_assert!(
                left.max_x() + sizing::H_GAP <= right.min_x() + TOLERANCE,
                "siblings {} and {} overlap",
                tree[pair[0]].label(),
                tree[pair[1]].label()
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_all_boxes_non_negative(tree in arb_tree(), engine in arb_engine()) {
        let positioned = layout_tree(&tree, engine);

        let min_x = positioned
            .iter()
            .map(|(_, node)| node.bounds().min_x())
            .fold(f32::INFINITY, f32::min);
        prop_assert!(min_x.abs() <= TOLERANCE, "leftmost box at {min_x}");
        prop_assert!(positioned.iter().all(|(_, node)| node.bounds().min_y() >= 0.0));
    }

    #[test]
    fn prop_siblings_separated(tree in arb_tree(), engine in arb_engine()) {
        assert_sibling_separation(&layout_tree(&tree, engine))?;
    }

    #[test]
    fn prop_layout_idempotent(tree in arb_tree(), engine in arb_engine()) {
        let copy = tree.clone();
        prop_assert_eq!(layout_tree(&tree, engine), layout_tree(&copy, engine));
    }

    #[test]
    fn prop_rows_follow_depth(tree in arb_tree(), engine in arb_engine()) {
        let positioned = layout_tree(&tree, engine);
        for (_, node) in positioned.iter() {
            let expected = sizing::level_y(node.depth());
            prop_assert!((node.bounds().min_y() - expected).abs() <= TOLERANCE);
            if let Some(parent) = node.parent() {
                prop_assert_eq!(positioned[parent].depth() + 1, node.depth());
            }
        }
    }

    #[test]
    fn prop_size_covers_every_box(tree in arb_tree(), engine in arb_engine()) {
        let positioned = layout_tree(&tree, engine);
        let size = positioned.size();
        for (_, node) in positioned.iter() {
            prop_assert!(node.bounds().max_x() <= size.width() + TOLERANCE);
            prop_assert!(node.bounds().max_y() <= size.height() + TOLERANCE);
        }
    }

    #[test]
    fn prop_one_arc_per_resolved_trace(tree in arb_tree(), engine in arb_engine()) {
        let positioned = layout_tree(&tree, engine);
        let groups = resolve_movement(&positioned);
        let scene = emit_scene(&positioned, &groups);

        let expected: usize = groups
            .values()
            .filter(|group| group.origin().is_some())
            .map(|group| group.traces().len())
            .sum();
        let arcs = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Curve { .. }))
            .count();
        prop_assert_eq!(arcs, expected);

        let edges = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Elbow { .. }))
            .count();
        prop_assert_eq!(edges, positioned.len() - 1);
    }
}
