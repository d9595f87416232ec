//! Scene emission.
//!
//! A [`Scene`] is the backend-independent drawing of a positioned tree: node
//! boxes with centered labels, feature badges straddling each box's top
//! edge, right-angle edges from every parent to its children, and one arrowed
//! curve from each movement origin to each of its traces.

use log::debug;

use arbor_core::{
    draw::{Marker, Primitive, TextRole},
    geometry::{Bounds, Point, Size},
};

use crate::{
    layout::{PositionedNode, PositionedTree, sizing},
    movement::MovementGroups,
};

/// Vertical distance between an arc's endpoints and their control points.
pub const ARC_CONTROL_OFFSET: f32 = 40.0;

/// A drawable tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(size: Size, primitives: Vec<Primitive>) -> Self {
        Self { size, primitives }
    }

    /// Extent of the laid-out boxes, see [`PositionedTree::size`].
    pub fn size(&self) -> Size {
        self.size
    }

    /// Primitives in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Bounds of everything drawn, including badges and arc control points
    /// that reach outside the boxes. `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        self.primitives
            .iter()
            .map(primitive_bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

fn bounds_of_points(points: &[Point]) -> Bounds {
    let first = Bounds::new_from_top_left(points[0], Size::default());
    points[1..].iter().fold(first, |acc, point| {
        acc.merge(&Bounds::new_from_top_left(*point, Size::default()))
    })
}

fn primitive_bounds(primitive: &Primitive) -> Bounds {
    match primitive {
        Primitive::Rect { bounds } | Primitive::Badge { bounds } => *bounds,
        Primitive::Text { anchor, .. } => Bounds::new_from_top_left(*anchor, Size::default()),
        Primitive::Elbow { points } => bounds_of_points(points),
        Primitive::Curve {
            start,
            control1,
            control2,
            end,
            ..
        } => bounds_of_points(&[*start, *control1, *control2, *end]),
    }
}

/// Right-angle path from the parent's bottom center to the child's top
/// center, turning at the vertical midpoint between them.
pub fn elbow(parent: Bounds, child: Bounds) -> [Point; 4] {
    let from = parent.bottom_center();
    let to = child.top_center();
    let mid_y = (from.y() + to.y()) / 2.0;

    [from, from.with_y(mid_y), to.with_y(mid_y), to]
}

/// Arc from the origin's top center to the trace's bottom center, bulging
/// upward out of the origin and arriving from below into the trace.
pub fn movement_arc(origin: Bounds, trace: Bounds) -> Primitive {
    let start = origin.top_center();
    let end = trace.bottom_center();

    Primitive::Curve {
        start,
        control1: start.with_y(start.y() - ARC_CONTROL_OFFSET),
        control2: end.with_y(end.y() + ARC_CONTROL_OFFSET),
        end,
        marker: Some(Marker::Arrowhead),
    }
}

/// Badges for `node`, packed leftward from the box's right edge in feature
/// order, each vertically centered on the box's top edge.
fn badges(node: &PositionedNode, primitives: &mut Vec<Primitive>) {
    let bounds = node.bounds();
    let mut right = bounds.max_x();

    for feature in node.features() {
        let size = sizing::badge_size(feature);
        let top_left = Point::new(right - size.width(), bounds.min_y() - size.height() / 2.0);
        let badge = Bounds::new_from_top_left(top_left, size);

        primitives.push(Primitive::Badge { bounds: badge });
        primitives.push(Primitive::Text {
            anchor: badge.center(),
            content: feature.to_string(),
            role: TextRole::Badge,
        });

        right = badge.min_x() - sizing::BADGE_SPACING;
    }
}

/// Emit the scene for a positioned tree and its movement groups.
///
/// Groups without an origin or without traces draw no arcs.
pub fn emit_scene(tree: &PositionedTree, groups: &MovementGroups) -> Scene {
    let mut primitives = Vec::new();

    for (parent, child) in tree.edges() {
        primitives.push(Primitive::Elbow {
            points: elbow(parent.bounds(), child.bounds()),
        });
    }

    for (_, node) in tree.iter() {
        let bounds = node.bounds();
        primitives.push(Primitive::Rect { bounds });
        primitives.push(Primitive::Text {
            anchor: bounds.center(),
            content: node.label().to_string(),
            role: TextRole::Label,
        });
        badges(node, &mut primitives);
    }

    let mut arcs_count = 0;
    for group in groups.values() {
        let Some(origin) = group.origin() else {
            continue;
        };
        for &trace in group.traces() {
            primitives.push(movement_arc(tree[origin].bounds(), tree[trace].bounds()));
            arcs_count += 1;
        }
    }

    debug!(primitives_count = primitives.len(), arcs_count; "Scene emitted");

    Scene::new(tree.size(), primitives)
}
