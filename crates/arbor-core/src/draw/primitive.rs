//! Backend-independent draw primitives.

use crate::{
    draw::RenderLayer,
    geometry::{Bounds, Point},
};

/// What a piece of text is, so exporters can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// A node label, centered in its box
    Label,
    /// Feature text, centered in its badge
    Badge,
}

/// End marker attached to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Directional arrowhead pointing along the path's end tangent
    Arrowhead,
}

/// A single drawing instruction with absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A node box outline
    Rect { bounds: Bounds },
    /// A rounded feature badge background
    Badge { bounds: Bounds },
    /// Text centered on `anchor`
    Text {
        anchor: Point,
        content: String,
        role: TextRole,
    },
    /// A right-angle tree edge: down, across, down
    Elbow { points: [Point; 4] },
    /// A cubic Bézier curve, optionally ending in a marker
    Curve {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
        marker: Option<Marker>,
    },
}

impl Primitive {
    /// Returns the layer this primitive renders into.
    pub fn layer(&self) -> RenderLayer {
        match self {
            Self::Rect { .. } => RenderLayer::Box,
            Self::Badge { .. } => RenderLayer::Badge,
            Self::Text { .. } => RenderLayer::Text,
            Self::Elbow { .. } => RenderLayer::Edge,
            Self::Curve { .. } => RenderLayer::Arc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_primitive_layers() {
        let rect = Primitive::Rect {
            bounds: Bounds::new_from_top_left(Point::default(), Size::new(10.0, 10.0)),
        };
        let elbow = Primitive::Elbow {
            points: [Point::default(); 4],
        };
        let curve = Primitive::Curve {
            start: Point::default(),
            control1: Point::default(),
            control2: Point::default(),
            end: Point::default(),
            marker: Some(Marker::Arrowhead),
        };

        assert_eq!(rect.layer(), RenderLayer::Box);
        assert_eq!(elbow.layer(), RenderLayer::Edge);
        assert_eq!(curve.layer(), RenderLayer::Arc);
    }
}
