//! SVG export of scenes.
//!
//! Primitives are rendered into layered `<g data-layer="...">` groups so edges
//! sit below boxes and movement arcs sit above them regardless of emission
//! order. The content is translated so the scene's bounds, including badges
//! and arc control points, start one margin in from the top-left corner.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use arbor_core::{
    color::Color,
    draw::{LayeredOutput, Marker, Primitive, SvgNode, TextRole},
    geometry::{Point, Size},
};

use crate::{
    export::{self, Exporter},
    layout::sizing,
    scene::Scene,
};

/// Space between the drawing and the document edge
pub const MARGIN: f32 = 20.0;

const FONT_FAMILY: &str = "monospace";
const LABEL_FONT_SIZE: f32 = 14.0;
const BADGE_FONT_SIZE: f32 = 10.0;
const BOX_FILL: &str = "white";

/// Exporter producing SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    line_color: Color,
    arc_color: Color,
}

/// Builder for [`Svg`].
#[derive(Debug, Clone, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
    line_color: Color,
    arc_color: Color,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the whole document with `color`; transparent when `None`.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Stroke for boxes, badges, edges and text.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Stroke for movement arcs and their arrowheads.
    pub fn with_arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            background: self.background,
            line_color: self.line_color,
            arc_color: self.arc_color,
        }
    }
}

fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { "M" } else { "L" };
            format!("{command} {} {}", p.x(), p.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Svg {
    fn marker_id(&self, marker: Marker) -> String {
        match marker {
            Marker::Arrowhead => format!("arrowhead-{}", self.arc_color.to_id_safe_string()),
        }
    }

    fn create_arrowhead(&self) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", self.marker_id(Marker::Arrowhead))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", self.arc_color.to_string())
                    .set("fill-opacity", self.arc_color.alpha()),
            )
    }

    fn render_text(&self, anchor: Point, content: &str, role: TextRole) -> svg_element::Text {
        let font_size = match role {
            TextRole::Label => LABEL_FONT_SIZE,
            TextRole::Badge => BADGE_FONT_SIZE,
        };

        svg_element::Text::new(content)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", font_size)
            .set("fill", self.line_color.to_string())
    }

    fn render_primitive(&self, primitive: &Primitive) -> SvgNode {
        match primitive {
            Primitive::Rect { bounds } => Box::new(
                svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("rx", 3)
                    .set("fill", BOX_FILL)
                    .set("stroke", self.line_color.to_string())
                    .set("stroke-opacity", self.line_color.alpha())
                    .set("stroke-width", 1),
            ),
            Primitive::Badge { bounds } => Box::new(
                svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("rx", bounds.height() / 2.0)
                    .set("fill", BOX_FILL)
                    .set("stroke", self.line_color.to_string())
                    .set("stroke-width", 0.75),
            ),
            Primitive::Text {
                anchor,
                content,
                role,
            } => Box::new(self.render_text(*anchor, content, *role)),
            Primitive::Elbow { points } => Box::new(
                svg_element::Path::new()
                    .set("d", path_data(points))
                    .set("fill", "none")
                    .set("stroke", self.line_color.to_string())
                    .set("stroke-opacity", self.line_color.alpha())
                    .set("stroke-width", 1),
            ),
            Primitive::Curve {
                start,
                control1,
                control2,
                end,
                marker,
            } => {
                let d = format!(
                    "M {} {} C {} {}, {} {}, {} {}",
                    start.x(),
                    start.y(),
                    control1.x(),
                    control1.y(),
                    control2.x(),
                    control2.y(),
                    end.x(),
                    end.y()
                );
                let mut path = svg_element::Path::new()
                    .set("d", d)
                    .set("fill", "none")
                    .set("stroke", self.arc_color.to_string())
                    .set("stroke-opacity", self.arc_color.alpha())
                    .set("stroke-width", 1.5);
                if let Some(marker) = marker {
                    path = path.set("marker-end", format!("url(#{})", self.marker_id(*marker)));
                }
                Box::new(path)
            }
        }
    }

    fn add_background(&self, doc: Document, size: Size) -> Document {
        match self.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            ),
            None => doc,
        }
    }

    /// Render `scene` into an SVG document.
    ///
    /// # Errors
    ///
    /// Fails for a scene with no primitives or with non-finite coordinates.
    pub fn render_scene(&self, scene: &Scene) -> Result<Document, export::Error> {
        let content_bounds = scene
            .bounds()
            .ok_or_else(|| export::Error::Render("scene has no primitives".to_string()))?;
        if !(content_bounds.width().is_finite() && content_bounds.height().is_finite()) {
            return Err(export::Error::Render(
                "scene has non-finite coordinates".to_string(),
            ));
        }

        let content_size = content_bounds.to_size();
        let svg_size = Size::new(
            MARGIN.mul_add(2.0, content_size.width()),
            MARGIN.mul_add(2.0, content_size.height()),
        );
        debug!(width = svg_size.width(), height = svg_size.height(); "Final SVG dimensions");

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());
        let doc = self.add_background(doc, svg_size);
        let doc = doc.add(svg_element::Definitions::new().add(self.create_arrowhead()));

        let mut output = LayeredOutput::new();
        for primitive in scene.primitives() {
            output.add_to_layer(primitive.layer(), self.render_primitive(primitive));
        }

        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                MARGIN - content_bounds.min_x(),
                MARGIN - content_bounds.min_y()
            ),
        );
        for layer in output.render() {
            main_group = main_group.add(layer);
        }

        Ok(doc.add(main_group))
    }
}

impl Exporter for Svg {
    fn export_scene(&self, scene: &Scene) -> Result<String, export::Error> {
        let doc = self.render_scene(scene)?;
        info!(primitives_count = scene.primitives().len(); "SVG document rendered");
        Ok(doc.to_string())
    }
}

/// Render a small SVG that shows `message` in place of a diagram.
pub fn render_placeholder(message: &str) -> String {
    const PADDING: f32 = 12.0;
    const HEIGHT: f32 = 32.0;
    const WARNING_COLOR: &str = "#b03a2e";

    let width = sizing::CHAR_WIDTH.mul_add(message.chars().count() as f32, 2.0 * PADDING);

    let doc = Document::new()
        .set("viewBox", format!("0 0 {width} {HEIGHT}"))
        .set("width", width)
        .set("height", HEIGHT)
        .add(
            svg_element::Rectangle::new()
                .set("x", 0.5)
                .set("y", 0.5)
                .set("width", width - 1.0)
                .set("height", HEIGHT - 1.0)
                .set("rx", 4)
                .set("fill", "#fdecea")
                .set("stroke", WARNING_COLOR)
                .set("stroke-dasharray", "4 2"),
        )
        .add(
            svg_element::Text::new(message)
                .set("x", width / 2.0)
                .set("y", HEIGHT / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12)
                .set("fill", WARNING_COLOR),
        );

    doc.to_string()
}
