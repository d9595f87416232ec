//! Layer-based rendering system for SVG output.
//!
//! Drawables specify which z-order layer their SVG elements belong to, so
//! tree edges always sit below node boxes and movement arcs always sit above
//! them regardless of emission order.
//!
//! # Example
//!
//! ```
//! # use arbor_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let bg = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Background, Box::new(bg));
//!
//! let text = svg::node::element::Text::new("DP");
//! output.add_to_layer(RenderLayer::Text, Box::new(text));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill - renders first
    Background,
    /// Parent-child tree edges
    Edge,
    /// Node boxes
    Box,
    /// Feature badges straddling box edges
    Badge,
    /// Movement arcs between origins and traces
    Arc,
    /// Node labels and badge text
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Edge => "edge",
            Self::Box => "box",
            Self::Badge => "badge",
            Self::Arc => "arc",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Layers
    /// are emitted bottom to top; empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable, so per-layer insertion order survives
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_new() {
        assert!(LayeredOutput::new().is_empty());
    }

    #[test]
    fn test_layered_output_render_groups_by_layer() {
        let mut output = LayeredOutput::new();

        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Box, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Edge, Box::new(Rectangle::new()));

        let svg_nodes = output.render();
        assert_eq!(svg_nodes.len(), 3);
        assert!(svg_nodes[0].to_string().contains(r#"data-layer="edge""#));
        assert!(svg_nodes[2].to_string().contains(r#"data-layer="text""#));
    }

    #[test]
    fn test_layered_output_keeps_insertion_order_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(svg::node::element::Text::new("DP")));
        output.add_to_layer(RenderLayer::Arc, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(svg::node::element::Text::new("who")));

        let svg_nodes = output.render();
        assert_eq!(svg_nodes.len(), 2);
        let text = svg_nodes[1].to_string();
        assert!(text.find("DP").unwrap() < text.find("who").unwrap());
    }

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Edge < RenderLayer::Box);
        assert!(RenderLayer::Box < RenderLayer::Arc);
        assert!(RenderLayer::Arc < RenderLayer::Text);
    }
}
