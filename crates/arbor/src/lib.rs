//! Arbor - Syntax tree diagrams from bracket notation.
//!
//! Parsing, layout, movement resolution and rendering for linguistic syntax
//! trees written as `[CP[+WH] [DP#wh who] [C' [C did] [VP see t#wh]]]`.
//!
//! The pipeline is:
//!
//! 1. [`arbor_parser::parse`] - source text to [`tree::Node`]
//! 2. [`layout::layout_tree`] - node boxes positioned by the configured engine
//! 3. [`movement::resolve_movement`] - origins and traces grouped by identifier
//! 4. [`scene::emit_scene`] - boxes, badges, edges and arcs as draw primitives
//! 5. [`export::svg`] - primitives rendered into an SVG document
//!
//! Every stage after parsing is total: a parsed tree can always be drawn.

pub mod config;
pub mod export;
pub mod layout;
pub mod movement;
pub mod scene;

mod error;

pub use arbor_core::{LayoutEngine, color, draw, geometry, tree};

pub use error::ArborError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::Exporter;
use layout::PositionedTree;
use scene::Scene;
use tree::Node;

/// Builder for parsing and rendering syntax trees.
///
/// Holds only immutable configuration, so one builder can render any number
/// of independent trees, from any number of threads.
///
/// # Examples
///
/// ```rust
/// use arbor::{TreeBuilder, config::AppConfig};
///
/// let builder = TreeBuilder::new(AppConfig::default());
///
/// // Parse source to a tree
/// let tree = builder.parse("[DP [D the] [NP dog]]")
///     .expect("Failed to parse");
///
/// // Render the tree to SVG
/// let svg = builder.render_svg(&tree)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
///
/// // Or use default config
/// let builder = TreeBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: AppConfig,
}

impl TreeBuilder {
    /// Create a new tree builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse bracket notation into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Parse`] carrying the diagnostic and the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::TreeBuilder;
    ///
    /// let builder = TreeBuilder::default();
    /// let tree = builder.parse("[CP[+WH] [C did]]").expect("Failed to parse tree");
    /// assert_eq!(tree.features().len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Node, ArborError> {
        info!("Parsing tree");

        let tree = arbor_parser::parse(source)
            .map_err(|err| ArborError::new_parse_error(err, source))?;

        debug!(nodes_count = tree.count(), depth = tree.depth(); "Tree parsed successfully");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }

    /// Position every node of `tree` with the configured layout engine.
    pub fn layout(&self, tree: &Node) -> PositionedTree {
        layout::layout_tree(tree, self.config.layout().engine())
    }

    /// Lay out `tree`, resolve its movement and emit the drawable scene.
    pub fn render_scene(&self, tree: &Node) -> Scene {
        let positioned = self.layout(tree);
        let groups = movement::resolve_movement(&positioned);
        scene::emit_scene(&positioned, &groups)
    }

    /// Render `tree` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] for unparsable style colors and
    /// [`ArborError::Export`] if the scene cannot be rendered.
    pub fn render_svg(&self, tree: &Node) -> Result<String, ArborError> {
        let style = self.config.style();
        let exporter = export::svg::SvgBuilder::new()
            .with_background(style.background_color().map_err(ArborError::Config)?)
            .with_line_color(style.line_color().map_err(ArborError::Config)?)
            .with_arc_color(style.arc_color().map_err(ArborError::Config)?)
            .build();

        info!(engine:? = self.config.layout().engine(); "Rendering tree");
        let scene = self.render_scene(tree);
        let svg = exporter.export_scene(&scene)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render `source` to SVG, or to a placeholder showing the error.
    ///
    /// For hosts that embed diagrams in documents and always need something
    /// to display.
    ///
    /// ```rust
    /// use arbor::TreeBuilder;
    ///
    /// let svg = TreeBuilder::default().render_or_placeholder("[DP [D the]");
    /// assert!(svg.contains("unclosed bracket"));
    /// ```
    pub fn render_or_placeholder(&self, source: &str) -> String {
        let result = self.parse(source).and_then(|tree| self.render_svg(&tree));
        match result {
            Ok(svg) => svg,
            Err(err) => {
                warn!(err:%; "Rendering placeholder");
                export::svg::render_placeholder(&err.to_string())
            }
        }
    }
}
