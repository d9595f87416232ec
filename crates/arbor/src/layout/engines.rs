//! Layout engine selection.
//!
//! Each [`LayoutEngine`] variant maps to one [`TreeEngine`] implementation.
//! Both engines share the sizing and vertical placement of
//! [`PositionedTree::from_node`] and differ only in how they choose each
//! box's horizontal position.

mod basic;
mod contour;

use arbor_core::{LayoutEngine, tree::Node};

use super::PositionedTree;

/// Interface for tree layout engines.
pub trait TreeEngine {
    /// Calculate positions for every node of `tree`.
    ///
    /// The result is normalized: the leftmost box starts at `x = 0`.
    fn calculate(&self, tree: &Node) -> PositionedTree;
}

/// Returns the engine implementing `engine`.
pub fn engine_for(engine: LayoutEngine) -> Box<dyn TreeEngine> {
    match engine {
        LayoutEngine::Basic => Box::new(basic::Engine::new()),
        LayoutEngine::Contour => Box::new(contour::Engine::new()),
    }
}
