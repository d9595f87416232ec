//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor parser,
//! layout engines and renderer. It includes:
//!
//! - **Tree**: The parsed syntax tree model ([`tree::Node`], [`tree::Feature`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Draw primitives and render layers ([`draw`] module)
//! - **Engine selection**: [`LayoutEngine`]

pub mod color;
pub mod draw;
pub mod geometry;
pub mod tree;

use std::str::FromStr;

use serde::Deserialize;

/// Layout algorithm used to position a syntax tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Two-pass sizing and placement; parents centered over the span of
    /// their children's extents.
    #[default]
    Basic,
    /// Contour-threading layout that lets uneven subtrees interlock.
    Contour,
}

impl FromStr for LayoutEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "contour" => Ok(Self::Contour),
            _ => Err("Unsupported layout engine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_engine_from_str() {
        assert_eq!("basic".parse(), Ok(LayoutEngine::Basic));
        assert_eq!("contour".parse(), Ok(LayoutEngine::Contour));
        assert!("sugiyama".parse::<LayoutEngine>().is_err());
    }

    #[test]
    fn test_layout_engine_default_is_basic() {
        assert_eq!(LayoutEngine::default(), LayoutEngine::Basic);
    }
}
