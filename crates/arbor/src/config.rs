//! Configuration types for Arbor tree rendering.
//!
//! This module provides configuration structures that control how trees are
//! laid out and styled. All types implement [`serde::Deserialize`] so hosts
//! can load them from external sources such as TOML files.
//!
//! Box sizes, gaps and badge geometry are fixed and not configurable; only
//! the layout engine and colors are.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`LayoutEngine`].
//! - [`StyleConfig`] - Background, line and arc colors.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert!(config.style().arc_color().is_ok());
//! ```

use serde::Deserialize;

use arbor_core::{LayoutEngine, color::Color};

const DEFAULT_LINE_COLOR: &str = "black";
const DEFAULT_ARC_COLOR: &str = "#b03a2e";

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout engine configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// [`LayoutEngine`] used for every tree.
    #[serde(default)]
    engine: LayoutEngine,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] using `engine`.
    pub fn new(engine: LayoutEngine) -> Self {
        Self { engine }
    }

    /// Returns the configured [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }
}

/// Visual styling configuration for rendered trees.
///
/// Colors are kept as strings and parsed on access, so an invalid value is
/// reported when a tree is rendered rather than when the file is loaded.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Stroke color for boxes, badges and tree edges.
    #[serde(default)]
    line_color: Option<String>,

    /// Stroke color for movement arcs and their arrowheads.
    #[serde(default)]
    arc_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given color strings.
    pub fn new(
        background_color: Option<String>,
        line_color: Option<String>,
        arc_color: Option<String>,
    ) -> Self {
        Self {
            background_color,
            line_color,
            arc_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed line [`Color`], black when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Color, String> {
        Color::new(self.line_color.as_deref().unwrap_or(DEFAULT_LINE_COLOR))
            .map_err(|err| format!("Invalid line color in config: {err}"))
    }

    /// Returns the parsed arc [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn arc_color(&self) -> Result<Color, String> {
        Color::new(self.arc_color.as_deref().unwrap_or(DEFAULT_ARC_COLOR))
            .map_err(|err| format!("Invalid arc color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_parse() {
        let style = StyleConfig::default();

        assert_eq!(style.background_color(), Ok(None));
        assert!(style.line_color().is_ok());
        assert!(style.arc_color().is_ok());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style = StyleConfig::new(None, Some("not-a-color".to_string()), None);

        let err = style.line_color().unwrap_err();
        assert!(err.contains("line color"));
    }

    #[test]
    fn test_layout_config_engine() {
        assert_eq!(LayoutConfig::default().engine(), LayoutEngine::Basic);
        assert_eq!(
            LayoutConfig::new(LayoutEngine::Contour).engine(),
            LayoutEngine::Contour
        );
    }
}
