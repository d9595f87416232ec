//! Fixed box and badge metrics.
//!
//! Text is measured with a monospace heuristic: every character counts as
//! [`CHAR_WIDTH`] units regardless of glyph.

use arbor_core::{
    geometry::Size,
    tree::{Feature, Node},
};

/// Narrowest box drawn for any node
pub const MIN_BOX_WIDTH: f32 = 40.0;
/// Width of one character of label or feature text
pub const CHAR_WIDTH: f32 = 8.0;
/// Horizontal padding added to a box's text width
pub const BOX_PADDING: f32 = 16.0;
/// Height of every node box
pub const BOX_HEIGHT: f32 = 30.0;
/// Horizontal gap between sibling subtrees
pub const H_GAP: f32 = 20.0;
/// Vertical gap between depth levels
pub const V_GAP: f32 = 40.0;

/// Horizontal padding added to a badge's text width
pub const BADGE_PADDING: f32 = 8.0;
/// Height of a feature badge
pub const BADGE_HEIGHT: f32 = 14.0;
/// Space between adjacent badges on one box
pub const BADGE_SPACING: f32 = 4.0;

/// Size of the box drawn for `node`.
///
/// Only the node's own label and features count; children never widen the
/// box itself.
pub fn box_size(node: &Node) -> Size {
    box_size_for(node.label(), node.feature_text_len())
}

pub(crate) fn box_size_for(label: &str, feature_text_len: usize) -> Size {
    let chars = label.chars().count() + feature_text_len;
    let width = CHAR_WIDTH.mul_add(chars as f32, BOX_PADDING).max(MIN_BOX_WIDTH);
    Size::new(width, BOX_HEIGHT)
}

/// Size of the badge drawn for `feature`.
pub fn badge_size(feature: &Feature) -> Size {
    let width = CHAR_WIDTH.mul_add(feature.text_len() as f32, BADGE_PADDING);
    Size::new(width, BADGE_HEIGHT)
}

/// Top edge of the boxes at `depth`; the root is at depth 0.
pub fn level_y(depth: usize) -> f32 {
    depth as f32 * (BOX_HEIGHT + V_GAP)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use arbor_core::tree::Sign;

    use super::*;

    #[test]
    fn test_short_labels_use_minimum_width() {
        let size = box_size(&Node::new("D"));
        assert!(approx_eq!(f32, size.width(), MIN_BOX_WIDTH));
        assert!(approx_eq!(f32, size.height(), BOX_HEIGHT));
    }

    #[test]
    fn test_box_width_counts_label_and_features() {
        // "CP" + "+WH" = 5 chars
        let node = Node::new("CP").with_feature(Feature::new(Sign::Plus, "WH"));
        assert!(approx_eq!(f32, box_size(&node).width(), 56.0));
    }

    #[test]
    fn test_box_width_counts_characters_not_bytes() {
        let node = Node::new("äöüäöü");
        assert!(approx_eq!(f32, box_size(&node).width(), 64.0));
    }

    #[test]
    fn test_badge_size() {
        let size = badge_size(&Feature::new(Sign::Minus, "Q"));
        assert!(approx_eq!(f32, size.width(), 24.0));
        assert!(approx_eq!(f32, size.height(), BADGE_HEIGHT));
    }

    #[test]
    fn test_level_y() {
        assert!(approx_eq!(f32, level_y(0), 0.0));
        assert!(approx_eq!(f32, level_y(2), 140.0));
    }
}
