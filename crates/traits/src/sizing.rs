//! Strategies for turning an SVG anchor into a clickable rectangle.

use lootpixel_types::{Rect, SvgAnchor};
use std::fmt::Debug;

/// Computes the clickable region for an anchor on its page.
pub trait AnchorSizer: Send + Sync + Debug {
    fn clickable_rect(&self, anchor: &SvgAnchor) -> Rect;
}

/// The default heuristic: a fixed advance per character of the anchor name
/// and a fixed line height, anchored at the stored `(x, y)`.
///
/// This is a rough estimate, not a measured glyph box.
#[derive(Debug, Clone, Copy)]
pub struct NameLengthSizer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for NameLengthSizer {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 20.0,
        }
    }
}

impl AnchorSizer for NameLengthSizer {
    fn clickable_rect(&self, anchor: &SvgAnchor) -> Rect {
        let chars = anchor.name().chars().count() as f32;
        Rect::new(
            anchor.element.x,
            anchor.element.y,
            chars * self.char_width,
            self.line_height,
        )
    }
}

/// Uses the extent recorded when the SVG was imported.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredExtentSizer;

impl AnchorSizer for StoredExtentSizer {
    fn clickable_rect(&self, anchor: &SvgAnchor) -> Rect {
        anchor.element.rect()
    }
}
