//! Element measurement.
//!
//! The control does not shape text itself; the host supplies a
//! [`TrailMetrics`] implementation that reports how wide an element would
//! render. [`TextMetrics`] is a monospace approximation that is good enough
//! for tests and terminal output.

use unicode_segmentation::UnicodeSegmentation;

use crate::resources::{Style, Template};

/// The part of an element's content that affects its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementVisual<'a> {
    /// Plain text.
    Text(&'a str),
    /// A template of known natural width.
    Template(&'a Template),
}

/// Reports the rendered width of trail elements.
pub trait TrailMetrics: Send + Sync {
    /// Returns the width of `visual` wrapped in `style`.
    fn measure(&self, visual: ElementVisual<'_>, style: Option<&Style>) -> f32;
}

/// Default per-grapheme advance of [`TextMetrics`].
pub const DEFAULT_ADVANCE: f32 = 8.0;

/// Monospace metrics: every grapheme cluster advances by a fixed width.
///
/// Templates measure as their natural width. Styles add padding on both
/// sides and enforce their minimum width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    advance: f32,
}

impl TextMetrics {
    /// Creates metrics with the given per-grapheme advance.
    pub fn new(advance: f32) -> Self {
        Self {
            advance: advance.max(0.0),
        }
    }

    /// Returns the per-grapheme advance.
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE)
    }
}

impl TrailMetrics for TextMetrics {
    fn measure(&self, visual: ElementVisual<'_>, style: Option<&Style>) -> f32 {
        let content = match visual {
            ElementVisual::Text(text) => text.graphemes(true).count() as f32 * self.advance,
            ElementVisual::Template(template) => template.width(),
        };
        match style {
            Some(style) => (content + 2.0 * style.padding()).max(style.min_width()),
            None => content,
        }
    }
}
