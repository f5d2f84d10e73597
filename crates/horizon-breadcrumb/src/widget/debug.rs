//! Text rendering of fitted trails for logs and terminals.
//!
//! ```
//! use horizon_breadcrumb::widget::{TrailDebug, TrailFormatOptions, TrailStyle};
//!
//! let debug = TrailDebug::with_options(TrailFormatOptions {
//!     style: TrailStyle::Ascii,
//!     ..TrailFormatOptions::default()
//! });
//! # let _ = debug;
//! ```

use super::trail::{ElementKind, Trail, TrailElement};

/// Marker characters used when rendering a trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailStyle {
    /// `[button]`, `(collapsed)`.
    Ascii,
    /// `⟦button⟧`, `⸨collapsed⸩`.
    #[default]
    Unicode,
}

impl TrailStyle {
    fn button(self) -> (&'static str, &'static str) {
        match self {
            TrailStyle::Ascii => ("[", "]"),
            TrailStyle::Unicode => ("\u{27E6}", "\u{27E7}"),
        }
    }

    fn collapsed(self) -> (&'static str, &'static str) {
        match self {
            TrailStyle::Ascii => ("(", ")"),
            TrailStyle::Unicode => ("\u{2E28}", "\u{2E29}"),
        }
    }
}

/// Configuration for trail debug output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFormatOptions {
    /// Marker characters.
    pub style: TrailStyle,
    /// Whether collapsed elements are rendered.
    pub show_hidden: bool,
    /// Whether rendered and available widths are appended.
    pub show_widths: bool,
}

impl Default for TrailFormatOptions {
    fn default() -> Self {
        Self {
            style: TrailStyle::default(),
            show_hidden: false,
            show_widths: true,
        }
    }
}

impl TrailFormatOptions {
    /// Options showing everything.
    pub fn detailed() -> Self {
        Self {
            show_hidden: true,
            ..Default::default()
        }
    }

    /// Options showing only what would be rendered.
    pub fn minimal() -> Self {
        Self {
            show_hidden: false,
            show_widths: false,
            ..Default::default()
        }
    }
}

/// Renders a [`Trail`] as a single line of text.
#[derive(Debug, Clone, Default)]
pub struct TrailDebug {
    options: TrailFormatOptions,
}

impl TrailDebug {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: TrailFormatOptions) -> Self {
        Self { options }
    }

    /// Formats `trail`.
    pub fn format<T>(&self, trail: &Trail<T>) -> String {
        let parts: Vec<String> = trail
            .iter()
            .filter(|e| e.is_visible() || self.options.show_hidden)
            .map(|e| self.format_element(e))
            .collect();

        let mut output = parts.join(" ");
        if self.options.show_widths {
            output.push_str(&format!(
                "  ({}/{})",
                trail.rendered_width(),
                trail.available_width()
            ));
        }
        output
    }

    fn format_element<T>(&self, element: &TrailElement<T>) -> String {
        let (open, close) = if !element.is_visible() {
            self.options.style.collapsed()
        } else if element.kind() == ElementKind::Separator {
            ("", "")
        } else {
            self.options.style.button()
        };
        format!("{open}{}{close}", element.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceDictionary;
    use crate::widget::{TextMetrics, TrailSettings, fit_trail};

    fn trail(width: f32) -> Trail<&'static str> {
        fit_trail(
            &["a", "b", "c"],
            &TrailSettings::default(),
            &ResourceDictionary::builtin(),
            &TextMetrics::new(10.0),
            width,
        )
        .unwrap()
    }

    #[test]
    fn test_ascii_minimal() {
        let debug = TrailDebug::with_options(TrailFormatOptions {
            style: TrailStyle::Ascii,
            ..TrailFormatOptions::minimal()
        });
        assert_eq!(debug.format(&trail(1000.0)), "[home] / [a] / [b] / [c]");
    }

    #[test]
    fn test_hidden_and_widths() {
        // home 24, each pair 10 + 18; hiding one pair drops to 80.
        let debug = TrailDebug::with_options(TrailFormatOptions {
            style: TrailStyle::Ascii,
            ..TrailFormatOptions::detailed()
        });
        assert_eq!(
            debug.format(&trail(80.0)),
            "[home] (/) (\u{2026}) / [\u{2026}] / [c]  (80/80)"
        );
    }

    #[test]
    fn test_unicode_markers() {
        let debug = TrailDebug::with_options(TrailFormatOptions::minimal());
        assert!(debug.format(&trail(1000.0)).starts_with("\u{27E6}home\u{27E7}"));
    }
}
