//! Templates, styles and the resource dictionary.
//!
//! The breadcrumb control never draws anything itself. It decides *which*
//! template or text each trail element shows and which container style wraps
//! it; the host renders templates by name. Defaults come from a
//! [`ResourceDictionary`] under the well-known keys [`HOME_TEMPLATE_KEY`] and
//! [`BUTTON_STYLE_KEY`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BreadcrumbError, Result};

/// Key of the built-in template used for the home element when neither a
/// home text nor a home template is set. It is bound to the home icon.
pub const HOME_TEMPLATE_KEY: &str = "BreadcrumbHome";

/// Key of the built-in container style for home and item buttons.
pub const BUTTON_STYLE_KEY: &str = "BreadcrumbButtonStyle";

/// A symbolic icon, resolved by the host's icon theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon {
    symbol: String,
}

impl Icon {
    /// Creates an icon for a named symbol.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The default home icon.
    pub fn home() -> Self {
        Self::symbol("home")
    }

    /// Returns the symbol name.
    pub fn name(&self) -> &str {
        &self.symbol
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// A named visual template.
///
/// `width` is the template's natural rendered width in logical pixels, which
/// the stock metrics use when measuring the trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    width: f32,
}

impl Template {
    /// Creates a template.
    pub fn new(name: impl Into<String>, width: f32) -> Self {
        Self {
            name: name.into(),
            width: width.max(0.0),
        }
    }

    /// Returns the template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the natural width of the template.
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A container style for home and item buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    name: String,
    /// Horizontal padding on each side of the content.
    padding: f32,
    /// Minimum width of the styled element.
    min_width: f32,
}

impl Style {
    /// Creates a style with no padding.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            padding: 0.0,
            min_width: 0.0,
        }
    }

    /// Sets the horizontal padding using builder pattern.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the minimum width using builder pattern.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width.max(0.0);
        self
    }

    /// Returns the style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the horizontal padding on each side.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the minimum width.
    pub fn min_width(&self) -> f32 {
        self.min_width
    }
}

/// Name-keyed lookup of templates and styles.
#[derive(Debug, Clone, Default)]
pub struct ResourceDictionary {
    templates: HashMap<String, Template>,
    styles: HashMap<String, Style>,
}

impl ResourceDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary holding the built-in home template and button
    /// style.
    pub fn builtin() -> Self {
        let mut dictionary = Self::new();
        dictionary.insert_template(HOME_TEMPLATE_KEY, Template::new(HOME_TEMPLATE_KEY, 16.0));
        dictionary.insert_style(BUTTON_STYLE_KEY, Style::new(BUTTON_STYLE_KEY).with_padding(4.0));
        dictionary
    }

    /// Adds or replaces a template.
    pub fn insert_template(&mut self, key: impl Into<String>, template: Template) {
        self.templates.insert(key.into(), template);
    }

    /// Adds or replaces a style.
    pub fn insert_style(&mut self, key: impl Into<String>, style: Style) {
        self.styles.insert(key.into(), style);
    }

    /// Looks up a template.
    pub fn template(&self, key: &str) -> Result<Template> {
        self.templates
            .get(key)
            .cloned()
            .ok_or_else(|| BreadcrumbError::resource_not_found(key))
    }

    /// Looks up a style.
    pub fn style(&self, key: &str) -> Result<Style> {
        self.styles
            .get(key)
            .cloned()
            .ok_or_else(|| BreadcrumbError::resource_not_found(key))
    }

    /// Returns `true` if a template or style is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key) || self.styles.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_resolve() {
        let resources = ResourceDictionary::builtin();
        assert_eq!(resources.template(HOME_TEMPLATE_KEY).unwrap().name(), HOME_TEMPLATE_KEY);
        assert_eq!(resources.style(BUTTON_STYLE_KEY).unwrap().padding(), 4.0);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let resources = ResourceDictionary::new();
        let err = resources.template(HOME_TEMPLATE_KEY).unwrap_err();
        assert!(matches!(err, BreadcrumbError::ResourceNotFound { ref key } if key == HOME_TEMPLATE_KEY));
        assert!(resources.style("Missing").is_err());
    }

    #[test]
    fn test_insert_replaces() {
        let mut resources = ResourceDictionary::builtin();
        resources.insert_template(HOME_TEMPLATE_KEY, Template::new("house", 24.0));

        assert_eq!(resources.template(HOME_TEMPLATE_KEY).unwrap().width(), 24.0);
        assert!(resources.contains(BUTTON_STYLE_KEY));
        assert!(!resources.contains("chevron"));
    }

    #[test]
    fn test_negative_sizes_are_clamped() {
        assert_eq!(Template::new("t", -3.0).width(), 0.0);
        let style = Style::new("s").with_padding(-1.0).with_min_width(-2.0);
        assert_eq!(style.padding(), 0.0);
        assert_eq!(style.min_width(), 0.0);
    }
}
