//! Declarative breadcrumb configuration.
//!
//! [`BreadcrumbConfig`] holds every plain-data setting of the control and can
//! be loaded from TOML. Templates and styles are referenced by resource key
//! and resolved against the control's [`ResourceDictionary`] when the
//! configuration is applied.
//!
//! ```toml
//! home_text = "Start"
//! display_path = "name"
//! separator = ">"
//! overflow_text = "..."
//! spacing = 2.0
//! item_template = "FolderTemplate"
//! ```
//!
//! [`ResourceDictionary`]: crate::resources::ResourceDictionary

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BreadcrumbError, Result};
use crate::resources::Icon;

/// Default separator text.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default overflow marker text.
pub const DEFAULT_OVERFLOW: &str = "\u{2026}";

/// Plain-data configuration of a breadcrumb control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Text shown on the home element. Takes precedence over templates.
    pub home_text: Option<String>,
    /// Icon bound to the default home template.
    pub home_icon: Icon,
    /// Display path evaluated against each item.
    pub display_path: Option<String>,
    /// Separator text.
    pub separator: String,
    /// Overflow marker text.
    pub overflow_text: String,
    /// Space between visible trail elements.
    pub spacing: f32,
    /// Resource key of the home template.
    pub home_template: Option<String>,
    /// Resource key of the item template.
    pub item_template: Option<String>,
    /// Resource key of the separator template.
    pub separator_template: Option<String>,
    /// Resource key of the overflow template.
    pub overflow_template: Option<String>,
    /// Resource key of the item container style.
    pub item_style: Option<String>,
    /// Resource key of the home container style.
    pub home_style: Option<String>,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_text: None,
            home_icon: Icon::home(),
            display_path: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            overflow_text: DEFAULT_OVERFLOW.to_string(),
            spacing: 0.0,
            home_template: None,
            item_template: None,
            separator_template: None,
            overflow_template: None,
            item_style: None,
            home_style: None,
        }
    }
}

impl BreadcrumbConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| BreadcrumbError::io(path, source))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BreadcrumbConfig::default();
        assert_eq!(config.separator, "/");
        assert_eq!(config.overflow_text, "\u{2026}");
        assert_eq!(config.home_icon, Icon::home());
        assert!(config.home_text.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BreadcrumbConfig::from_toml_str(
            r#"
            display_path = "name"
            separator = ">"
            home_icon = "folder-home"
            "#,
        )
        .unwrap();

        assert_eq!(config.display_path.as_deref(), Some("name"));
        assert_eq!(config.separator, ">");
        assert_eq!(config.home_icon.name(), "folder-home");
        assert_eq!(config.overflow_text, DEFAULT_OVERFLOW);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BreadcrumbConfig::from_toml_str("spacing = \"wide\"").unwrap_err();
        assert!(matches!(err, BreadcrumbError::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "home_text = \"Start\"\nspacing = 2.5").unwrap();

        let config = BreadcrumbConfig::load(file.path()).unwrap();
        assert_eq!(config.home_text.as_deref(), Some("Start"));
        assert_eq!(config.spacing, 2.5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = BreadcrumbConfig::load("/nonexistent/breadcrumb.toml").unwrap_err();
        assert!(matches!(err, BreadcrumbError::Io { .. }));
    }
}
