//! Error types for the breadcrumb control.

use std::path::PathBuf;

/// Result type alias for breadcrumb operations.
pub type Result<T> = std::result::Result<T, BreadcrumbError>;

/// Errors that can occur while synchronizing, laying out or configuring a
/// breadcrumb trail.
#[derive(Debug, thiserror::Error)]
pub enum BreadcrumbError {
    /// A change notification named an action that is not add, move, remove,
    /// replace or reset.
    #[error("Unrecognized collection change action '{action}'")]
    UnrecognizedAction { action: String },

    /// A move notification covered more than one element.
    #[error("Moving {count} elements at once is not supported, only single-element moves are")]
    UnsupportedMove { count: usize },

    /// A change notification referenced a position outside the item list.
    #[error("Index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A template or style key has no entry in the resource dictionary.
    #[error("Resource '{key}' not found")]
    ResourceNotFound { key: String },

    /// A click targeted a trail position that does not exist.
    #[error("No trail element at position {position} (trail has {len} elements)")]
    NoSuchElement { position: usize, len: usize },

    /// The configuration file could not be parsed.
    #[error("Invalid breadcrumb configuration: {source}")]
    Config {
        #[source]
        source: toml::de::Error,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BreadcrumbError {
    /// Create an unrecognized-action error.
    pub fn unrecognized_action(action: impl Into<String>) -> Self {
        Self::UnrecognizedAction {
            action: action.into(),
        }
    }

    /// Create a missing-resource error.
    pub fn resource_not_found(key: impl Into<String>) -> Self {
        Self::ResourceNotFound { key: key.into() }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for BreadcrumbError {
    fn from(source: toml::de::Error) -> Self {
        Self::Config { source }
    }
}
