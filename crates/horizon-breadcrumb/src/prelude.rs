//! Prelude module for Horizon Breadcrumb.
//!
//! ```
//! use horizon_breadcrumb::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_breadcrumb_core::{ConnectionId, Property, Signal};

// ============================================================================
// Control
// ============================================================================

pub use crate::command::{Command, RelayCommand};
pub use crate::config::BreadcrumbConfig;
pub use crate::error::BreadcrumbError;
pub use crate::widget::{
    Breadcrumb, ElementKind, ItemSelected, SyncFailure, TextMetrics, Trail, TrailDebug,
    TrailElement, TrailMetrics,
};

// ============================================================================
// Data
// ============================================================================

pub use crate::model::{ChangeAction, CollectionChange, ItemSource, ObservableList, TrailItem};
pub use crate::resources::{Icon, ResourceDictionary, Style, Template};
