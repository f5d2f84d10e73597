//! Horizon Breadcrumb - a data-bound breadcrumb trail control.
//!
//! The control shows a home element followed by one button per item,
//! separated by separator glyphs. Items come from an [`ItemSource`]; sources
//! that report changes (such as [`ObservableList`]) are mirrored
//! incrementally. After every change the trail is refitted to the available
//! width: items turn into overflow markers from the first one forward, and
//! item/separator pairs are collapsed when that is not enough.
//!
//! Rendering is left to the host. The control decides which text or template
//! each element shows, measures elements through [`TrailMetrics`] and reports
//! the result on the `trail_changed` signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_breadcrumb::prelude::*;
//!
//! let folders = Arc::new(ObservableList::new(vec![
//!     "Folder 1".to_string(),
//!     "Folder 2".to_string(),
//!     "Folder 3".to_string(),
//! ]));
//!
//! let breadcrumb = Breadcrumb::new();
//! breadcrumb.set_items_source(folders.clone()).unwrap();
//! breadcrumb.set_available_width(1000.0).unwrap();
//!
//! let trail = breadcrumb.trail().unwrap();
//! assert_eq!(
//!     trail.labels(),
//!     vec!["home", "/", "Folder 1", "/", "Folder 2", "/", "Folder 3"]
//! );
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod resources;
pub mod widget;

pub use horizon_breadcrumb_core::{ConnectionId, PerfSpan, Property, Signal, logging};

pub use command::{Command, RelayCommand};
pub use config::BreadcrumbConfig;
pub use error::{BreadcrumbError, Result};
pub use model::{ChangeAction, CollectionChange, ItemSource, ObservableList, TrailItem};
pub use resources::{Icon, ResourceDictionary, Style, Template};
pub use widget::{Breadcrumb, ItemSelected, SyncFailure, Trail, TrailMetrics};
