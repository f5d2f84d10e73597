//! Data side of the breadcrumb control.
//!
//! - `ItemSource`: where the control reads its items from
//! - `CollectionChange`: incremental change reported by a notifying source
//! - `ObservableList`: the stock notifying source
//! - `bind_display_text`: display-path binding for item text
//!
//! ```text
//! ┌────────────────┐  CollectionChange  ┌────────────┐  fit_trail  ┌───────┐
//! │ ObservableList │───────────────────>│ Breadcrumb │────────────>│ Trail │
//! │  (ItemSource)  │                    │ item list  │             │       │
//! └────────────────┘                    └────────────┘             └───────┘
//! ```

mod binding;
mod observable_list;
mod source;

pub use binding::bind_display_text;
pub use observable_list::ObservableList;
pub use source::{ChangeAction, ChangeListener, CollectionChange, ItemSource};

use serde::Serialize;

/// Bound satisfied by any type usable as a breadcrumb item.
///
/// Items are compared by equality (for removals and click lookups) and read
/// through their serde data model (for display paths).
pub trait TrailItem: Serialize + Clone + PartialEq + Send + Sync + 'static {}

impl<T> TrailItem for T where T: Serialize + Clone + PartialEq + Send + Sync + 'static {}
