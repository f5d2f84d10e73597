//! Item sources and change notifications.
//!
//! An [`ItemSource`] is anything the breadcrumb control can read its items
//! from. Sources that change over time can additionally accept a change
//! listener; the control then applies each [`CollectionChange`] to its own
//! copy of the items instead of re-reading the whole source.

use std::fmt;
use std::str::FromStr;

use horizon_breadcrumb_core::ConnectionId;

use crate::error::BreadcrumbError;

/// Callback invoked by a notifying source after each mutation.
pub type ChangeListener<T> = Box<dyn Fn(&CollectionChange<T>) + Send + Sync>;

/// The kind of a collection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// Elements were inserted.
    Add,
    /// Elements changed position.
    Move,
    /// Elements were removed.
    Remove,
    /// Elements were replaced in place.
    Replace,
    /// The collection was cleared or changed drastically.
    Reset,
}

impl ChangeAction {
    /// Returns the lowercase name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeAction::Add => "add",
            ChangeAction::Move => "move",
            ChangeAction::Remove => "remove",
            ChangeAction::Replace => "replace",
            ChangeAction::Reset => "reset",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeAction {
    type Err = BreadcrumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(ChangeAction::Add),
            "move" => Ok(ChangeAction::Move),
            "remove" => Ok(ChangeAction::Remove),
            "replace" => Ok(ChangeAction::Replace),
            "reset" => Ok(ChangeAction::Reset),
            _ => Err(BreadcrumbError::unrecognized_action(s)),
        }
    }
}

/// A single change reported by a notifying item source.
///
/// Indices refer to positions in the source *before* the change for
/// `Moved::from`, `Removed` and `Replaced`, and *after* it for `Added` and
/// `Moved::to`.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionChange<T> {
    /// `items` were inserted starting at `index`.
    Added { index: usize, items: Vec<T> },
    /// `items` moved from `from` to `to`.
    Moved { from: usize, to: usize, items: Vec<T> },
    /// `items` were removed, the first of them at `index`.
    Removed { index: usize, items: Vec<T> },
    /// `old` was replaced by `new` starting at `index`.
    Replaced { index: usize, old: Vec<T>, new: Vec<T> },
    /// The collection was cleared.
    Reset,
}

impl<T> CollectionChange<T> {
    /// Returns the kind of this change.
    pub fn action(&self) -> ChangeAction {
        match self {
            CollectionChange::Added { .. } => ChangeAction::Add,
            CollectionChange::Moved { .. } => ChangeAction::Move,
            CollectionChange::Removed { .. } => ChangeAction::Remove,
            CollectionChange::Replaced { .. } => ChangeAction::Replace,
            CollectionChange::Reset => ChangeAction::Reset,
        }
    }
}

/// A source of breadcrumb items.
///
/// Only [`snapshot`](ItemSource::snapshot) is required. Sources that change
/// over time override [`subscribe`](ItemSource::subscribe) and
/// [`unsubscribe`](ItemSource::unsubscribe); the control never assumes a
/// subscription goes away on its own and always unsubscribes explicitly.
pub trait ItemSource<T>: Send + Sync {
    /// Returns the current contents of the source, in order.
    fn snapshot(&self) -> Vec<T>;

    /// Registers a change listener.
    ///
    /// Returns `None` when the source does not report changes.
    fn subscribe(&self, _listener: ChangeListener<T>) -> Option<ConnectionId> {
        None
    }

    /// Removes a listener previously registered with `subscribe`.
    ///
    /// Returns `true` if the listener was found.
    fn unsubscribe(&self, _id: ConnectionId) -> bool {
        false
    }
}

/// A fixed list of items that never reports changes.
impl<T: Clone + Send + Sync> ItemSource<T> for Vec<T> {
    fn snapshot(&self) -> Vec<T> {
        self.clone()
    }
}
