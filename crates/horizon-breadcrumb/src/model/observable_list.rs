//! Observable list implementation.
//!
//! `ObservableList<T>` is a list that reports every mutation as a
//! [`CollectionChange`]. It is the usual item source for a breadcrumb whose
//! path changes while the control is on screen.

use horizon_breadcrumb_core::{ConnectionId, Signal};
use parking_lot::RwLock;

use super::source::{ChangeListener, CollectionChange, ItemSource};

/// A list that emits a change notification for each mutation.
///
/// The notification is emitted after the internal lock is released, so
/// listeners may read the list. Mutating the list from inside a listener is
/// the caller's responsibility: the nested change is delivered before the
/// outer emission finishes.
///
/// # Example
///
/// ```
/// use horizon_breadcrumb::model::{CollectionChange, ObservableList};
///
/// let folders = ObservableList::new(vec!["Folder 1".to_string()]);
/// folders.changed().connect(|change| {
///     if let CollectionChange::Added { index, .. } = change {
///         println!("inserted at {index}");
///     }
/// });
/// folders.push("Folder 2".to_string());
/// assert_eq!(folders.len(), 2);
/// ```
pub struct ObservableList<T> {
    items: RwLock<Vec<T>>,
    changed: Signal<CollectionChange<T>>,
}

impl<T: Clone + Send + Sync + 'static> ObservableList<T> {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            changed: Signal::new(),
        }
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the change notification signal.
    pub fn changed(&self) -> &Signal<CollectionChange<T>> {
        &self.changed
    }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a read guard over the items.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        let index = {
            let mut items = self.items.write();
            items.push(item.clone());
            items.len() - 1
        };
        self.changed.emit(CollectionChange::Added {
            index,
            items: vec![item],
        });
    }

    /// Inserts an item at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index > len()`.
    pub fn insert(&self, index: usize, item: T) -> bool {
        self.extend_at(index, vec![item])
    }

    /// Inserts a batch of items starting at `index`, as one change.
    ///
    /// Returns `false` (and changes nothing) if `index > len()`.
    pub fn extend_at(&self, index: usize, batch: Vec<T>) -> bool {
        {
            let mut items = self.items.write();
            if index > items.len() {
                return false;
            }
            items.splice(index..index, batch.iter().cloned());
        }
        if !batch.is_empty() {
            self.changed.emit(CollectionChange::Added {
                index,
                items: batch,
            });
        }
        true
    }

    /// Removes and returns the item at `index`.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            if index >= items.len() {
                return None;
            }
            items.remove(index)
        };
        self.changed.emit(CollectionChange::Removed {
            index,
            items: vec![removed.clone()],
        });
        Some(removed)
    }

    /// Moves the item at `from` so that it ends up at `to`.
    ///
    /// Returns `false` if either index is out of range.
    pub fn move_item(&self, from: usize, to: usize) -> bool {
        let moved = {
            let mut items = self.items.write();
            if from >= items.len() || to >= items.len() {
                return false;
            }
            let item = items.remove(from);
            items.insert(to, item.clone());
            item
        };
        self.changed.emit(CollectionChange::Moved {
            from,
            to,
            items: vec![moved],
        });
        true
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace(&self, index: usize, item: T) -> Option<T> {
        let old = {
            let mut items = self.items.write();
            let slot = items.get_mut(index)?;
            std::mem::replace(slot, item.clone())
        };
        self.changed.emit(CollectionChange::Replaced {
            index,
            old: vec![old.clone()],
            new: vec![item],
        });
        Some(old)
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.changed.emit(CollectionChange::Reset);
    }

    /// Replaces the whole contents.
    ///
    /// Reported as a reset followed by a single insertion of the new items.
    pub fn set_items(&self, new_items: Vec<T>) {
        *self.items.write() = new_items.clone();
        self.changed.emit(CollectionChange::Reset);
        if !new_items.is_empty() {
            self.changed.emit(CollectionChange::Added {
                index: 0,
                items: new_items,
            });
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ObservableList<T> {
    /// Removes the first item equal to `item`.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove_item(&self, item: &T) -> bool {
        let position = self.items.read().iter().position(|i| i == item);
        match position {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> ItemSource<T> for ObservableList<T> {
    fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }

    fn subscribe(&self, listener: ChangeListener<T>) -> Option<ConnectionId> {
        Some(self.changed.connect(move |change| listener(change)))
    }

    fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.changed.disconnect(id)
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &*self.items.read())
            .field("listeners", &self.changed.connection_count())
            .finish()
    }
}
