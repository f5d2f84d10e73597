//! The breadcrumb control.
//!
//! [`Breadcrumb`] mirrors an item source into its own item list, fits a
//! [`Trail`] to the available width after every change and dispatches clicks
//! on trail elements to signals and commands.
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
//! ]));
//!
//! let breadcrumb = Breadcrumb::new();
//! breadcrumb.item_selected().connect(|selected: &ItemSelected<String>| {
//!     println!("{} at {}", selected.item, selected.index);
//! });
//! breadcrumb.set_items_source(folders.clone()).unwrap();
//! breadcrumb.set_available_width(400.0).unwrap();
//!
//! folders.push("Folder 3".to_string());
//! assert_eq!(breadcrumb.items().len(), 3);
//! ```
//!
//! # Signals
//!
//! - `home_selected()`: the home element was clicked
//! - `item_selected()`: an item button was clicked
//! - `trail_changed()`: a layout pass produced a new trail
//! - `sync_failed()`: a change from the attached source could not be applied

use std::fmt;
use std::sync::{Arc, Weak};

use horizon_breadcrumb_core::logging::targets;
use horizon_breadcrumb_core::{ConnectionId, Property, Signal};
use parking_lot::{Mutex, RwLock};

use crate::command::Command;
use crate::config::BreadcrumbConfig;
use crate::error::{BreadcrumbError, Result};
use crate::model::{ChangeAction, CollectionChange, ItemSource, TrailItem};
use crate::resources::{Icon, ResourceDictionary, Style, Template};

use super::fitter::{TrailSettings, fit_trail};
use super::metrics::{TextMetrics, TrailMetrics};
use super::trail::{ElementKind, Trail};

/// Payload of [`Breadcrumb::item_selected`] and of the item command.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSelected<T> {
    /// The clicked item.
    pub item: T,
    /// The item's position in the item list at click time.
    pub index: usize,
}

/// Payload of [`Breadcrumb::sync_failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    /// The kind of change that failed.
    pub action: ChangeAction,
    /// The error, rendered as text.
    pub message: String,
}

struct AttachedSource<T> {
    source: Arc<dyn ItemSource<T>>,
    subscription: Option<ConnectionId>,
}

enum ClickTarget<T> {
    Home,
    Item(T),
    Ignored,
}

struct BreadcrumbState<T: TrailItem> {
    items: RwLock<Vec<T>>,
    source: Mutex<Option<AttachedSource<T>>>,
    trail: RwLock<Option<Trail<T>>>,
    available_width: Property<Option<f32>>,
    settings: Property<TrailSettings>,
    resources: RwLock<ResourceDictionary>,
    metrics: RwLock<Arc<dyn TrailMetrics>>,
    home_command: RwLock<Option<Arc<dyn Command<()>>>>,
    item_command: RwLock<Option<Arc<dyn Command<ItemSelected<T>>>>>,

    home_selected: Signal<()>,
    item_selected: Signal<ItemSelected<T>>,
    trail_changed: Signal<Trail<T>>,
    sync_failed: Signal<SyncFailure>,
}

impl<T: TrailItem> BreadcrumbState<T> {
    fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            source: Mutex::new(None),
            trail: RwLock::new(None),
            available_width: Property::new(None),
            settings: Property::new(TrailSettings::default()),
            resources: RwLock::new(ResourceDictionary::builtin()),
            metrics: RwLock::new(Arc::new(TextMetrics::default())),
            home_command: RwLock::new(None),
            item_command: RwLock::new(None),
            home_selected: Signal::new(),
            item_selected: Signal::new(),
            trail_changed: Signal::new(),
            sync_failed: Signal::new(),
        }
    }

    fn detach_source(&self) {
        let Some(attached) = self.source.lock().take() else {
            return;
        };
        if let Some(id) = attached.subscription {
            let removed = attached.source.unsubscribe(id);
            tracing::debug!(target: targets::SYNC, removed, "detached from item source");
        }
    }

    fn apply_change(&self, change: &CollectionChange<T>) -> Result<()> {
        {
            let mut items = self.items.write();
            let len = items.len();
            match change {
                CollectionChange::Added { index, items: batch } => {
                    if *index > len {
                        return Err(BreadcrumbError::IndexOutOfRange { index: *index, len });
                    }
                    for (offset, item) in batch.iter().enumerate() {
                        items.insert(index + offset, item.clone());
                    }
                }
                CollectionChange::Moved {
                    from,
                    to,
                    items: moved,
                } => {
                    if moved.len() != 1 {
                        return Err(BreadcrumbError::UnsupportedMove { count: moved.len() });
                    }
                    if let Some(&index) = [*from, *to].iter().find(|&&i| i >= len) {
                        return Err(BreadcrumbError::IndexOutOfRange { index, len });
                    }
                    let item = items.remove(*from);
                    items.insert(*to, item);
                }
                CollectionChange::Removed { items: removed, .. } => {
                    for item in removed {
                        match items.iter().position(|i| i == item) {
                            Some(position) => {
                                items.remove(position);
                            }
                            None => {
                                tracing::debug!(target: targets::SYNC, "removed item not present, ignoring");
                            }
                        }
                    }
                }
                CollectionChange::Replaced { index, .. } => {
                    tracing::warn!(
                        target: targets::SYNC,
                        index,
                        "replace notifications are not applied to the item list"
                    );
                }
                CollectionChange::Reset => items.clear(),
            }
            tracing::debug!(
                target: targets::SYNC,
                action = %change.action(),
                len = items.len(),
                "applied source change"
            );
        }
        self.update_layout()
    }

    fn on_source_changed(&self, change: &CollectionChange<T>) {
        if let Err(err) = self.apply_change(change) {
            tracing::error!(
                target: targets::SYNC,
                action = %change.action(),
                error = %err,
                "failed to apply source change"
            );
            self.sync_failed.emit(SyncFailure {
                action: change.action(),
                message: err.to_string(),
            });
        }
    }

    fn update_layout(&self) -> Result<()> {
        let Some(width) = self.available_width.get() else {
            tracing::trace!(target: targets::LAYOUT, "no available width yet, skipping layout");
            return Ok(());
        };

        let trail = {
            let items = self.items.read();
            let resources = self.resources.read();
            let metrics = self.metrics.read().clone();
            self.settings
                .with(|settings| fit_trail(&items, settings, &resources, metrics.as_ref(), width))?
        };

        *self.trail.write() = Some(trail.clone());
        self.trail_changed.emit(trail);
        Ok(())
    }

    fn update_settings<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut TrailSettings),
    {
        let mut settings = self.settings.get();
        f(&mut settings);
        if self.settings.set(settings) {
            self.update_layout()
        } else {
            Ok(())
        }
    }

    fn select_home(&self) {
        tracing::debug!(target: targets::INPUT, "home selected");
        self.home_selected.emit(());

        let command = self.home_command.read().clone();
        if let Some(command) = command {
            if command.can_execute() {
                command.execute(&());
            } else {
                tracing::debug!(target: targets::INPUT, "home command not executable");
            }
        }
    }

    fn select_item(&self, item: T) {
        let index = self.items.read().iter().position(|i| *i == item);
        let Some(index) = index else {
            tracing::warn!(target: targets::INPUT, "clicked item is no longer in the list");
            return;
        };

        tracing::debug!(target: targets::INPUT, index, "item selected");
        let selected = ItemSelected { item, index };
        self.item_selected.emit(selected.clone());

        let command = self.item_command.read().clone();
        if let Some(command) = command {
            if command.can_execute() {
                command.execute(&selected);
            } else {
                tracing::debug!(target: targets::INPUT, index, "item command not executable");
            }
        }
    }
}

impl<T: TrailItem> Drop for BreadcrumbState<T> {
    fn drop(&mut self) {
        self.detach_source();
    }
}

/// A breadcrumb trail control.
///
/// The control owns its item list and the last fitted trail. Layout runs
/// after every item change, setting change and width change, once a width
/// has been set with [`set_available_width`](Self::set_available_width).
pub struct Breadcrumb<T: TrailItem> {
    state: Arc<BreadcrumbState<T>>,
}

impl<T: TrailItem> Default for Breadcrumb<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TrailItem> Breadcrumb<T> {
    /// Creates a control with no items, the built-in resources and
    /// [`TextMetrics`].
    pub fn new() -> Self {
        Self {
            state: Arc::new(BreadcrumbState::new()),
        }
    }

    /// Sets the resource dictionary using builder pattern.
    pub fn with_resources(self, resources: ResourceDictionary) -> Self {
        *self.state.resources.write() = resources;
        self
    }

    /// Sets the resolved settings using builder pattern.
    ///
    /// No layout pass runs; one happens once a width is set.
    pub fn with_settings(self, settings: TrailSettings) -> Self {
        self.state.settings.set_silent(TrailSettings {
            spacing: settings.spacing.max(0.0),
            ..settings
        });
        self
    }

    /// Sets the element metrics using builder pattern.
    pub fn with_metrics(self, metrics: impl TrailMetrics + 'static) -> Self {
        *self.state.metrics.write() = Arc::new(metrics);
        self
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted when the home element is clicked.
    pub fn home_selected(&self) -> &Signal<()> {
        &self.state.home_selected
    }

    /// Emitted when an item button is clicked.
    pub fn item_selected(&self) -> &Signal<ItemSelected<T>> {
        &self.state.item_selected
    }

    /// Emitted after every successful layout pass.
    pub fn trail_changed(&self) -> &Signal<Trail<T>> {
        &self.state.trail_changed
    }

    /// Emitted when a change reported by the attached source fails.
    pub fn sync_failed(&self) -> &Signal<SyncFailure> {
        &self.state.sync_failed
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Attaches an item source.
    ///
    /// The previous source is detached first. The item list is rebuilt from
    /// the new source's snapshot and, if the source reports changes, kept in
    /// sync from then on.
    pub fn set_items_source(&self, source: Arc<dyn ItemSource<T>>) -> Result<()> {
        self.state.detach_source();

        *self.state.items.write() = source.snapshot();

        let weak: Weak<BreadcrumbState<T>> = Arc::downgrade(&self.state);
        let subscription = source.subscribe(Box::new(move |change| {
            if let Some(state) = weak.upgrade() {
                state.on_source_changed(change);
            }
        }));
        tracing::debug!(
            target: targets::SYNC,
            notifies = subscription.is_some(),
            len = self.state.items.read().len(),
            "attached item source"
        );

        *self.state.source.lock() = Some(AttachedSource {
            source,
            subscription,
        });
        self.state.update_layout()
    }

    /// Detaches the item source and empties the item list.
    pub fn clear_items_source(&self) -> Result<()> {
        self.state.detach_source();
        self.state.items.write().clear();
        self.state.update_layout()
    }

    /// Returns the attached item source.
    pub fn items_source(&self) -> Option<Arc<dyn ItemSource<T>>> {
        self.state.source.lock().as_ref().map(|a| a.source.clone())
    }

    /// Returns `true` if the attached source reports changes.
    pub fn is_subscribed(&self) -> bool {
        self.state
            .source
            .lock()
            .as_ref()
            .is_some_and(|a| a.subscription.is_some())
    }

    /// Returns a copy of the item list.
    pub fn items(&self) -> Vec<T> {
        self.state.items.read().clone()
    }

    /// Applies a single change to the item list and re-runs layout.
    ///
    /// Changes from an attached source arrive here automatically. On error
    /// the item list is left unchanged.
    pub fn apply_change(&self, change: &CollectionChange<T>) -> Result<()> {
        self.state.apply_change(change)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Returns the last fitted trail.
    pub fn trail(&self) -> Option<Trail<T>> {
        self.state.trail.read().clone()
    }

    /// Returns the width the control lays out against.
    pub fn available_width(&self) -> Option<f32> {
        self.state.available_width.get()
    }

    /// Sets the available width, re-running layout if it changed.
    pub fn set_available_width(&self, width: f32) -> Result<()> {
        let width = width.max(0.0);
        match self.state.available_width.replace(Some(width)) {
            Some(previous) => {
                tracing::debug!(target: targets::LAYOUT, ?previous, width, "available width changed");
                self.state.update_layout()
            }
            None => Ok(()),
        }
    }

    /// Runs `f` with `trail_changed` blocked, then lays out once.
    ///
    /// Use this to change several settings with a single notification.
    /// Nested calls only lay out when the outermost one finishes.
    pub fn batch_update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&Self) -> Result<()>,
    {
        let signal = &self.state.trail_changed;
        let outermost = !signal.is_blocked();
        signal.set_blocked(true);
        let outcome = f(self);
        if outermost {
            signal.set_blocked(false);
        }
        outcome?;
        if outermost {
            self.state.update_layout()
        } else {
            Ok(())
        }
    }

    /// Re-runs layout. Does nothing until a width has been set.
    ///
    /// If layout fails the previous trail stays in place.
    pub fn update_layout(&self) -> Result<()> {
        self.state.update_layout()
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Returns the resolved settings.
    pub fn settings(&self) -> TrailSettings {
        self.state.settings.get()
    }

    /// Replaces the resource dictionary and re-runs layout.
    pub fn set_resources(&self, resources: ResourceDictionary) -> Result<()> {
        *self.state.resources.write() = resources;
        self.state.update_layout()
    }

    /// Replaces the element metrics and re-runs layout.
    pub fn set_metrics(&self, metrics: Arc<dyn TrailMetrics>) -> Result<()> {
        *self.state.metrics.write() = metrics;
        self.state.update_layout()
    }

    /// Applies a configuration, resolving its resource keys against the
    /// control's resource dictionary.
    ///
    /// Nothing changes if a key does not resolve.
    pub fn apply_config(&self, config: &BreadcrumbConfig) -> Result<()> {
        let settings = {
            let resources = self.state.resources.read();
            let template = |key: &Option<String>| -> Result<Option<Template>> {
                key.as_deref().map(|k| resources.template(k)).transpose()
            };
            let style = |key: &Option<String>| -> Result<Option<Style>> {
                key.as_deref().map(|k| resources.style(k)).transpose()
            };
            TrailSettings {
                home_icon: config.home_icon.clone(),
                home_text: config.home_text.clone(),
                home_template: template(&config.home_template)?,
                home_style: style(&config.home_style)?,
                display_path: config.display_path.clone(),
                item_template: template(&config.item_template)?,
                item_style: style(&config.item_style)?,
                separator: config.separator.clone(),
                separator_template: template(&config.separator_template)?,
                overflow_text: config.overflow_text.clone(),
                overflow_template: template(&config.overflow_template)?,
                spacing: config.spacing.max(0.0),
            }
        };
        self.state.update_settings(|current| *current = settings)
    }

    /// Sets the home icon.
    pub fn set_home_icon(&self, icon: Icon) -> Result<()> {
        self.state.update_settings(|s| s.home_icon = icon)
    }

    /// Sets the home text. A non-empty text takes precedence over templates.
    pub fn set_home_text(&self, text: Option<String>) -> Result<()> {
        self.state.update_settings(|s| s.home_text = text)
    }

    /// Sets the home template.
    pub fn set_home_template(&self, template: Option<Template>) -> Result<()> {
        self.state.update_settings(|s| s.home_template = template)
    }

    /// Sets the home container style.
    pub fn set_home_style(&self, style: Option<Style>) -> Result<()> {
        self.state.update_settings(|s| s.home_style = style)
    }

    /// Sets the display path used when no item template is set.
    pub fn set_display_path(&self, path: Option<String>) -> Result<()> {
        self.state.update_settings(|s| s.display_path = path)
    }

    /// Sets the item template.
    pub fn set_item_template(&self, template: Option<Template>) -> Result<()> {
        self.state.update_settings(|s| s.item_template = template)
    }

    /// Sets the item container style.
    pub fn set_item_style(&self, style: Option<Style>) -> Result<()> {
        self.state.update_settings(|s| s.item_style = style)
    }

    /// Sets the separator text.
    pub fn set_separator(&self, separator: impl Into<String>) -> Result<()> {
        let separator = separator.into();
        self.state.update_settings(|s| s.separator = separator)
    }

    /// Sets the separator template.
    pub fn set_separator_template(&self, template: Option<Template>) -> Result<()> {
        self.state.update_settings(|s| s.separator_template = template)
    }

    /// Sets the overflow marker text.
    pub fn set_overflow_text(&self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.state.update_settings(|s| s.overflow_text = text)
    }

    /// Sets the overflow marker template.
    pub fn set_overflow_template(&self, template: Option<Template>) -> Result<()> {
        self.state.update_settings(|s| s.overflow_template = template)
    }

    /// Sets the space between visible elements.
    pub fn set_spacing(&self, spacing: f32) -> Result<()> {
        self.state.update_settings(|s| s.spacing = spacing.max(0.0))
    }

    /// Sets the command run when the home element is clicked.
    pub fn set_home_command(&self, command: Option<Arc<dyn Command<()>>>) {
        *self.state.home_command.write() = command;
    }

    /// Sets the command run when an item button is clicked.
    pub fn set_item_command(&self, command: Option<Arc<dyn Command<ItemSelected<T>>>>) {
        *self.state.item_command.write() = command;
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatches a click on the trail element at `position`.
    ///
    /// Clicks on separators and collapsed elements are ignored.
    pub fn click(&self, position: usize) -> Result<()> {
        let target = {
            let trail = self.state.trail.read();
            let len = trail.as_ref().map_or(0, Trail::len);
            let element = trail
                .as_ref()
                .and_then(|t| t.get(position))
                .ok_or(BreadcrumbError::NoSuchElement { position, len })?;

            if !element.is_visible() {
                tracing::debug!(target: targets::INPUT, position, "click on collapsed element ignored");
                ClickTarget::Ignored
            } else {
                match (element.kind(), element.item()) {
                    (ElementKind::Home, _) => ClickTarget::Home,
                    (ElementKind::Item | ElementKind::Overflow, Some(item)) => {
                        ClickTarget::Item(item.clone())
                    }
                    _ => ClickTarget::Ignored,
                }
            }
        };

        match target {
            ClickTarget::Home => self.state.select_home(),
            ClickTarget::Item(item) => self.state.select_item(item),
            ClickTarget::Ignored => {}
        }
        Ok(())
    }

    /// Clicks the home element.
    pub fn click_home(&self) {
        self.state.select_home();
    }

    /// Clicks the item at `index` in the item list.
    ///
    /// The reported index is the position of the first equal item.
    pub fn click_item(&self, index: usize) -> Result<()> {
        let item = {
            let items = self.state.items.read();
            items
                .get(index)
                .cloned()
                .ok_or(BreadcrumbError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?
        };
        self.state.select_item(item);
        Ok(())
    }
}

impl<T: TrailItem> fmt::Debug for Breadcrumb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breadcrumb")
            .field("items", &self.state.items.read().len())
            .field("available_width", &self.state.available_width.get())
            .field("subscribed", &self.is_subscribed())
            .field("settings", &self.state.settings)
            .finish()
    }
}

static_assertions::assert_impl_all!(Breadcrumb<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RelayCommand;
    use crate::model::ObservableList;
    use crate::resources::BUTTON_STYLE_KEY;

    fn folders() -> Vec<String> {
        vec!["Folder 1".into(), "Folder 2".into(), "Folder 3".into()]
    }

    fn control() -> Breadcrumb<String> {
        let breadcrumb = Breadcrumb::new().with_metrics(TextMetrics::new(10.0));
        breadcrumb.set_items_source(Arc::new(folders())).unwrap();
        breadcrumb.set_available_width(1000.0).unwrap();
        breadcrumb
    }

    #[test]
    fn test_no_layout_without_width() {
        let breadcrumb = Breadcrumb::<String>::new();
        breadcrumb.set_items_source(Arc::new(folders())).unwrap();
        assert!(breadcrumb.trail().is_none());

        breadcrumb.set_available_width(500.0).unwrap();
        assert_eq!(breadcrumb.trail().unwrap().len(), 7);
    }

    #[test]
    fn test_add_out_of_range_leaves_items() {
        let breadcrumb = control();
        let err = breadcrumb
            .apply_change(&CollectionChange::Added {
                index: 9,
                items: vec!["x".into()],
            })
            .unwrap_err();
        assert!(matches!(err, BreadcrumbError::IndexOutOfRange { index: 9, len: 3 }));
        assert_eq!(breadcrumb.items(), folders());
    }

    #[test]
    fn test_multi_move_is_unsupported() {
        let breadcrumb = control();
        let err = breadcrumb
            .apply_change(&CollectionChange::Moved {
                from: 0,
                to: 1,
                items: vec!["Folder 1".into(), "Folder 2".into()],
            })
            .unwrap_err();
        assert!(matches!(err, BreadcrumbError::UnsupportedMove { count: 2 }));

        let err = breadcrumb
            .apply_change(&CollectionChange::Moved {
                from: 0,
                to: 3,
                items: vec!["Folder 1".into()],
            })
            .unwrap_err();
        assert!(matches!(err, BreadcrumbError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(breadcrumb.items(), folders());
    }

    #[test]
    fn test_remove_by_value_and_replace_gap() {
        let breadcrumb = control();
        breadcrumb
            .apply_change(&CollectionChange::Removed {
                index: 0,
                items: vec!["Folder 2".into(), "Missing".into()],
            })
            .unwrap();
        assert_eq!(breadcrumb.items(), vec!["Folder 1", "Folder 3"]);

        breadcrumb
            .apply_change(&CollectionChange::Replaced {
                index: 0,
                old: vec!["Folder 1".into()],
                new: vec!["Other".into()],
            })
            .unwrap();
        assert_eq!(breadcrumb.items(), vec!["Folder 1", "Folder 3"]);
    }

    #[test]
    fn test_remove_duplicate_takes_first_match() {
        let breadcrumb = Breadcrumb::<String>::new();
        breadcrumb
            .set_items_source(Arc::new(vec!["A".to_string(), "B".into(), "A".into()]))
            .unwrap();

        // The source removed its trailing "A"; lookup by value finds the first.
        breadcrumb
            .apply_change(&CollectionChange::Removed {
                index: 2,
                items: vec!["A".into()],
            })
            .unwrap();
        assert_eq!(breadcrumb.items(), vec!["B", "A"]);
    }

    #[test]
    fn test_negative_spacing_in_config_is_clamped() {
        let breadcrumb = control();
        breadcrumb.set_available_width(100.0).unwrap();

        let config = BreadcrumbConfig::from_toml_str("spacing = -50.0").unwrap();
        breadcrumb.apply_config(&config).unwrap();

        assert_eq!(breadcrumb.settings().spacing, 0.0);
        let unspaced = control();
        unspaced.set_available_width(100.0).unwrap();
        assert_eq!(breadcrumb.trail(), unspaced.trail());
    }

    #[test]
    fn test_with_settings_defers_layout() {
        let settings = TrailSettings {
            separator: ">".into(),
            spacing: -3.0,
            ..TrailSettings::default()
        };
        let breadcrumb = Breadcrumb::<String>::new()
            .with_metrics(TextMetrics::new(10.0))
            .with_settings(settings);
        breadcrumb.set_items_source(Arc::new(folders())).unwrap();
        assert!(breadcrumb.trail().is_none());
        assert_eq!(breadcrumb.settings().spacing, 0.0);

        breadcrumb.set_available_width(1000.0).unwrap();
        assert_eq!(breadcrumb.trail().unwrap().labels()[1], ">");
    }

    #[test]
    fn test_batch_update_notifies_once() {
        let breadcrumb = control();
        let passes = Arc::new(Mutex::new(Vec::new()));
        let sink = passes.clone();
        breadcrumb
            .trail_changed()
            .connect(move |trail: &Trail<String>| sink.lock().push(trail.labels()[1].to_string()));

        breadcrumb
            .batch_update(|b| {
                b.set_separator(">")?;
                b.set_spacing(2.0)?;
                b.batch_update(|inner| inner.set_overflow_text("..."))
            })
            .unwrap();

        assert_eq!(*passes.lock(), vec![">"]);
        assert!(!breadcrumb.trail_changed().is_blocked());
    }

    #[test]
    fn test_same_width_does_not_relayout() {
        let breadcrumb = control();
        let passes = Arc::new(Mutex::new(0));
        let counter = passes.clone();
        breadcrumb.trail_changed().connect(move |_| *counter.lock() += 1);

        breadcrumb.set_available_width(1000.0).unwrap();
        breadcrumb.set_available_width(-5.0).unwrap();
        breadcrumb.set_available_width(0.0).unwrap();
        assert_eq!(*passes.lock(), 1);
        assert_eq!(breadcrumb.available_width(), Some(0.0));
    }

    #[test]
    fn test_setters_relayout_only_on_change() {
        let breadcrumb = control();
        let passes = Arc::new(Mutex::new(0));
        let counter = passes.clone();
        breadcrumb.trail_changed().connect(move |_| *counter.lock() += 1);

        breadcrumb.set_separator(">").unwrap();
        breadcrumb.set_separator(">").unwrap();
        breadcrumb.set_available_width(1000.0).unwrap();
        assert_eq!(*passes.lock(), 1);
        assert_eq!(breadcrumb.trail().unwrap().labels()[1], ">");
    }

    #[test]
    fn test_failed_layout_keeps_previous_trail() {
        let breadcrumb = control();
        let before = breadcrumb.trail().unwrap();

        let err = breadcrumb.set_resources(ResourceDictionary::new()).unwrap_err();
        assert!(matches!(err, BreadcrumbError::ResourceNotFound { .. }));
        assert_eq!(breadcrumb.trail().unwrap(), before);
    }

    #[test]
    fn test_apply_config_resolves_keys() {
        let mut resources = ResourceDictionary::builtin();
        resources.insert_template("Folder", Template::new("Folder", 40.0));
        let breadcrumb = control();
        breadcrumb.set_resources(resources).unwrap();

        let config = BreadcrumbConfig {
            item_template: Some("Folder".into()),
            item_style: Some(BUTTON_STYLE_KEY.into()),
            ..BreadcrumbConfig::default()
        };
        breadcrumb.apply_config(&config).unwrap();
        assert_eq!(breadcrumb.trail().unwrap().labels()[2], "Folder");

        let config = BreadcrumbConfig {
            overflow_template: Some("Missing".into()),
            ..config
        };
        assert!(breadcrumb.apply_config(&config).is_err());
        assert!(breadcrumb.settings().overflow_template.is_none());
    }

    #[test]
    fn test_click_dispatch() {
        let breadcrumb = control();
        let selected = Arc::new(Mutex::new(Vec::new()));
        let homes = Arc::new(Mutex::new(0));

        let sel = selected.clone();
        breadcrumb
            .item_selected()
            .connect(move |s: &ItemSelected<String>| sel.lock().push(s.index));
        let home = homes.clone();
        breadcrumb.home_selected().connect(move |_| *home.lock() += 1);

        breadcrumb.click(0).unwrap();
        breadcrumb.click(1).unwrap();
        breadcrumb.click(4).unwrap();
        assert!(matches!(
            breadcrumb.click(7),
            Err(BreadcrumbError::NoSuchElement { position: 7, len: 7 })
        ));

        assert_eq!(*homes.lock(), 1);
        assert_eq!(*selected.lock(), vec![1]);
    }

    #[test]
    fn test_commands_respect_can_execute() {
        let breadcrumb = control();
        let ran = Arc::new(Mutex::new(Vec::new()));

        let log = ran.clone();
        breadcrumb.set_item_command(Some(Arc::new(RelayCommand::new(
            move |s: &ItemSelected<String>| log.lock().push(s.item.clone()),
        ))));
        breadcrumb.set_home_command(Some(Arc::new(
            RelayCommand::new(|_: &()| panic!("disabled command ran")).with_can_execute(|| false),
        )));

        breadcrumb.click_item(1).unwrap();
        breadcrumb.click_home();
        assert_eq!(*ran.lock(), vec!["Folder 2"]);
        assert!(breadcrumb.click_item(5).is_err());
    }

    #[test]
    fn test_source_swap_detaches() {
        let first = Arc::new(ObservableList::new(folders()));
        let second = Arc::new(ObservableList::new(vec!["Other".to_string()]));
        let breadcrumb = control();

        breadcrumb.set_items_source(first.clone()).unwrap();
        assert_eq!(first.changed().connection_count(), 1);
        assert!(breadcrumb.is_subscribed());

        breadcrumb.set_items_source(second.clone()).unwrap();
        assert_eq!(first.changed().connection_count(), 0);
        assert_eq!(second.changed().connection_count(), 1);

        first.push("Folder 4".into());
        assert_eq!(breadcrumb.items(), vec!["Other"]);

        drop(breadcrumb);
        assert_eq!(second.changed().connection_count(), 0);
    }

    #[test]
    fn test_failed_notification_reports_sync_failure() {
        let list = Arc::new(ObservableList::new(folders()));
        let breadcrumb = control();
        breadcrumb.set_items_source(list.clone()).unwrap();

        let failures = Arc::new(Mutex::new(Vec::new()));
        let sink = failures.clone();
        breadcrumb
            .sync_failed()
            .connect(move |f: &SyncFailure| sink.lock().push(f.action));

        // A missing default style makes the layout pass after the change fail.
        breadcrumb
            .set_resources({
                let mut resources = ResourceDictionary::new();
                resources.insert_template(
                    crate::resources::HOME_TEMPLATE_KEY,
                    Template::new("home", 16.0),
                );
                resources
            })
            .unwrap_err();
        list.push("Folder 4".into());

        assert_eq!(*failures.lock(), vec![ChangeAction::Add]);
        assert_eq!(breadcrumb.items().len(), 4);
    }
}
