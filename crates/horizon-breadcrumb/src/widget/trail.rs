//! Trail elements and the fitted trail.
//!
//! A [`Trail`] is the flat, ordered element list a layout pass produces:
//!
//! ```text
//! Home  Separator  Item  Separator  Item  ...
//! ```
//!
//! Item buttons may be shown as overflow markers, and item/separator pairs
//! may be collapsed. Collapsed elements stay in the list so positions remain
//! stable for click dispatch.

use crate::resources::{Icon, Style, Template};

use super::metrics::{ElementVisual, TrailMetrics};

/// Whether an element takes part in rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Rendered and measured.
    #[default]
    Visible,
    /// Kept in the trail but not rendered.
    Collapsed,
}

/// The role of a trail element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The leading home button.
    Home,
    /// A glyph between two buttons.
    Separator,
    /// An item button showing its item.
    Item,
    /// An item button showing the overflow marker.
    Overflow,
}

/// Data a template is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum DataContext<T> {
    /// The template is not bound to any data.
    None,
    /// The home icon.
    Icon(Icon),
    /// A breadcrumb item.
    Item(T),
}

/// What an element shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent<T> {
    /// Plain text.
    Text(String),
    /// A template instantiated with a data context.
    Template {
        template: Template,
        data: DataContext<T>,
    },
}

impl<T> ElementContent<T> {
    /// Returns the measurable view of this content.
    pub fn visual(&self) -> ElementVisual<'_> {
        match self {
            ElementContent::Text(text) => ElementVisual::Text(text),
            ElementContent::Template { template, .. } => ElementVisual::Template(template),
        }
    }
}

/// The item behind an item button, and its index in the item list at the
/// time the trail was built.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBinding<T> {
    pub index: usize,
    pub item: T,
}

/// One element of a trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailElement<T> {
    kind: ElementKind,
    binding: Option<ItemBinding<T>>,
    content: ElementContent<T>,
    style: Option<Style>,
    visibility: Visibility,
}

impl<T> TrailElement<T> {
    pub(crate) fn home(content: ElementContent<T>, style: Style) -> Self {
        Self {
            kind: ElementKind::Home,
            binding: None,
            content,
            style: Some(style),
            visibility: Visibility::Visible,
        }
    }

    pub(crate) fn separator(content: ElementContent<T>) -> Self {
        Self {
            kind: ElementKind::Separator,
            binding: None,
            content,
            style: None,
            visibility: Visibility::Visible,
        }
    }

    pub(crate) fn item_button(
        binding: ItemBinding<T>,
        content: ElementContent<T>,
        style: Style,
    ) -> Self {
        Self {
            kind: ElementKind::Item,
            binding: Some(binding),
            content,
            style: Some(style),
            visibility: Visibility::Visible,
        }
    }

    /// Returns the element's role.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns what the element shows.
    pub fn content(&self) -> &ElementContent<T> {
        &self.content
    }

    /// Returns the container style, if the element is a button.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Returns the element's visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` unless the element is collapsed.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Returns `true` for item buttons, whether or not they show the
    /// overflow marker.
    pub fn is_item_button(&self) -> bool {
        matches!(self.kind, ElementKind::Item | ElementKind::Overflow)
    }

    /// Returns the item behind an item button.
    pub fn item(&self) -> Option<&T> {
        self.binding.as_ref().map(|b| &b.item)
    }

    /// Returns the item index recorded when the trail was built.
    pub fn item_index(&self) -> Option<usize> {
        self.binding.as_ref().map(|b| b.index)
    }

    /// Returns a short text describing the content: the text itself, the
    /// bound icon's name for icon templates, or the template name.
    pub fn label(&self) -> &str {
        match &self.content {
            ElementContent::Text(text) => text,
            ElementContent::Template {
                data: DataContext::Icon(icon),
                ..
            } => icon.name(),
            ElementContent::Template { template, .. } => template.name(),
        }
    }

    /// Returns the width `metrics` reports for this element, or zero when
    /// collapsed.
    pub fn measure(&self, metrics: &dyn TrailMetrics) -> f32 {
        if self.is_visible() {
            metrics.measure(self.content.visual(), self.style.as_ref())
        } else {
            0.0
        }
    }

    pub(crate) fn show_overflow(&mut self, content: ElementContent<T>) {
        if self.is_item_button() {
            self.kind = ElementKind::Overflow;
            self.content = content;
        }
    }

    pub(crate) fn collapse(&mut self) {
        self.visibility = Visibility::Collapsed;
    }
}

/// A fitted breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<T> {
    elements: Vec<TrailElement<T>>,
    available_width: f32,
    rendered_width: f32,
}

impl<T> Trail<T> {
    pub(crate) fn new(
        elements: Vec<TrailElement<T>>,
        available_width: f32,
        rendered_width: f32,
    ) -> Self {
        Self {
            elements,
            available_width,
            rendered_width,
        }
    }

    /// Returns all elements in document order, collapsed ones included.
    pub fn elements(&self) -> &[TrailElement<T>] {
        &self.elements
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: usize) -> Option<&TrailElement<T>> {
        self.elements.get(position)
    }

    /// Returns the number of elements, collapsed ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the trail has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = &TrailElement<T>> {
        self.elements.iter()
    }

    /// Returns the labels of the visible elements in order.
    pub fn labels(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.is_visible())
            .map(TrailElement::label)
            .collect()
    }

    /// Returns the width the trail was fitted to.
    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    /// Returns the measured width of the visible elements.
    pub fn rendered_width(&self) -> f32 {
        self.rendered_width
    }

    /// Returns `true` if the rendered width does not exceed the available
    /// width.
    pub fn fits(&self) -> bool {
        self.rendered_width <= self.available_width
    }

    /// Returns the number of item buttons showing the overflow marker.
    pub fn overflow_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Overflow)
            .count()
    }

    /// Returns the number of collapsed item buttons.
    pub fn collapsed_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.is_item_button() && !e.is_visible())
            .count()
    }
}

/// Measures the visible elements of `elements` with spacing between them.
pub fn measure_elements<T>(
    elements: &[TrailElement<T>],
    metrics: &dyn TrailMetrics,
    spacing: f32,
) -> f32 {
    let (width, visible) = elements
        .iter()
        .filter(|e| e.is_visible())
        .fold((0.0_f32, 0_usize), |(width, count), e| {
            (width + e.measure(metrics), count + 1)
        });
    width + spacing * visible.saturating_sub(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::metrics::TextMetrics;

    fn text<T>(s: &str) -> ElementContent<T> {
        ElementContent::Text(s.to_string())
    }

    fn sample() -> Vec<TrailElement<&'static str>> {
        vec![
            TrailElement::home(text("Home"), Style::new("button")),
            TrailElement::separator(text("/")),
            TrailElement::item_button(
                ItemBinding {
                    index: 0,
                    item: "a",
                },
                text("a"),
                Style::new("button"),
            ),
        ]
    }

    #[test]
    fn test_measure_adds_spacing_between_visible() {
        let metrics = TextMetrics::new(10.0);
        let mut elements = sample();
        assert_eq!(measure_elements(&elements, &metrics, 2.0), 40.0 + 10.0 + 10.0 + 4.0);

        elements[2].collapse();
        elements[1].collapse();
        assert_eq!(measure_elements(&elements, &metrics, 2.0), 40.0);
    }

    #[test]
    fn test_overflow_keeps_binding() {
        let mut elements = sample();
        elements[2].show_overflow(text("\u{2026}"));

        assert_eq!(elements[2].kind(), ElementKind::Overflow);
        assert_eq!(elements[2].label(), "\u{2026}");
        assert_eq!(elements[2].item(), Some(&"a"));
        assert_eq!(elements[2].item_index(), Some(0));
    }

    #[test]
    fn test_overflow_ignored_for_non_buttons() {
        let mut elements = sample();
        elements[1].show_overflow(text("\u{2026}"));
        assert_eq!(elements[1].kind(), ElementKind::Separator);
        assert_eq!(elements[1].label(), "/");
    }

    #[test]
    fn test_trail_counts() {
        let mut elements = sample();
        elements[2].show_overflow(text("\u{2026}"));
        let trail = Trail::new(elements, 100.0, 50.0);

        assert!(trail.fits());
        assert_eq!(trail.overflow_count(), 1);
        assert_eq!(trail.collapsed_count(), 0);
        assert_eq!(trail.labels(), vec!["Home", "/", "\u{2026}"]);
    }

    #[test]
    fn test_icon_template_label() {
        let home = TrailElement::<()>::home(
            ElementContent::Template {
                template: Template::new("BreadcrumbHome", 16.0),
                data: DataContext::Icon(Icon::home()),
            },
            Style::new("button"),
        );
        assert_eq!(home.label(), "home");
    }
}
