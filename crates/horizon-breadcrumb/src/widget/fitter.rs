//! The layout fitter.
//!
//! [`fit_trail`] turns an item list into a [`Trail`] that fits a given
//! width. It rebuilds the trail from scratch on every call:
//!
//! 1. Home, then a separator and an item button per item.
//! 2. While the trail is too wide, item buttons become overflow markers from
//!    the first one forward, never the last.
//! 3. If that is not enough, the first visible item button and the first
//!    visible separator are collapsed, repeatedly.
//! 4. When nothing is left to collapse the trail is accepted as is.

use horizon_breadcrumb_core::PerfSpan;
use horizon_breadcrumb_core::logging::targets;

use crate::config::{DEFAULT_OVERFLOW, DEFAULT_SEPARATOR};
use crate::error::Result;
use crate::model::{TrailItem, bind_display_text};
use crate::resources::{
    BUTTON_STYLE_KEY, HOME_TEMPLATE_KEY, Icon, ResourceDictionary, Style, Template,
};

use super::metrics::TrailMetrics;
use super::trail::{
    DataContext, ElementContent, ElementKind, ItemBinding, Trail, TrailElement, measure_elements,
};

/// Resolved settings for a layout pass.
///
/// Unlike [`BreadcrumbConfig`](crate::config::BreadcrumbConfig) this holds
/// templates and styles themselves rather than resource keys.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSettings {
    pub home_icon: Icon,
    pub home_text: Option<String>,
    pub home_template: Option<Template>,
    pub home_style: Option<Style>,
    pub display_path: Option<String>,
    pub item_template: Option<Template>,
    pub item_style: Option<Style>,
    pub separator: String,
    pub separator_template: Option<Template>,
    pub overflow_text: String,
    pub overflow_template: Option<Template>,
    pub spacing: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            home_icon: Icon::home(),
            home_text: None,
            home_template: None,
            home_style: None,
            display_path: None,
            item_template: None,
            item_style: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_template: None,
            overflow_text: DEFAULT_OVERFLOW.to_string(),
            overflow_template: None,
            spacing: 0.0,
        }
    }
}

/// Builds the trail for `items` and collapses it until it fits
/// `available_width`.
///
/// Fails with [`ResourceNotFound`](crate::BreadcrumbError::ResourceNotFound)
/// when a default template or style is needed but missing from `resources`.
pub fn fit_trail<T: TrailItem>(
    items: &[T],
    settings: &TrailSettings,
    resources: &ResourceDictionary,
    metrics: &dyn TrailMetrics,
    available_width: f32,
) -> Result<Trail<T>> {
    let _span = PerfSpan::new("fit_trail");

    let mut elements = Vec::with_capacity(items.len() * 2 + 1);
    elements.push(home_element(settings, resources)?);

    if !items.is_empty() {
        let item_style = match &settings.item_style {
            Some(style) => style.clone(),
            None => resources.style(BUTTON_STYLE_KEY)?,
        };
        for (index, item) in items.iter().enumerate() {
            elements.push(TrailElement::separator(separator_content(settings)));
            elements.push(TrailElement::item_button(
                ItemBinding {
                    index,
                    item: item.clone(),
                },
                item_content(item, settings),
                item_style.clone(),
            ));
        }
    }

    let mut rendered = measure_elements(&elements, metrics, settings.spacing);
    let natural = rendered;

    let buttons: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_item_button())
        .map(|(position, _)| position)
        .collect();
    let mut cursor = 0;

    while rendered > available_width {
        if cursor + 1 < buttons.len() {
            let position = buttons[cursor];
            let content = overflow_content(&elements[position], settings);
            elements[position].show_overflow(content);
            cursor += 1;
        } else {
            let Some(button) = elements
                .iter()
                .position(|e| e.is_item_button() && e.is_visible())
            else {
                tracing::debug!(
                    target: targets::LAYOUT,
                    rendered,
                    available_width,
                    "nothing left to collapse, accepting trail"
                );
                break;
            };
            elements[button].collapse();
            if let Some(separator) = elements
                .iter()
                .position(|e| e.kind() == ElementKind::Separator && e.is_visible())
            {
                elements[separator].collapse();
            }
        }
        rendered = measure_elements(&elements, metrics, settings.spacing);
    }

    tracing::debug!(
        target: targets::LAYOUT,
        items = items.len(),
        natural,
        rendered,
        available_width,
        overflowed = cursor,
        "trail fitted"
    );

    Ok(Trail::new(elements, available_width, rendered))
}

fn home_element<T>(settings: &TrailSettings, resources: &ResourceDictionary) -> Result<TrailElement<T>> {
    let content = match (&settings.home_text, &settings.home_template) {
        (Some(text), _) if !text.is_empty() => ElementContent::Text(text.clone()),
        (_, Some(template)) => ElementContent::Template {
            template: template.clone(),
            data: DataContext::None,
        },
        _ => ElementContent::Template {
            template: resources.template(HOME_TEMPLATE_KEY)?,
            data: DataContext::Icon(settings.home_icon.clone()),
        },
    };
    let style = match &settings.home_style {
        Some(style) => style.clone(),
        None => resources.style(BUTTON_STYLE_KEY)?,
    };
    Ok(TrailElement::home(content, style))
}

fn separator_content<T>(settings: &TrailSettings) -> ElementContent<T> {
    match &settings.separator_template {
        Some(template) => ElementContent::Template {
            template: template.clone(),
            data: DataContext::None,
        },
        None => ElementContent::Text(settings.separator.clone()),
    }
}

fn item_content<T: TrailItem>(item: &T, settings: &TrailSettings) -> ElementContent<T> {
    match &settings.item_template {
        Some(template) => ElementContent::Template {
            template: template.clone(),
            data: DataContext::Item(item.clone()),
        },
        None => ElementContent::Text(bind_display_text(item, settings.display_path.as_deref())),
    }
}

fn overflow_content<T: Clone>(element: &TrailElement<T>, settings: &TrailSettings) -> ElementContent<T> {
    match &settings.overflow_template {
        Some(template) => ElementContent::Template {
            template: template.clone(),
            data: element
                .item()
                .cloned()
                .map_or(DataContext::None, DataContext::Item),
        },
        None => ElementContent::Text(settings.overflow_text.clone()),
    }
}
