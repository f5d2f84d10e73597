//! The breadcrumb control and its layout machinery.
//!
//! - [`Breadcrumb`]: the control, owning items, settings and the fitted trail
//! - [`fit_trail`]: the pure layout function behind every layout pass
//! - [`Trail`] / [`TrailElement`]: the layout result
//! - [`TrailMetrics`]: the measurement seam, with [`TextMetrics`] as default
//! - [`TrailDebug`]: one-line text rendering of a trail

mod breadcrumb;
mod debug;
mod fitter;
mod metrics;
mod trail;

pub use breadcrumb::{Breadcrumb, ItemSelected, SyncFailure};
pub use debug::{TrailDebug, TrailFormatOptions, TrailStyle};
pub use fitter::{TrailSettings, fit_trail};
pub use metrics::{DEFAULT_ADVANCE, ElementVisual, TextMetrics, TrailMetrics};
pub use trail::{
    DataContext, ElementContent, ElementKind, ItemBinding, Trail, TrailElement, Visibility,
    measure_elements,
};
