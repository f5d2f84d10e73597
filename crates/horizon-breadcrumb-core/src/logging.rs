//! Logging facilities for Horizon Breadcrumb.
//!
//! Horizon Breadcrumb uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_breadcrumb=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Root target of the widget crate.
    pub const BREADCRUMB: &str = "horizon_breadcrumb";
    /// Collection synchronization (source changes, subscriptions).
    pub const SYNC: &str = "horizon_breadcrumb::sync";
    /// Layout fitting passes.
    pub const LAYOUT: &str = "horizon_breadcrumb::layout";
    /// Click dispatch and commands.
    pub const INPUT: &str = "horizon_breadcrumb::input";
    /// Signal/slot system.
    pub const SIGNAL: &str = "horizon_breadcrumb_core::signal";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time whole operations such as a layout pass.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_breadcrumb::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
