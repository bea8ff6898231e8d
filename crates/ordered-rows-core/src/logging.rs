//! Logging facilities for ordered-rows.
//!
//! ordered-rows uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("ordered_rows=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted with one of the [`targets`] below so subsystems can
//! be filtered independently, e.g. `RUST_LOG=ordered_rows::store=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "ordered_rows_core::signal";
    /// Sorted list store target.
    pub const STORE: &str = "ordered_rows::store";
    /// View-model target.
    pub const VIEW_MODEL: &str = "ordered_rows::view_model";
    /// Configuration loading target.
    pub const CONFIG: &str = "ordered_rows::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "ordered_rows::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
