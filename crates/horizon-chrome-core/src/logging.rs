//! Logging facilities for Horizon Chrome.
//!
//! Horizon Chrome uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; applications choose one:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_chrome=debug")
//!         .init();
//! }
//! ```
//!
//! Gesture handling is chatty at `trace` level (one record per pointer
//! move). State transitions such as entering the maximized state, snapping
//! to an edge or locking a resize region are logged at `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_chrome_core::signal";
    /// Chrome controller state transitions.
    pub const CONTROLLER: &str = "horizon_chrome::controller";
    /// Edge snapping.
    pub const SNAP: &str = "horizon_chrome::snap";
    /// Resize gestures.
    pub const RESIZE: &str = "horizon_chrome::resize";
    /// Event routing through the dispatch table.
    pub const DISPATCH: &str = "horizon_chrome::dispatch";
    /// Host (windowing toolkit) integration.
    pub const HOST: &str = "horizon_chrome::host";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_chrome::config";
}

/// Span names used for gesture tracing.
pub mod span_names {
    /// A complete press/move/release gesture.
    pub const GESTURE: &str = "horizon_chrome::gesture";
}

/// Opens a `trace`-level span covering one pointer gesture.
///
/// The returned guard keeps the span entered until dropped.
pub fn gesture_span(kind: &'static str) -> tracing::span::EnteredSpan {
    tracing::trace_span!(target: span_names::GESTURE, "gesture", kind).entered()
}

/// Trace-level log on the given chrome target.
#[macro_export]
macro_rules! chrome_trace {
    ($target:expr, $($arg:tt)*) => {
        tracing::trace!(target: $target, $($arg)*)
    };
}

/// Debug-level log on the given chrome target.
#[macro_export]
macro_rules! chrome_debug {
    ($target:expr, $($arg:tt)*) => {
        tracing::debug!(target: $target, $($arg)*)
    };
}

/// Info-level log on the given chrome target.
#[macro_export]
macro_rules! chrome_info {
    ($target:expr, $($arg:tt)*) => {
        tracing::info!(target: $target, $($arg)*)
    };
}

/// Warn-level log on the given chrome target.
#[macro_export]
macro_rules! chrome_warn {
    ($target:expr, $($arg:tt)*) => {
        tracing::warn!(target: $target, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [
            targets::CONTROLLER,
            targets::SNAP,
            targets::RESIZE,
            targets::DISPATCH,
            targets::HOST,
            targets::CONFIG,
            span_names::GESTURE,
        ] {
            assert!(target.starts_with("horizon_chrome::"), "{target}");
        }
    }

    #[test]
    fn test_gesture_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let span = gesture_span("move");
            assert_eq!(
                span.metadata().map(|meta| meta.target()),
                Some(span_names::GESTURE)
            );
            chrome_debug!(targets::CONTROLLER, value = 1, "inside gesture");
        });
    }
}
