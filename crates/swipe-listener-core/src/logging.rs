//! Logging facilities for swipe-listener.
//!
//! swipe-listener uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("swipe_listener=debug")
//!     .init();
//! ```
//!
//! Sample recording and event emission log at `trace`, classification
//! outcomes and listener lifecycle changes at `debug`.

/// Span names used throughout swipe-listener for tracing.
pub mod span_names {
    /// Pointer event handling span.
    pub const HANDLE: &str = "swipe_listener::handle";
    /// Signal emission span.
    pub const SIGNAL: &str = "swipe_listener::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "swipe_listener_core::signal";
    /// Listener lifecycle and event emission target.
    pub const LISTENER: &str = "swipe_listener::listener";
    /// Direction classification target.
    pub const CLASSIFIER: &str = "swipe_listener::classifier";
    /// Configuration loading target.
    pub const CONFIG: &str = "swipe_listener::config";
}
