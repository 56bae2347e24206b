//! Structured logging re-exports.
//!
//! With the `tracing` feature enabled, the usual `tracing` macros are
//! available as `scrollwin_core::debug!` and friends so host crates do not
//! need their own `tracing` dependency to match the core's target names.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Tracing target used by every span and event the core emits.
pub const TARGET: &str = "scrollwin";
