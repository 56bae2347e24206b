#![forbid(unsafe_code)]

//! Windowing core for bidirectional infinite-scroll lists.
//!
//! # Role
//! `scrollwin-core` renders an arbitrarily large numbered list through a
//! bounded window of two row blocks. It decides which page to load next in
//! either direction, produces page contents deterministically, and tells the
//! host how to paint the two blocks and how far to translate them.
//!
//! # Primary responsibilities
//! - **SequenceSource**: pure page generator keyed by `(seed, page)`.
//! - **PageCursor**: edge events to page requests, with the reversal skip.
//! - **WindowBuffer**: double buffer plus accumulated offset.
//! - **InfiniteScrollList**: the coordinator the host calls.
//!
//! The rendering surface, the edge-trigger mechanism, and input validation
//! belong to the host and meet the core through [`list::RenderSurface`] and
//! the three coordinator calls.

pub mod config;
pub mod cursor;
pub mod error;
pub mod list;
pub mod logging;
pub mod sequence;
pub mod window;

pub use config::{ListConfig, SeedPolicy};
pub use cursor::{CursorPhase, CursorState, Direction, PageCursor, PageDescriptor};
pub use error::{ListError, Result};
pub use list::{InfiniteScrollList, NullSurface, RenderSurface};
pub use sequence::{DataChunk, Item, SequenceSource};
pub use window::{Block, RenderInstruction, ViewState, WindowBuffer};

// Re-export tracing macros at crate root for hosts without their own tracing dependency.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
