#![forbid(unsafe_code)]

//! Command-line host for `scrollwin-core`.
//!
//! Plays the collaborators the core leaves to its host: total-count
//! validation, an edge-event source, and a slot-based rendering surface.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod script;
pub mod surface;

pub use cli::{Cli, Commands, run};
pub use error::{DemoError, Result};
