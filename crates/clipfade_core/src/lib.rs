//! Core types shared by the clipfade crates.
//!
//! - [`errors`]: [`AnimationError`] and the crate-wide [`Result`] alias
//! - [`time`]: [`FrameClock`] for producing per-frame `delta_time`

pub mod errors;
pub mod time;

pub use errors::{AnimationError, Result};
pub use time::{ClockMode, FrameClock};
