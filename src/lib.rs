#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! # clipfade
//!
//! Cross-fading animation clip selector for skinned characters.
//!
//! Given a symbolic animation name, [`ClipController`] keeps exactly one
//! clip active on a character, fades the previous clip out while the new
//! one fades in, and releases clips once their fade-out completes or the
//! controller is disposed.
//!
//! ```rust,ignore
//! use clipfade::prelude::*;
//!
//! let registry = ClipRegistry::from_clips([
//!     AnimationClip::new("idle", 2.0),
//!     AnimationClip::new("clapping", 1.2),
//! ])?;
//!
//! let mut controller = ClipController::headless(registry, ControllerSettings::default());
//! controller.select("idle")?;
//! controller.tick(0.5);
//! controller.select("clapping")?;
//! ```

pub mod animation {
    pub use clipfade_animation::*;
}

pub mod errors {
    pub use clipfade_core::errors::*;
}

pub mod time {
    pub use clipfade_core::time::*;
}

pub use animation::{
    AnimationClip, BindingHost, ClipController, ClipRegistry, ClipWeight, ControllerSettings,
    LoopMode, PlaybackPhase,
};
pub use errors::{AnimationError, Result};
pub use time::FrameClock;

pub mod prelude {
    pub use crate::animation::{
        AnimationClip, BindingHost, ClipController, ClipRegistry, ClipWeight, ControllerSettings,
        LoopMode, PlaybackPhase,
    };
    pub use crate::errors::{AnimationError, Result};
    pub use crate::time::FrameClock;
}
