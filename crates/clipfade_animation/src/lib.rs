//! Animation clip selection for skinned characters.
//!
//! - [`ClipRegistry`]: the fixed set of named clips for one character
//! - [`ClipController`]: keeps one clip active and cross-fades on change
//! - [`BindingHost`]: the external runtime that applies weights to the rig

pub mod clip;
pub mod controller;
pub mod host;
pub mod playback;
pub mod registry;
pub mod settings;

pub use clip::{AnimationClip, LoopMode};
pub use controller::ClipController;
pub use host::BindingHost;
pub use playback::{ActivePlayback, ClipWeight, Fade, PlaybackPhase};
pub use registry::{ClipHandle, ClipRegistry};
pub use settings::{ControllerSettings, DEFAULT_FADE_DURATION};
