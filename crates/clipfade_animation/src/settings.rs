//! Controller Settings
//!
//! Fade timing for [`ClipController`](crate::controller::ClipController).
//!
//! ```rust,ignore
//! use clipfade::animation::ControllerSettings;
//!
//! // Defaults: 0.5s fade-in, 0.5s fade-out
//! let settings = ControllerSettings::default();
//!
//! // Snappier exit
//! let settings = ControllerSettings::default().with_fade_out(0.2);
//! ```

use serde::{Deserialize, Serialize};

/// Default fade-in and fade-out duration, in seconds.
pub const DEFAULT_FADE_DURATION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Time for a newly selected clip to ramp from 0 to full weight.
    pub fade_in: f32,
    /// Time for a replaced clip to ramp from its current weight to 0.
    pub fade_out: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            fade_in: DEFAULT_FADE_DURATION,
            fade_out: DEFAULT_FADE_DURATION,
        }
    }
}

impl ControllerSettings {
    #[must_use]
    pub fn with_fade_in(mut self, seconds: f32) -> Self {
        self.fade_in = seconds;
        self
    }

    #[must_use]
    pub fn with_fade_out(mut self, seconds: f32) -> Self {
        self.fade_out = seconds;
        self
    }

    /// Returns a copy with negative or non-finite durations replaced by `0.0`.
    ///
    /// A zero duration means an instant switch.
    #[must_use]
    pub fn validated(self) -> Self {
        Self {
            fade_in: sanitize_duration("fade_in", self.fade_in),
            fade_out: sanitize_duration("fade_out", self.fade_out),
        }
    }
}

fn sanitize_duration(field: &str, seconds: f32) -> f32 {
    if seconds.is_finite() && seconds >= 0.0 {
        seconds
    } else {
        log::warn!("Invalid {field} duration {seconds}, using 0.0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ControllerSettings::default();
        assert_eq!(settings.fade_in, 0.5);
        assert_eq!(settings.fade_out, 0.5);
    }

    #[test]
    fn test_validated_clamps_bad_values() {
        let settings = ControllerSettings::default()
            .with_fade_in(-1.0)
            .with_fade_out(f32::INFINITY)
            .validated();
        assert_eq!(settings.fade_in, 0.0);
        assert_eq!(settings.fade_out, 0.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: ControllerSettings = serde_json::from_str(r#"{ "fade_out": 0.25 }"#).unwrap();
        assert_eq!(settings.fade_in, DEFAULT_FADE_DURATION);
        assert_eq!(settings.fade_out, 0.25);
    }
}
