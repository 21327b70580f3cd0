use serde::{Deserialize, Serialize};

/// How a clip's local playback time behaves when it reaches the clip end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopMode {
    /// Play once and hold the last frame.
    Once,
    /// Wrap back to the start.
    #[default]
    Loop,
    /// Alternate forward and backward playback.
    PingPong,
}

/// A named, time-bounded animation clip.
///
/// The keyframe data itself lives in the external animation runtime; this
/// type only carries what the selector needs to schedule playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    #[serde(default)]
    pub loop_mode: LoopMode,
}

impl AnimationClip {
    /// Creates a looping clip. Negative or non-finite durations become `0.0`.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        let name = name.into();
        let duration = if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            log::warn!("Clip '{name}' has invalid duration {duration}, using 0.0");
            0.0
        };

        Self {
            name,
            duration,
            loop_mode: LoopMode::Loop,
        }
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Wraps `time` into the clip's playable range according to its loop mode.
    #[must_use]
    pub fn wrap_time(&self, time: f32) -> f32 {
        let duration = self.duration;
        if duration <= 0.0 {
            return 0.0;
        }

        match self.loop_mode {
            LoopMode::Once => time.clamp(0.0, duration),
            LoopMode::Loop => {
                if time >= duration {
                    time % duration
                } else if time < 0.0 {
                    duration + (time % duration)
                } else {
                    time
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                // Normalize into [0, 2*duration), then mirror the second half
                let mut t = time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                if t > duration {
                    t = double_duration - t;
                }
                t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_is_zeroed() {
        assert_eq!(AnimationClip::new("a", -1.0).duration, 0.0);
        assert_eq!(AnimationClip::new("b", f32::NAN).duration, 0.0);
    }

    #[test]
    fn test_wrap_loop() {
        let clip = AnimationClip::new("idle", 2.0);
        assert!((clip.wrap_time(2.5) - 0.5).abs() < 1e-6);
        assert!((clip.wrap_time(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_once_clamps() {
        let clip = AnimationClip::new("salute", 1.5).with_loop_mode(LoopMode::Once);
        assert!((clip.wrap_time(4.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_ping_pong_mirrors() {
        let clip = AnimationClip::new("clapping", 1.0).with_loop_mode(LoopMode::PingPong);
        assert!((clip.wrap_time(1.25) - 0.75).abs() < 1e-6);
        assert!((clip.wrap_time(2.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_holds_start() {
        let clip = AnimationClip::new("pose", 0.0);
        assert_eq!(clip.wrap_time(3.0), 0.0);
    }
}
