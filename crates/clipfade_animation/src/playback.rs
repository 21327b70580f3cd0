use std::sync::Arc;

use crate::clip::AnimationClip;
use crate::registry::ClipHandle;

/// Lifecycle of one clip slot.
///
/// `Idle → Entering → Steady → Exiting → Released`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackPhase {
    /// Registered but not playing.
    Idle,
    /// Fading in toward full weight.
    Entering,
    /// At full weight.
    Steady,
    /// Fading out toward zero.
    Exiting,
    /// Fade-out finished or disposed; no further updates.
    Released,
}

/// Linear weight ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Fade {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }
}

/// One clip being faded in, held, or faded out.
#[derive(Debug, Clone)]
pub struct ActivePlayback {
    handle: ClipHandle,
    clip: Arc<AnimationClip>,
    phase: PlaybackPhase,
    fade: Fade,
    /// Local playback time, wrapped by the clip's loop mode.
    pub time: f32,
}

impl ActivePlayback {
    /// Starts `clip` from time zero, fading in from weight 0.
    #[must_use]
    pub fn enter(handle: ClipHandle, clip: Arc<AnimationClip>, fade_in: f32) -> Self {
        let mut playback = Self {
            handle,
            clip,
            phase: PlaybackPhase::Entering,
            fade: Fade::new(0.0, 1.0, fade_in),
            time: 0.0,
        };
        playback.settle();
        playback
    }

    /// Restarts an exiting clip from time zero, fading in from its current weight.
    pub fn reenter(&mut self, fade_in: f32) {
        let weight = self.weight();
        self.phase = PlaybackPhase::Entering;
        self.fade = Fade::new(weight, 1.0, fade_in);
        self.time = 0.0;
        self.settle();
    }

    /// Redirects into a fade-out that starts at the current weight.
    pub fn begin_exit(&mut self, fade_out: f32) {
        let weight = self.weight();
        self.phase = PlaybackPhase::Exiting;
        self.fade = Fade::new(weight, 0.0, fade_out);
        self.settle();
    }

    pub fn release(&mut self) {
        self.phase = PlaybackPhase::Released;
        self.fade = Fade::new(0.0, 0.0, 0.0);
    }

    /// Advances playback time and the active fade by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.phase == PlaybackPhase::Released {
            return;
        }

        self.time = self.clip.wrap_time(self.time + dt);

        if matches!(self.phase, PlaybackPhase::Entering | PlaybackPhase::Exiting) {
            self.fade.advance(dt);
            self.settle();
        }
    }

    fn settle(&mut self) {
        if !self.fade.is_finished() {
            return;
        }
        match self.phase {
            PlaybackPhase::Entering => self.phase = PlaybackPhase::Steady,
            PlaybackPhase::Exiting => self.release(),
            _ => {}
        }
    }

    #[must_use]
    pub fn handle(&self) -> ClipHandle {
        self.handle
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.clip.name
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        match self.phase {
            PlaybackPhase::Idle | PlaybackPhase::Released => 0.0,
            PlaybackPhase::Steady => 1.0,
            PlaybackPhase::Entering | PlaybackPhase::Exiting => self.fade.weight(),
        }
    }

    /// Snapshot of this slot for the frame's weight report.
    #[must_use]
    pub fn sample(&self) -> ClipWeight {
        ClipWeight {
            clip: Arc::clone(&self.clip),
            weight: self.weight(),
            time: self.time,
            phase: self.phase,
        }
    }
}

/// Desired blend weight of one clip for the current frame.
#[derive(Debug, Clone)]
pub struct ClipWeight {
    pub clip: Arc<AnimationClip>,
    pub weight: f32,
    pub time: f32,
    pub phase: PlaybackPhase,
}

impl ClipWeight {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.clip.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn slot(fade_in: f32) -> ActivePlayback {
        let handle = ClipHandle::from(KeyData::from_ffi(1));
        ActivePlayback::enter(handle, Arc::new(AnimationClip::new("idle", 2.0)), fade_in)
    }

    #[test]
    fn test_fade_linear() {
        let mut fade = Fade::new(0.0, 1.0, 0.5);
        fade.advance(0.125);
        assert!((fade.weight() - 0.25).abs() < 1e-6);
        fade.advance(1.0);
        assert!(fade.is_finished());
        assert_eq!(fade.weight(), 1.0);
    }

    #[test]
    fn test_zero_duration_fade_is_instant() {
        let fade = Fade::new(0.3, 0.0, 0.0);
        assert!(fade.is_finished());
        assert_eq!(fade.weight(), 0.0);
    }

    #[test]
    fn test_enter_then_steady() {
        let mut playback = slot(0.5);
        assert_eq!(playback.phase(), PlaybackPhase::Entering);
        assert_eq!(playback.weight(), 0.0);

        playback.update(0.5);
        assert_eq!(playback.phase(), PlaybackPhase::Steady);
        assert_eq!(playback.weight(), 1.0);
    }

    #[test]
    fn test_instant_enter() {
        let playback = slot(0.0);
        assert_eq!(playback.phase(), PlaybackPhase::Steady);
    }

    #[test]
    fn test_exit_keeps_partial_weight() {
        let mut playback = slot(0.5);
        playback.update(0.2);
        let before = playback.weight();

        playback.begin_exit(0.5);
        assert_eq!(playback.phase(), PlaybackPhase::Exiting);
        assert!((playback.weight() - before).abs() < 1e-6);

        playback.update(0.25);
        assert!((playback.weight() - before * 0.5).abs() < 1e-6);

        playback.update(0.25);
        assert_eq!(playback.phase(), PlaybackPhase::Released);
        assert_eq!(playback.weight(), 0.0);
    }

    #[test]
    fn test_released_ignores_updates() {
        let mut playback = slot(0.5);
        playback.release();
        playback.update(1.0);
        assert_eq!(playback.phase(), PlaybackPhase::Released);
        assert_eq!(playback.time, 0.0);
    }

    #[test]
    fn test_time_wraps_with_clip() {
        let mut playback = slot(0.0);
        playback.update(2.5);
        assert!((playback.time - 0.5).abs() < 1e-6);
    }
}
