//! Active Clip Controller
//!
//! [`ClipController`] keeps exactly one clip active on a character and
//! cross-fades between clips when the selection changes.
//!
//! # Slots
//!
//! The controller owns at most two [`ActivePlayback`] slots:
//!
//! - `current`: the selected clip, `Entering` or `Steady`
//! - `exiting`: the previously selected clip, fading out
//!
//! Selecting a new clip moves `current` into `exiting` (keeping its weight,
//! so an interrupted fade-in turns around without a pop) and starts the new
//! clip in `current`. Both fades run in parallel. If another clip was still
//! exiting at that moment, the lighter of the two outgoing clips is released
//! immediately and the heavier one keeps fading out. The released clip drops
//! from its current weight to zero in one step; keeping the heavier clip
//! bounds that jump by the smaller of the two weights.
//!
//! # Frame loop
//!
//! ```rust,ignore
//! let mut controller = ClipController::new(registry, ControllerSettings::default(), host);
//! controller.select("idle")?;
//!
//! loop {
//!     let dt = clock.tick();
//!     for w in controller.tick(dt) {
//!         mixer.set_weight(w.name(), w.weight);
//!     }
//! }
//!
//! controller.dispose();
//! ```

use smallvec::SmallVec;

use clipfade_core::errors::{AnimationError, Result};

use crate::host::BindingHost;
use crate::playback::{ActivePlayback, ClipWeight, PlaybackPhase};
use crate::registry::ClipRegistry;
use crate::settings::ControllerSettings;

/// Cross-fading clip selector.
///
/// The host is any [`BindingHost`]; use `()` to only consume the weights
/// returned by [`tick`](Self::tick).
pub struct ClipController<H: BindingHost = ()> {
    registry: ClipRegistry,
    settings: ControllerSettings,
    host: H,

    current: Option<ActivePlayback>,
    exiting: Option<ActivePlayback>,

    weights: SmallVec<[ClipWeight; 2]>,
}

impl ClipController<()> {
    /// Creates a controller without a binding host.
    #[must_use]
    pub fn headless(registry: ClipRegistry, settings: ControllerSettings) -> Self {
        Self::new(registry, settings, ())
    }
}

impl<H: BindingHost> ClipController<H> {
    #[must_use]
    pub fn new(registry: ClipRegistry, settings: ControllerSettings, host: H) -> Self {
        Self {
            registry,
            settings: settings.validated(),
            host,
            current: None,
            exiting: None,
            weights: SmallVec::new(),
        }
    }

    /// Requests that the clip named `name` become the active clip.
    ///
    /// Re-selecting the clip that is already entering or steady does nothing.
    /// On an unknown name the controller state is left untouched.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let handle = self.registry.handle_of(name)?;
        let clip = self
            .registry
            .get(handle)
            .cloned()
            .ok_or_else(|| AnimationError::unknown_clip(name))?;

        if self.current.as_ref().is_some_and(|slot| slot.handle() == handle) {
            log::trace!("Clip '{name}' already active");
            return Ok(());
        }

        // Clip being asked back while it fades out: reuse its slot.
        let revived = match self.exiting.take() {
            Some(slot) if slot.handle() == handle => Some(slot),
            other => {
                self.exiting = other;
                None
            }
        };

        if let Some(mut previous) = self.current.take() {
            previous.begin_exit(self.settings.fade_out);
            if previous.phase() == PlaybackPhase::Released {
                self.host.release(previous.clip());
            } else {
                log::debug!(
                    "Clip '{}' fading out from weight {:.3}",
                    previous.name(),
                    previous.weight()
                );
                // Only one exit fade survives: the heavier one.
                let (keep, mut released) = match self.exiting.take() {
                    Some(stale) if stale.weight() > previous.weight() => (stale, Some(previous)),
                    stale => (previous, stale),
                };
                if let Some(slot) = released.as_mut() {
                    log::debug!(
                        "Clip '{}' released early at weight {:.3}",
                        slot.name(),
                        slot.weight()
                    );
                    slot.release();
                    self.host.release(slot.clip());
                }
                self.exiting = Some(keep);
            }
        }

        let entering = match revived {
            Some(mut slot) => {
                slot.reenter(self.settings.fade_in);
                slot
            }
            None => ActivePlayback::enter(handle, clip, self.settings.fade_in),
        };

        log::debug!(
            "Clip '{name}' fading in from weight {:.3}",
            entering.weight()
        );
        self.host.start(entering.clip());
        self.host.set_weight(entering.clip(), entering.weight());
        self.current = Some(entering);

        Ok(())
    }

    /// Advances all in-flight fades by `delta_time` seconds and pushes the
    /// resulting weights to the host.
    ///
    /// The returned slice lists the active clip first, then the exiting clip.
    /// A clip whose fade-out finished during this tick is reported once with
    /// [`PlaybackPhase::Released`] and weight `0.0`.
    pub fn tick(&mut self, delta_time: f32) -> &[ClipWeight] {
        let dt = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            log::warn!("Ignoring invalid delta time {delta_time}");
            0.0
        };

        self.weights.clear();

        if let Some(slot) = self.current.as_mut() {
            slot.update(dt);
            self.host.set_weight(slot.clip(), slot.weight());
            self.weights.push(slot.sample());
        }

        if let Some(slot) = self.exiting.as_mut() {
            slot.update(dt);
            if slot.phase() == PlaybackPhase::Released {
                log::debug!("Clip '{}' released", slot.name());
                self.host.release(slot.clip());
            } else {
                self.host.set_weight(slot.clip(), slot.weight());
            }
            self.weights.push(slot.sample());
        }

        if self
            .exiting
            .as_ref()
            .is_some_and(|slot| slot.phase() == PlaybackPhase::Released)
        {
            self.exiting = None;
        }

        for w in &self.weights {
            log::trace!("{} {:?} weight={:.3} time={:.3}", w.name(), w.phase, w.weight, w.time);
        }

        &self.weights
    }

    /// Immediately releases every clip without waiting for fades.
    ///
    /// Safe to call in any state. Subsequent ticks report nothing until a
    /// new clip is selected.
    pub fn dispose(&mut self) {
        for mut slot in [self.current.take(), self.exiting.take()]
            .into_iter()
            .flatten()
        {
            slot.release();
            self.host.release(slot.clip());
        }
        self.weights.clear();
        log::debug!("Clip controller disposed");
    }

    /// Name of the entering or steady clip.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.current.as_ref().map(ActivePlayback::name)
    }

    #[must_use]
    pub fn current(&self) -> Option<&ActivePlayback> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn exiting(&self) -> Option<&ActivePlayback> {
        self.exiting.as_ref()
    }

    fn slot_of(&self, name: &str) -> Option<&ActivePlayback> {
        [self.current.as_ref(), self.exiting.as_ref()]
            .into_iter()
            .flatten()
            .find(|slot| slot.name() == name)
    }

    /// Phase of the named clip; `Idle` for clips that are not playing.
    #[must_use]
    pub fn phase_of(&self, name: &str) -> PlaybackPhase {
        self.slot_of(name)
            .map_or(PlaybackPhase::Idle, ActivePlayback::phase)
    }

    /// Current weight of the named clip; `0.0` for clips that are not playing.
    #[must_use]
    pub fn weight_of(&self, name: &str) -> f32 {
        self.slot_of(name).map_or(0.0, ActivePlayback::weight)
    }

    /// Weights reported by the last [`tick`](Self::tick).
    #[must_use]
    pub fn weights(&self) -> &[ClipWeight] {
        &self.weights
    }

    /// `true` when no clip is playing.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.exiting.is_none()
    }

    #[must_use]
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    #[must_use]
    pub fn registry(&self) -> &ClipRegistry {
        &self.registry
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: BindingHost> Drop for ClipController<H> {
    fn drop(&mut self) {
        if !self.is_idle() {
            self.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::AnimationClip;

    fn controller() -> ClipController {
        let registry = ClipRegistry::from_clips([
            AnimationClip::new("idle", 2.0),
            AnimationClip::new("salute", 1.5),
        ])
        .unwrap();
        ClipController::headless(registry, ControllerSettings::default())
    }

    #[test]
    fn test_starts_idle() {
        let mut controller = controller();
        assert!(controller.is_idle());
        assert!(controller.tick(0.1).is_empty());
        assert_eq!(controller.phase_of("idle"), PlaybackPhase::Idle);
    }

    #[test]
    fn test_first_select_fades_in() {
        let mut controller = controller();
        controller.select("idle").unwrap();
        assert_eq!(controller.active(), Some("idle"));
        assert_eq!(controller.phase_of("idle"), PlaybackPhase::Entering);

        let weights = controller.tick(0.25);
        assert_eq!(weights.len(), 1);
        assert!((weights[0].weight - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_instant_switch_with_zero_fades() {
        let registry = ClipRegistry::from_clips([
            AnimationClip::new("idle", 2.0),
            AnimationClip::new("salute", 1.5),
        ])
        .unwrap();
        let settings = ControllerSettings::default()
            .with_fade_in(0.0)
            .with_fade_out(0.0);
        let mut controller = ClipController::headless(registry, settings);

        controller.select("idle").unwrap();
        assert_eq!(controller.phase_of("idle"), PlaybackPhase::Steady);

        controller.select("salute").unwrap();
        assert_eq!(controller.phase_of("salute"), PlaybackPhase::Steady);
        assert_eq!(controller.phase_of("idle"), PlaybackPhase::Idle);
        assert!(controller.exiting().is_none());
    }

    #[test]
    fn test_invalid_delta_is_ignored() {
        let mut controller = controller();
        controller.select("idle").unwrap();
        controller.tick(f32::NAN);
        controller.tick(-1.0);
        assert_eq!(controller.weight_of("idle"), 0.0);
        assert_eq!(controller.phase_of("idle"), PlaybackPhase::Entering);
    }
}
