//! Contact-form avatar
//!
//! Replays the contact section's animation sequence headlessly: the avatar
//! starts on `victory`, the page re-requests `victory` a second later, the
//! visitor presses "send" (`clapping`), and the page switches back to
//! `victory`. Every frame's weights are logged through [`LoggingHost`].
//!
//! ```text
//! RUST_LOG=debug cargo run -p contact_avatar [settings.json]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clipfade::prelude::*;

const FRAME_RATE: f32 = 60.0;
const RUN_SECONDS: f32 = 4.5;

/// Clips shipped with the developer avatar.
fn avatar_clips() -> [AnimationClip; 4] {
    [
        AnimationClip::new("idle", 8.0),
        AnimationClip::new("salute", 2.6).with_loop_mode(LoopMode::Once),
        AnimationClip::new("clapping", 1.9),
        AnimationClip::new("victory", 3.2),
    ]
}

/// Page events, keyed by the time they fire.
const SCRIPT: &[(f32, &str)] = &[
    (0.0, "victory"),
    (1.0, "victory"),
    (2.0, "clapping"),
    (2.2, "wave"),
    (3.0, "victory"),
];

/// Stand-in rig that logs what a real mixer would be asked to do.
#[derive(Default)]
struct LoggingHost {
    frames_weighted: u64,
}

impl BindingHost for LoggingHost {
    fn start(&mut self, clip: &AnimationClip) {
        log::info!("rig: start '{}' ({:.1}s)", clip.name, clip.duration);
    }

    fn set_weight(&mut self, clip: &AnimationClip, weight: f32) {
        self.frames_weighted += 1;
        log::trace!("rig: '{}' weight {weight:.3}", clip.name);
    }

    fn release(&mut self, clip: &AnimationClip) {
        log::info!("rig: release '{}'", clip.name);
    }
}

fn load_settings(path: Option<&Path>) -> Result<ControllerSettings> {
    let Some(path) = path else {
        return Ok(ControllerSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args().nth(1);
    let settings = load_settings(settings_path.as_deref().map(Path::new))?;
    log::info!(
        "fade in {:.2}s, fade out {:.2}s",
        settings.fade_in,
        settings.fade_out
    );

    let registry = ClipRegistry::from_clips(avatar_clips()).context("Invalid avatar clip set")?;
    let mut controller = ClipController::new(registry, settings, LoggingHost::default());
    let mut clock = FrameClock::fixed_rate(FRAME_RATE);
    let mut script = SCRIPT.iter().peekable();

    while clock.elapsed_seconds() < RUN_SECONDS {
        while let Some((_, name)) = script.next_if(|(at, _)| *at <= clock.elapsed_seconds()) {
            match controller.select(name) {
                Ok(()) => log::info!("t={:.2}s select '{name}'", clock.elapsed_seconds()),
                Err(err) => log::warn!("t={:.2}s {err}", clock.elapsed_seconds()),
            }
        }

        let dt = clock.tick();
        for w in controller.tick(dt) {
            if w.phase != PlaybackPhase::Steady {
                log::debug!(
                    "t={:.2}s {:<8} {:?} weight={:.3}",
                    clock.elapsed_seconds(),
                    w.name(),
                    w.phase,
                    w.weight
                );
            }
        }
    }

    controller.dispose();
    log::info!(
        "{} frames, {} weight updates",
        clock.frame_count,
        controller.host().frames_weighted
    );

    Ok(())
}
