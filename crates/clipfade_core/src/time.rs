#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// How a [`FrameClock`] produces its per-frame delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Measure wall-clock time between ticks.
    RealTime,
    /// Advance by a constant step every tick, independent of wall-clock time.
    FixedStep(Duration),
}

/// Frame clock that feeds `delta_time` into the per-frame animation update.
pub struct FrameClock {
    mode: ClockMode,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a real-time clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ClockMode::RealTime)
    }

    /// Creates a clock that advances `1 / hz` seconds per tick.
    ///
    /// A rate whose step is not a representable duration falls back to 60 Hz.
    #[must_use]
    pub fn fixed_rate(hz: f32) -> Self {
        let step = if hz.is_finite() && hz > 0.0 {
            Duration::try_from_secs_f32(1.0 / hz).ok()
        } else {
            None
        };
        let step = step.unwrap_or_else(|| {
            log::warn!("Invalid fixed clock rate {hz}, falling back to 60 Hz");
            Duration::from_secs_f32(1.0 / 60.0)
        });
        Self::with_mode(ClockMode::FixedStep(step))
    }

    #[must_use]
    pub fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            last_update: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Advances the clock by one frame and returns the new delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = match self.mode {
            ClockMode::RealTime => now - self.last_update,
            ClockMode::FixedStep(step) => step,
        };
        self.elapsed += self.delta;
        self.last_update = now;
        self.frame_count += 1;
        self.dt_seconds()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_accumulates() {
        let mut clock = FrameClock::fixed_rate(4.0);
        let dt = clock.tick();
        assert!((dt - 0.25).abs() < 1e-6);
        clock.tick();
        assert_eq!(clock.frame_count, 2);
        assert!((clock.elapsed_seconds() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_rate_falls_back() {
        let clock = FrameClock::fixed_rate(0.0);
        assert_eq!(
            clock.mode(),
            ClockMode::FixedStep(Duration::from_secs_f32(1.0 / 60.0))
        );
    }

    #[test]
    fn test_tiny_rate_falls_back() {
        let mut clock = FrameClock::fixed_rate(1e-20);
        assert_eq!(
            clock.mode(),
            ClockMode::FixedStep(Duration::from_secs_f32(1.0 / 60.0))
        );
        assert!((clock.tick() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_real_time_starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count, 0);
        assert_eq!(clock.delta, Duration::ZERO);
    }
}
