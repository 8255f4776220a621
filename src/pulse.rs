//! Triangular "breathing" brightness ramp for the status indicator.

use crate::config::{PULSE_CEILING, PULSE_STEP_MS};
use crate::gamma;
use crate::time::TimeInstant;
use crate::timer::IntervalTimer;

/// Ramps a linear level between 0 and [`PULSE_CEILING`] one step per
/// [`PULSE_STEP_MS`], and reports it gamma corrected.
///
/// A full breath (up and back down) takes `2 * PULSE_CEILING * PULSE_STEP_MS`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseGenerator<I: TimeInstant> {
    timer: IntervalTimer<I>,
    level: u8,
    ascending: bool,
}

impl<I: TimeInstant> PulseGenerator<I> {
    /// Creates a generator at level 0, ramping up.
    pub const fn new(now: I) -> Self {
        Self {
            timer: IntervalTimer::new(PULSE_STEP_MS, now),
            level: 0,
            ascending: true,
        }
    }

    /// Advances the ramp if a step is due and returns the output brightness.
    ///
    /// The returned value is valid on every call; only the level changes are
    /// throttled by the step timer.
    pub fn tick(&mut self, now: I) -> u8 {
        if self.timer.check(now) {
            self.step();
        }
        self.brightness()
    }

    fn step(&mut self) {
        if self.ascending {
            self.level = self.level.saturating_add(1).min(PULSE_CEILING);
        } else {
            self.level = self.level.saturating_sub(1);
        }

        if self.level >= PULSE_CEILING {
            self.ascending = false;
        } else if self.level == 0 {
            self.ascending = true;
        }
    }

    /// Returns the linear level before gamma correction.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns true while the ramp is rising.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the gamma-corrected brightness for the current level.
    pub fn brightness(&self) -> u8 {
        gamma::correct(self.level)
    }

    /// Returns to level 0, ramping up, with the step timer rebased.
    pub fn reset(&mut self, now: I) {
        *self = Self::new(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Instant32;

    #[test]
    fn holds_level_between_steps() {
        let mut pulse = PulseGenerator::new(Instant32(0));

        assert_eq!(pulse.tick(Instant32(1)), gamma::correct(0));
        assert_eq!(pulse.level(), 0);

        pulse.tick(Instant32(PULSE_STEP_MS));
        assert_eq!(pulse.level(), 1);

        pulse.tick(Instant32(PULSE_STEP_MS + 1));
        assert_eq!(pulse.level(), 1);
    }

    #[test]
    fn reverses_at_ceiling_and_floor() {
        let mut pulse = PulseGenerator::new(Instant32(0));
        let mut now = Instant32(0);

        for _ in 0..PULSE_CEILING {
            now = now.wrapping_add(PULSE_STEP_MS);
            pulse.tick(now);
        }
        assert_eq!(pulse.level(), PULSE_CEILING);
        assert!(!pulse.is_ascending());

        now = now.wrapping_add(PULSE_STEP_MS);
        pulse.tick(now);
        assert_eq!(pulse.level(), PULSE_CEILING - 1);

        for _ in 0..(PULSE_CEILING - 1) {
            now = now.wrapping_add(PULSE_STEP_MS);
            pulse.tick(now);
        }
        assert_eq!(pulse.level(), 0);
        assert!(pulse.is_ascending());
    }

    #[test]
    fn reset_restarts_ramp() {
        let mut pulse = PulseGenerator::new(Instant32(0));
        pulse.tick(Instant32(PULSE_STEP_MS));
        pulse.tick(Instant32(PULSE_STEP_MS * 2));

        pulse.reset(Instant32(100));
        assert_eq!(pulse.level(), 0);
        assert!(pulse.is_ascending());
        pulse.tick(Instant32(100 + PULSE_STEP_MS - 1));
        assert_eq!(pulse.level(), 0);
    }
}
