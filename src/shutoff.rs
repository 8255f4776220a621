//! Active-hours safety counter.

use crate::config::{HOUR_MS, MAX_ACTIVE_HOURS};
use crate::time::TimeInstant;
use crate::timer::IntervalTimer;

/// Counts whole hours of active runtime against a ceiling.
///
/// Once more than `ceiling` hours have elapsed the counter stays exceeded
/// until [`reset`](ShutoffCounter::reset). Nothing persists across power loss.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShutoffCounter<I: TimeInstant> {
    timer: IntervalTimer<I>,
    hours_elapsed: u32,
    ceiling: u32,
}

impl<I: TimeInstant> ShutoffCounter<I> {
    /// Creates a counter using [`MAX_ACTIVE_HOURS`] and [`HOUR_MS`].
    pub const fn new(now: I) -> Self {
        Self::with_ceiling(MAX_ACTIVE_HOURS, now)
    }

    /// Creates a counter with an explicit ceiling.
    pub const fn with_ceiling(ceiling: u32, now: I) -> Self {
        Self {
            timer: IntervalTimer::new(HOUR_MS, now),
            hours_elapsed: 0,
            ceiling,
        }
    }

    /// Counts the hour if one has elapsed and reports whether the ceiling is
    /// exceeded.
    pub fn tick(&mut self, now: I) -> bool {
        if self.timer.check(now) {
            self.hours_elapsed = self.hours_elapsed.saturating_add(1);
            trace!("active hours: {}", self.hours_elapsed);
        }
        self.is_exceeded()
    }

    /// Returns true once more than `ceiling` hours have been counted.
    pub fn is_exceeded(&self) -> bool {
        self.hours_elapsed > self.ceiling
    }

    /// Returns the number of whole hours counted.
    pub fn hours_elapsed(&self) -> u32 {
        self.hours_elapsed
    }

    /// Returns the configured ceiling.
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Zeroes the count and rebases the hour timer. The ceiling is kept.
    pub fn reset(&mut self, now: I) {
        self.hours_elapsed = 0;
        self.timer.reset(now);
    }
}
