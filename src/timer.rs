//! Non-blocking periodic timer.
//!
//! [`IntervalTimer`] answers "has at least one period elapsed since the last
//! tick?" without blocking. A positive [`check`](IntervalTimer::check)
//! consumes the period: the timer rebases to the instant it was checked at.

use crate::time::{TimeDuration, TimeInstant};

/// Read-and-reset periodic timer.
///
/// The caller supplies the current instant on every call, so several timers
/// can share one clock read per loop iteration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer<I: TimeInstant> {
    period_ms: u32,
    last_tick: I,
}

impl<I: TimeInstant> IntervalTimer<I> {
    /// Creates a timer whose first period starts at `now`.
    pub const fn new(period_ms: u32, now: I) -> Self {
        Self {
            period_ms,
            last_tick: now,
        }
    }

    /// Returns true if a full period has elapsed since the last tick.
    ///
    /// A true result rebases the timer to `now`; a false result leaves it
    /// untouched. Calling this twice at the same instant never yields two
    /// ticks (unless the period is zero).
    pub fn check(&mut self, now: I) -> bool {
        let elapsed = now.duration_since(self.last_tick).as_millis();
        if elapsed >= self.period_ms as u64 {
            self.last_tick = now;
            return true;
        }
        false
    }

    /// Rebases the timer to `now` unconditionally.
    pub fn reset(&mut self, now: I) {
        self.last_tick = now;
    }

    /// Returns the timer period in milliseconds.
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
