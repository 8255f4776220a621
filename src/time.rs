//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`Instant32`] / [`Duration32`], a wrapping 32-bit millisecond
//! clock matching the `millis()` counter most small MCUs keep in a tick
//! interrupt. It overflows after ~49.7 days; every comparison in this crate
//! goes through [`TimeInstant::duration_since`], which must wrap.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter must use wrapping
    /// subtraction so the result stays correct across an overflow.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// 32-bit millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration32(pub u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

/// Wrapping 32-bit millisecond instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant32(pub u32);

impl Instant32 {
    /// Returns the raw millisecond counter value.
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Returns the instant `millis` later, wrapping on overflow.
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Instant32(self.0.wrapping_add(millis))
    }
}

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}
