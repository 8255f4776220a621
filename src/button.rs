//! Polled button gesture classifier.
//!
//! [`ButtonClassifier`] turns one raw "is the button down" sample per loop
//! iteration into a [`ButtonGesture`]. Classification only looks at how many
//! consecutive samples the button has been down, so contact bounce shorter
//! than the short-press threshold never gets past [`ButtonGesture::InitialPress`]
//! and no separate debounce timer is needed.
//!
//! ```text
//! hold ticks:  1 ... 29 | 30        | 31 ... 999          | 1000     | 1001 ...
//! gesture:     InitialPress| ShortHeld | ShortHeldSustained | LongHeld | LongHeldSustained
//! ```

use crate::config::{LONG_PRESS_TICKS, SHORT_PRESS_TICKS};

/// Debounced button gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonGesture {
    /// Button up, nothing to report.
    #[default]
    Idle,

    /// Down for fewer ticks than the short threshold.
    InitialPress,

    /// Reached the short threshold on this tick. Reported once per hold.
    ShortHeld,

    /// Past the short threshold, not yet at the long one.
    ShortHeldSustained,

    /// Reached the long threshold on this tick. Reported once per hold.
    LongHeld,

    /// Past the long threshold.
    LongHeldSustained,

    /// Released after a short hold.
    ReleasedAfterShort,

    /// Released after a long hold.
    ReleasedAfterLong,
}

impl ButtonGesture {
    /// Gesture reported on the first released sample after `self`.
    pub const fn on_release(self) -> ButtonGesture {
        match self {
            ButtonGesture::ShortHeld | ButtonGesture::ShortHeldSustained => {
                ButtonGesture::ReleasedAfterShort
            }
            ButtonGesture::LongHeld | ButtonGesture::LongHeldSustained => {
                ButtonGesture::ReleasedAfterLong
            }
            _ => ButtonGesture::Idle,
        }
    }

    /// Returns true while the button is reported as held.
    pub const fn is_held(self) -> bool {
        matches!(
            self,
            ButtonGesture::InitialPress
                | ButtonGesture::ShortHeld
                | ButtonGesture::ShortHeldSustained
                | ButtonGesture::LongHeld
                | ButtonGesture::LongHeldSustained
        )
    }
}

/// Counter-threshold gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonClassifier {
    hold_ticks: u32,
    gesture: ButtonGesture,
}

impl ButtonClassifier {
    /// Creates an idle classifier.
    pub const fn new() -> Self {
        Self {
            hold_ticks: 0,
            gesture: ButtonGesture::Idle,
        }
    }

    /// Feeds one raw sample and returns the resulting gesture.
    pub fn poll(&mut self, raw_down: bool) -> ButtonGesture {
        self.gesture = if raw_down {
            self.hold_ticks = self.hold_ticks.saturating_add(1);
            Self::held_gesture(self.hold_ticks)
        } else {
            self.hold_ticks = 0;
            self.gesture.on_release()
        };
        self.gesture
    }

    fn held_gesture(ticks: u32) -> ButtonGesture {
        match ticks {
            t if t == LONG_PRESS_TICKS => ButtonGesture::LongHeld,
            t if t > LONG_PRESS_TICKS => ButtonGesture::LongHeldSustained,
            t if t == SHORT_PRESS_TICKS => ButtonGesture::ShortHeld,
            t if t > SHORT_PRESS_TICKS => ButtonGesture::ShortHeldSustained,
            _ => ButtonGesture::InitialPress,
        }
    }

    /// Returns the most recently reported gesture.
    pub fn gesture(&self) -> ButtonGesture {
        self.gesture
    }

    /// Returns the number of consecutive down samples.
    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    /// Returns to idle with a zero hold count.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ButtonClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold(classifier: &mut ButtonClassifier, ticks: u32) -> ButtonGesture {
        let mut last = classifier.gesture();
        for _ in 0..ticks {
            last = classifier.poll(true);
        }
        last
    }

    #[test]
    fn idle_when_never_pressed() {
        let mut button = ButtonClassifier::new();
        assert_eq!(button.poll(false), ButtonGesture::Idle);
        assert_eq!(button.hold_ticks(), 0);
    }

    #[test]
    fn thresholds_fire_on_exact_tick() {
        let mut button = ButtonClassifier::new();

        assert_eq!(hold(&mut button, SHORT_PRESS_TICKS - 1), ButtonGesture::InitialPress);
        assert_eq!(button.poll(true), ButtonGesture::ShortHeld);
        assert_eq!(button.poll(true), ButtonGesture::ShortHeldSustained);

        let remaining = LONG_PRESS_TICKS - button.hold_ticks() - 1;
        assert_eq!(hold(&mut button, remaining), ButtonGesture::ShortHeldSustained);
        assert_eq!(button.poll(true), ButtonGesture::LongHeld);
        assert_eq!(button.poll(true), ButtonGesture::LongHeldSustained);
    }

    #[test]
    fn release_maps_from_previous_gesture() {
        let mut button = ButtonClassifier::new();
        hold(&mut button, 5);
        assert_eq!(button.poll(false), ButtonGesture::Idle);

        hold(&mut button, SHORT_PRESS_TICKS + 10);
        assert_eq!(button.poll(false), ButtonGesture::ReleasedAfterShort);
        assert_eq!(button.poll(false), ButtonGesture::Idle);

        hold(&mut button, LONG_PRESS_TICKS + 10);
        assert_eq!(button.poll(false), ButtonGesture::ReleasedAfterLong);
        assert_eq!(button.poll(false), ButtonGesture::Idle);
    }

    #[test]
    fn release_on_threshold_tick_counts_as_that_hold() {
        let mut button = ButtonClassifier::new();
        hold(&mut button, SHORT_PRESS_TICKS);
        assert_eq!(button.poll(false), ButtonGesture::ReleasedAfterShort);

        hold(&mut button, LONG_PRESS_TICKS);
        assert_eq!(button.poll(false), ButtonGesture::ReleasedAfterLong);
    }

    #[test]
    fn bounce_never_reaches_short_hold() {
        let mut button = ButtonClassifier::new();
        for _ in 0..50 {
            for _ in 0..3 {
                assert_eq!(button.poll(true), ButtonGesture::InitialPress);
            }
            assert_eq!(button.poll(false), ButtonGesture::Idle);
        }
    }

    #[test]
    fn reset_clears_hold() {
        let mut button = ButtonClassifier::new();
        hold(&mut button, 100);
        button.reset();
        assert_eq!(button.gesture(), ButtonGesture::Idle);
        assert_eq!(button.hold_ticks(), 0);
    }
}
