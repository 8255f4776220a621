//! Active / Sleeping power state machine.
//!
//! Provides [`PowerController`], which owns every piece of mutable device state
//! (gesture classifier, pulse generator, shutoff counter) and decides, once per
//! main-loop iteration, what the hardware should do next. It never touches the
//! hardware itself; [`SharedController`](crate::SharedController) carries out
//! the returned [`Action`] outside the critical section.
//!
//! ```text
//!            LongHeld (ACK_FLASH) / shutoff exceeded (SHUTOFF_FLASH)
//!   Active ──────────────────────────────────────────────────────────▶ Sleeping
//!     ▲                                                                   │
//!     └──────────── wake interrupt, button released (full reset) ─────────┘
//! ```

use crate::button::{ButtonClassifier, ButtonGesture};
use crate::config::{ACK_FLASH, SHUTOFF_FLASH};
use crate::pulse::PulseGenerator;
use crate::shutoff::ShutoffCounter;
use crate::time::TimeInstant;
use crate::types::{Action, PowerState};

/// Top-level controller for the beacon.
///
/// Starts out [`Sleeping`](PowerState::Sleeping): a freshly booted device is
/// armed for the button and does not transmit until woken.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerController<I: TimeInstant> {
    state: PowerState,
    button: ButtonClassifier,
    pulse: PulseGenerator<I>,
    shutoff: ShutoffCounter<I>,
    awaiting_release: bool,
}

impl<I: TimeInstant> PowerController<I> {
    /// Creates a sleeping controller with all components based at `now`.
    pub const fn new(now: I) -> Self {
        Self::with_shutoff(ShutoffCounter::new(now), now)
    }

    /// Creates a sleeping controller with a custom shutoff counter.
    pub const fn with_shutoff(shutoff: ShutoffCounter<I>, now: I) -> Self {
        Self {
            state: PowerState::Sleeping,
            button: ButtonClassifier::new(),
            pulse: PulseGenerator::new(now),
            shutoff,
            awaiting_release: false,
        }
    }

    /// Runs one main-loop iteration and returns what the board must do.
    ///
    /// `button_down` is the raw button sample for this iteration.
    pub fn tick(&mut self, now: I, button_down: bool) -> Action {
        match self.state {
            PowerState::Active => self.tick_active(now, button_down),
            PowerState::Sleeping => self.tick_sleeping(button_down),
        }
    }

    fn tick_active(&mut self, now: I, button_down: bool) -> Action {
        let brightness = self.pulse.tick(now);
        let gesture = self.button.poll(button_down);
        let exceeded = self.shutoff.tick(now);

        // Checked last so it overrides whatever the button asked for
        if exceeded {
            warn!(
                "forced shutoff after {} active hours",
                self.shutoff.hours_elapsed()
            );
            self.enter_sleep(button_down);
            return Action::Flash(SHUTOFF_FLASH);
        }

        if gesture == ButtonGesture::LongHeld {
            info!("sleep requested");
            self.enter_sleep(button_down);
            return Action::Flash(ACK_FLASH);
        }

        Action::Transmit { brightness }
    }

    fn tick_sleeping(&mut self, button_down: bool) -> Action {
        if self.awaiting_release {
            if button_down {
                return Action::AwaitRelease;
            }
            debug!("button released, powering down");
            self.awaiting_release = false;
        }
        Action::PowerDown
    }

    fn enter_sleep(&mut self, button_down: bool) {
        self.state = PowerState::Sleeping;
        self.awaiting_release = button_down;
    }

    /// Handles the button pin-change interrupt.
    ///
    /// Wakes the device only when it is sleeping and the button reads
    /// released; a wake with the button still held is ignored and the main
    /// loop powers straight back down. Waking resets every component to its
    /// boot state based at `now` and forces [`PowerState::Active`].
    ///
    /// Returns true if the device woke.
    pub fn on_wake(&mut self, now: I, button_down: bool) -> bool {
        if self.state != PowerState::Sleeping || self.awaiting_release {
            return false;
        }

        if button_down {
            debug!("wake ignored, button still held");
            return false;
        }

        self.reset(now);
        self.state = PowerState::Active;
        info!("woke");
        true
    }

    fn reset(&mut self, now: I) {
        self.button.reset();
        self.pulse.reset(now);
        self.shutoff.reset(now);
        self.awaiting_release = false;
    }

    /// Returns the current power state.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Returns true while transmitting.
    pub fn is_active(&self) -> bool {
        self.state == PowerState::Active
    }

    /// Returns true while sleep has been requested but the button is still held.
    pub fn is_awaiting_release(&self) -> bool {
        self.awaiting_release
    }

    /// Returns the gesture classifier.
    pub fn button(&self) -> &ButtonClassifier {
        &self.button
    }

    /// Returns the pulse generator.
    pub fn pulse(&self) -> &PulseGenerator<I> {
        &self.pulse
    }

    /// Returns the shutoff counter.
    pub fn shutoff(&self) -> &ShutoffCounter<I> {
        &self.shutoff
    }
}
