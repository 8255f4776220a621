//! Controller shared between the main loop and the wake interrupt.
//!
//! [`SharedController`] keeps the single [`PowerController`] behind a
//! `critical_section::Mutex`, so the pin-change interrupt can never observe or
//! clobber a half-finished update from the main loop. Only the state update
//! runs inside the critical section; carrier emission and flash delays happen
//! after it is released. Parking is the exception: the last sleeping check
//! and the power-down share one critical section, so a wake that lands after
//! the decision is never slept through.
//!
//! ```ignore
//! static BEACON: SharedController<Instant32> =
//!     SharedController::new(PowerController::new(Instant32(0)));
//!
//! loop {
//!     BEACON.service(&clock, &mut board);
//! }
//!
//! #[interrupt]
//! fn PCINT0() {
//!     BEACON.on_wake_interrupt(&CLOCK, button_is_low());
//! }
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use crate::config::{CARRIER_MARK_US, CARRIER_SPACE_US};
use crate::hardware::Board;
use crate::power::PowerController;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{Action, FlashPattern, PowerState};

/// A [`PowerController`] guarded for access from interrupt context.
pub struct SharedController<I: TimeInstant> {
    inner: Mutex<RefCell<PowerController<I>>>,
}

impl<I: TimeInstant> SharedController<I> {
    /// Wraps a controller. Usable in a `static` initializer.
    pub const fn new(controller: PowerController<I>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Runs one main-loop iteration: ticks the controller and carries out the
    /// resulting [`Action`] on `board`.
    ///
    /// Blocks inside [`WakeControl::power_down`](crate::hardware::WakeControl::power_down)
    /// while sleeping. Returns the state the controller is in afterwards.
    pub fn service<T, B>(&self, clock: &T, board: &mut B) -> PowerState
    where
        T: TimeSource<I>,
        B: Board,
    {
        let action = critical_section::with(|cs| {
            let now = clock.now();
            let button_down = board.is_down();
            self.inner.borrow_ref_mut(cs).tick(now, button_down)
        });

        match action {
            Action::Transmit { brightness } => {
                board.disarm_wake();
                board.set_brightness(brightness);
                board.emit_active(CARRIER_MARK_US);
                board.emit_idle(CARRIER_SPACE_US);
            }
            Action::Flash(pattern) => {
                board.disarm_wake();
                play(board, pattern);
            }
            Action::AwaitRelease => {
                board.set_brightness(0);
            }
            Action::PowerDown => {
                board.set_brightness(0);
                board.arm_wake();
                self.park(board);
            }
        }

        self.state()
    }

    /// Powers down unless the wake interrupt already fired after arming.
    fn park<B: Board>(&self, board: &mut B) {
        critical_section::with(|cs| {
            if self.inner.borrow_ref(cs).state() == PowerState::Sleeping {
                board.power_down(cs);
            } else {
                debug!("woke before parking");
            }
        });
    }

    /// Body of the button pin-change interrupt handler.
    ///
    /// Returns true if the interrupt woke the device.
    pub fn on_wake_interrupt<T: TimeSource<I>>(&self, clock: &T, button_down: bool) -> bool {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .on_wake(clock.now(), button_down)
        })
    }

    /// Returns the current power state.
    pub fn state(&self) -> PowerState {
        self.with(|controller| controller.state())
    }

    /// Runs `f` with indivisible read access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&PowerController<I>) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow_ref(cs)))
    }
}

fn play<B: Board>(board: &mut B, pattern: FlashPattern) {
    board.set_brightness(0);
    for _ in 0..pattern.count {
        board.set_brightness(u8::MAX);
        board.delay_ms(pattern.on_ms);
        board.set_brightness(0);
        board.delay_ms(pattern.off_ms);
    }
}
