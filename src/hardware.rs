//! Hardware abstraction for the beacon's collaborators.
//!
//! Implement these traits for your board. None of them can fail: handle or
//! drop hardware errors inside the implementation, the control logic has
//! nowhere to report them.
//!
//! [`ActiveLowButton`] and [`PwmIndicator`] adapt plain `embedded-hal` pins so
//! most boards only need to implement [`Carrier`] and [`WakeControl`].

use critical_section::CriticalSection;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Status indicator with adjustable brightness.
pub trait Indicator {
    /// Sets the indicator brightness, 0 (off) to 255 (fully on).
    fn set_brightness(&mut self, level: u8);
}

/// Infrared carrier transmitter.
///
/// The carrier frequency is configured by the board at startup; see
/// [`CARRIER_FREQUENCY_KHZ`](crate::config::CARRIER_FREQUENCY_KHZ).
pub trait Carrier {
    /// Emits the modulated carrier for `micros` microseconds (a mark).
    fn emit_active(&mut self, micros: u32);

    /// Keeps the transmitter idle for `micros` microseconds (a space).
    fn emit_idle(&mut self, micros: u32);
}

/// The wake button, sampled by polling.
pub trait ButtonInput {
    /// Returns true while the button is physically pressed.
    fn is_down(&mut self) -> bool;
}

/// Pin-change wake interrupt and low-power mode.
pub trait WakeControl {
    /// Enables the button pin-change interrupt. Must be idempotent.
    fn arm_wake(&mut self);

    /// Disables the button pin-change interrupt. Must be idempotent.
    fn disarm_wake(&mut self);

    /// Enters the lowest-power mode and returns once a pin-change woke the
    /// processor.
    ///
    /// Called with the wake interrupt armed, from inside the critical section
    /// that confirmed the controller is still sleeping. The wake handler runs
    /// only after that section ends, so the implementation must park in a way
    /// that a pending interrupt still ends: `wfi` with interrupts masked on
    /// Cortex-M, `sei; sleep` on AVR.
    fn power_down(&mut self, cs: CriticalSection<'_>);
}

/// Everything the controller drives, in one bound.
pub trait Board: Indicator + Carrier + ButtonInput + WakeControl + DelayNs {}

impl<T> Board for T where T: Indicator + Carrier + ButtonInput + WakeControl + DelayNs {}

/// Button wired between the pin and ground with a pull-up.
///
/// A failed read is reported as released so a flaky pin can't hold the
/// device awake or trigger a sleep request.
pub struct ActiveLowButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    /// Wraps a configured input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveLowButton<P> {
    fn is_down(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Indicator driven by a PWM channel.
///
/// Brightness 0–255 is scaled onto the channel's full duty range. PWM errors
/// are dropped; the next update simply tries again.
pub struct PwmIndicator<P: SetDutyCycle> {
    channel: P,
}

impl<P: SetDutyCycle> PwmIndicator<P> {
    /// Wraps a configured PWM channel and switches it off.
    pub fn new(mut channel: P) -> Self {
        let _ = channel.set_duty_cycle_fully_off();
        Self { channel }
    }

    /// Returns the wrapped channel.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> Indicator for PwmIndicator<P> {
    fn set_brightness(&mut self, level: u8) {
        let _ = self.channel.set_duty_cycle_fraction(level as u16, u8::MAX as u16);
    }
}
