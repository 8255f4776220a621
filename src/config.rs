//! Compile-time configuration.
//!
//! Everything tunable about the beacon lives here. There is no runtime
//! configuration; the assertions at the bottom reject inconsistent values at
//! build time.

use crate::types::FlashPattern;

/// Hold ticks at which a press becomes a short hold.
pub const SHORT_PRESS_TICKS: u32 = 30;

/// Hold ticks at which a press becomes a long hold (sleep request).
pub const LONG_PRESS_TICKS: u32 = 1000;

/// Milliseconds between pulse generator level steps.
pub const PULSE_STEP_MS: u32 = 3;

/// Highest level the pulse ramp reaches before gamma correction.
pub const PULSE_CEILING: u8 = 180;

/// Period of the shutoff counter's hour timer.
pub const HOUR_MS: u32 = 60 * 60 * 1000;

/// Active hours allowed before a forced shutoff.
pub const MAX_ACTIVE_HOURS: u32 = 1;

/// Carrier mark duration per Active iteration.
pub const CARRIER_MARK_US: u32 = 1000;

/// Carrier space duration per Active iteration.
pub const CARRIER_SPACE_US: u32 = 1000;

/// Modulation frequency the board should configure its IR output for.
pub const CARRIER_FREQUENCY_KHZ: u32 = 38;

/// Acknowledges a long-press sleep request.
pub const ACK_FLASH: FlashPattern = match FlashPattern::new(2, 150, 150) {
    Ok(pattern) => pattern,
    Err(_) => panic!("invalid acknowledgment flash pattern"),
};

/// Signals a forced shutoff after the active-hours ceiling.
pub const SHUTOFF_FLASH: FlashPattern = match FlashPattern::new(5, 60, 60) {
    Ok(pattern) => pattern,
    Err(_) => panic!("invalid shutoff flash pattern"),
};

const _: () = assert!(SHORT_PRESS_TICKS > 0);
const _: () = assert!(SHORT_PRESS_TICKS < LONG_PRESS_TICKS);
const _: () = assert!(PULSE_STEP_MS > 0);
const _: () = assert!(PULSE_CEILING > 0);
const _: () = assert!(HOUR_MS > 0);
const _: () = assert!(
    ACK_FLASH.count != SHUTOFF_FLASH.count || ACK_FLASH.on_ms != SHUTOFF_FLASH.on_ms
);
