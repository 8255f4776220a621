#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IntervalTimer`**: Non-blocking "has a period elapsed" check with read-and-reset semantics
//! - **`ButtonClassifier`**: Turns polled raw button samples into a `ButtonGesture`
//! - **`PulseGenerator`**: Breathing brightness ramp for the status indicator, gamma corrected
//! - **`ShutoffCounter`**: Counts active hours and reports when the safety ceiling is exceeded
//! - **`PowerController`**: The Active / Sleeping state machine tying the above together
//! - **`SharedController`**: Critical-section wrapper shared by the main loop and the wake interrupt
//! - **`Board`**: Traits to implement for your hardware (`Indicator`, `Carrier`, `ButtonInput`, `WakeControl`)
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! All tunables are compile-time constants in [`config`].

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod button;
pub mod config;
pub mod gamma;
pub mod hardware;
pub mod power;
pub mod pulse;
pub mod shared;
pub mod shutoff;
pub mod time;
pub mod timer;
pub mod types;

pub use button::{ButtonClassifier, ButtonGesture};
pub use hardware::{
    ActiveLowButton, Board, ButtonInput, Carrier, Indicator, PwmIndicator, WakeControl,
};
pub use power::PowerController;
pub use pulse::PulseGenerator;
pub use shared::SharedController;
pub use shutoff::ShutoffCounter;
pub use time::{Duration32, Instant32, TimeDuration, TimeInstant, TimeSource};
pub use timer::IntervalTimer;
pub use types::{Action, FlashPattern, PatternError, PowerState};
