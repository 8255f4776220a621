//! Core types shared by the controller and the board glue.

/// Power state of the beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Transmitting the carrier and pulsing the indicator.
    Active,
    /// Parked in the lowest-power mode, waiting for the button.
    Sleeping,
}

/// What the board has to do after a controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Set the indicator to `brightness` and emit one carrier mark/space cycle.
    Transmit {
        /// Gamma-corrected indicator level.
        brightness: u8,
    },

    /// Play the pattern on the indicator. The controller is already Sleeping.
    Flash(FlashPattern),

    /// Sleep was requested while the button is still down.
    ///
    /// Keep the wake interrupt disarmed and tick again; powering down now would
    /// let the release wake the device straight back up.
    AwaitRelease,

    /// Arm the wake interrupt and park the processor.
    PowerDown,
}

/// An on/off flash sequence for the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashPattern {
    /// Number of flashes.
    pub count: u8,

    /// Time the indicator stays fully on per flash.
    pub on_ms: u32,

    /// Time the indicator stays off after each flash.
    pub off_ms: u32,
}

impl FlashPattern {
    /// Creates a validated flash pattern.
    ///
    /// # Errors
    /// * `ZeroCount` - The pattern has no flashes
    /// * `ZeroOnTime` - Flashes would never be visible
    pub const fn new(count: u8, on_ms: u32, off_ms: u32) -> Result<Self, PatternError> {
        if count == 0 {
            return Err(PatternError::ZeroCount);
        }
        if on_ms == 0 {
            return Err(PatternError::ZeroOnTime);
        }
        Ok(Self {
            count,
            on_ms,
            off_ms,
        })
    }

    /// Total time the pattern takes to play.
    pub const fn total_ms(&self) -> u32 {
        self.count as u32 * (self.on_ms + self.off_ms)
    }
}

/// Flash pattern validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// No flashes requested.
    ZeroCount,

    /// Flash on-time of zero.
    ZeroOnTime,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::ZeroCount => {
                write!(f, "flash pattern must have at least one flash")
            }
            PatternError::ZeroOnTime => {
                write!(f, "flash on-time must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
