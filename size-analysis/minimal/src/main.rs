#![no_std]
#![no_main]

use cortex_m_rt::entry;
use critical_section::CriticalSection;
use embedded_hal::delay::DelayNs;
use ir_beacon::{
    ButtonInput, Carrier, Indicator, Instant32, PowerController, SharedController, TimeSource,
    WakeControl,
};
use panic_halt as _;

// ============================================================================
// Minimal Board Implementation
// ============================================================================

/// Zero-size board for measuring library overhead
pub struct MinimalBoard;

impl Indicator for MinimalBoard {
    fn set_brightness(&mut self, level: u8) {
        core::hint::black_box(level);
    }
}

impl Carrier for MinimalBoard {
    fn emit_active(&mut self, micros: u32) {
        core::hint::black_box(micros);
    }

    fn emit_idle(&mut self, micros: u32) {
        core::hint::black_box(micros);
    }
}

impl ButtonInput for MinimalBoard {
    fn is_down(&mut self) -> bool {
        core::hint::black_box(false)
    }
}

impl WakeControl for MinimalBoard {
    fn arm_wake(&mut self) {
        core::hint::black_box(());
    }

    fn disarm_wake(&mut self) {
        core::hint::black_box(());
    }

    fn power_down(&mut self, _cs: CriticalSection<'_>) {
        // A pending wake ends WFI even with interrupts masked
        cortex_m::asm::wfi();
    }
}

impl DelayNs for MinimalBoard {
    fn delay_ns(&mut self, ns: u32) {
        core::hint::black_box(ns);
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        core::hint::black_box(Instant32(0))
    }
}

static BEACON: SharedController<Instant32> =
    SharedController::new(PowerController::new(Instant32(0)));

// Stands in for the pin-change handler so the wake path is linked
#[inline(never)]
fn wake_handler() {
    BEACON.on_wake_interrupt(&MinimalTimeSource, core::hint::black_box(false));
}

#[entry]
fn main() -> ! {
    let time_source = MinimalTimeSource;
    let mut board = MinimalBoard;

    wake_handler();

    // Size analysis binary: runs the full loop, never expected to return
    loop {
        BEACON.service(&time_source, &mut board);
    }
}
