//! Shared test infrastructure for ir-beacon integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use critical_section::CriticalSection;
use ir_beacon::{ButtonInput, Carrier, Indicator, Instant32, TimeSource, WakeControl};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock clock with controllable time advancement
pub struct MockClock {
    current_time: Cell<Instant32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: Cell::new(Instant32(millis)),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like a
    /// hardware counter
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(current.wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(Instant32(millis));
    }
}

impl TimeSource<Instant32> for MockClock {
    fn now(&self) -> Instant32 {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Board
// ============================================================================

/// One recorded hardware call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Brightness(u8),
    Mark(u32),
    Space(u32),
    Delay(u32),
    ArmWake,
    DisarmWake,
    PowerDown,
}

/// Mock board that records every hardware call
pub struct MockBoard {
    pub button_down: bool,
    pub wake_armed: bool,
    pub power_downs: u32,
    pub carrier_cycles: u32,
    pub brightness: u8,
    /// Runs inside `arm_wake`, standing in for an interrupt that fires there
    pub on_arm_wake: Option<fn()>,
    events: heapless::Vec<BoardEvent, 256>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            button_down: false,
            wake_armed: false,
            power_downs: 0,
            carrier_cycles: 0,
            brightness: 0,
            on_arm_wake: None,
            events: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Number of full-brightness flashes since the last clear
    pub fn flash_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == BoardEvent::Brightness(u8::MAX))
            .count()
    }

    fn record(&mut self, event: BoardEvent) {
        // Long runs only care about the counters; drop events once full
        let _ = self.events.push(event);
    }
}

impl Indicator for MockBoard {
    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.record(BoardEvent::Brightness(level));
    }
}

impl Carrier for MockBoard {
    fn emit_active(&mut self, micros: u32) {
        self.record(BoardEvent::Mark(micros));
    }

    fn emit_idle(&mut self, micros: u32) {
        self.carrier_cycles += 1;
        self.record(BoardEvent::Space(micros));
    }
}

impl ButtonInput for MockBoard {
    fn is_down(&mut self) -> bool {
        self.button_down
    }
}

impl WakeControl for MockBoard {
    fn arm_wake(&mut self) {
        self.wake_armed = true;
        self.record(BoardEvent::ArmWake);
        if let Some(interrupt) = self.on_arm_wake {
            interrupt();
        }
    }

    fn disarm_wake(&mut self) {
        self.wake_armed = false;
        self.record(BoardEvent::DisarmWake);
    }

    fn power_down(&mut self, _cs: CriticalSection<'_>) {
        self.power_downs += 1;
        self.record(BoardEvent::PowerDown);
    }
}

impl embedded_hal::delay::DelayNs for MockBoard {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.record(BoardEvent::Delay(ms));
    }
}
