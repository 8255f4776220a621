//! Integration tests for ShutoffCounter

mod common;
use common::*;

use ir_beacon::config::{HOUR_MS, MAX_ACTIVE_HOURS};
use ir_beacon::{ShutoffCounter, TimeSource};

#[test]
fn ceiling_one_exceeds_from_second_hour() {
    let clock = MockClock::new();
    let mut shutoff = ShutoffCounter::with_ceiling(1, clock.now());

    clock.advance(HOUR_MS);
    assert!(!shutoff.tick(clock.now()));

    clock.advance(HOUR_MS);
    assert!(shutoff.tick(clock.now()));

    clock.advance(1);
    assert!(shutoff.tick(clock.now()));
    clock.advance(HOUR_MS);
    assert!(shutoff.tick(clock.now()));
    assert_eq!(shutoff.hours_elapsed(), 3);
}

#[test]
fn counts_at_most_one_hour_per_firing() {
    let clock = MockClock::new();
    let mut shutoff = ShutoffCounter::with_ceiling(5, clock.now());

    // A long stall between ticks still only counts one hour
    clock.advance(HOUR_MS * 3);
    shutoff.tick(clock.now());
    assert_eq!(shutoff.hours_elapsed(), 1);
}

#[test]
fn default_uses_configured_ceiling() {
    let clock = MockClock::new();
    let shutoff = ShutoffCounter::new(clock.now());
    assert_eq!(shutoff.ceiling(), MAX_ACTIVE_HOURS);
    assert_eq!(shutoff.hours_elapsed(), 0);
}

#[test]
fn hour_timer_tolerates_clock_overflow() {
    let clock = MockClock::starting_at(u32::MAX - HOUR_MS / 2);
    let mut shutoff = ShutoffCounter::with_ceiling(0, clock.now());

    clock.advance(HOUR_MS - 1);
    assert!(!shutoff.tick(clock.now()));
    clock.advance(1);
    assert!(shutoff.tick(clock.now()));
}
