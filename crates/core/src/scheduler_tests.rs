// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::{Clock, FakeClock};

#[test]
fn timer_fires_once_at_deadline() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer("tick", Duration::from_millis(1500), clock.now());
    assert!(scheduler.has_timers());
    assert!(scheduler.is_armed("tick"));

    // Not due yet
    clock.advance(Duration::from_millis(1499));
    assert!(scheduler.fired_timers(clock.now()).is_empty());

    clock.advance(Duration::from_millis(1));
    assert_eq!(scheduler.fired_timers(clock.now()), vec!["tick".to_string()]);

    // One-shot: gone after firing
    assert!(!scheduler.has_timers());
    clock.advance(Duration::from_secs(10));
    assert!(scheduler.fired_timers(clock.now()).is_empty());
}

#[test]
fn cancelled_timer_never_fires() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer("tick", Duration::from_millis(1500), clock.now());
    scheduler.cancel_timer("tick");

    clock.advance(Duration::from_secs(5));
    assert!(scheduler.fired_timers(clock.now()).is_empty());
    assert!(scheduler.next_deadline().is_none());
}

#[test]
fn cancel_unknown_timer_is_harmless() {
    let mut scheduler = Scheduler::new();
    scheduler.cancel_timer("missing");
    assert!(!scheduler.has_timers());
}

#[test]
fn setting_same_id_replaces_deadline() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();
    let start = clock.now();

    scheduler.set_timer("tick", Duration::from_millis(100), start);
    scheduler.set_timer("tick", Duration::from_millis(500), start);

    assert_eq!(
        scheduler.next_deadline(),
        Some(start + Duration::from_millis(500))
    );

    clock.advance(Duration::from_millis(100));
    assert!(scheduler.fired_timers(clock.now()).is_empty());
}

#[test]
fn due_timers_fire_in_deadline_order() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();
    let now = clock.now();

    scheduler.set_timer("c", Duration::from_millis(30), now);
    scheduler.set_timer("a", Duration::from_millis(10), now);
    scheduler.set_timer("b", Duration::from_millis(20), now);

    clock.advance(Duration::from_millis(35));
    assert_eq!(scheduler.fired_timers(clock.now()), vec!["a", "b", "c"]);
}

#[test]
fn clear_drops_everything() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();
    scheduler.set_timer("a", Duration::from_millis(10), clock.now());
    scheduler.set_timer("b", Duration::from_millis(20), clock.now());

    scheduler.clear();

    clock.advance(Duration::from_secs(1));
    assert!(scheduler.fired_timers(clock.now()).is_empty());
}

#[test]
fn out_of_range_deadline_is_not_armed() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();
    scheduler.set_timer("tick", Duration::from_secs(1), clock.now());

    scheduler.set_timer("tick", Duration::MAX, clock.now());

    assert!(!scheduler.is_armed("tick"));
    assert!(scheduler.next_deadline().is_none());
    clock.advance(Duration::from_secs(5));
    assert!(scheduler.fired_timers(clock.now()).is_empty());
}
