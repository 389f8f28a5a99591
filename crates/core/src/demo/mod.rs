// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Staged-animation demo
//!
//! - `AnimationState` is a pure state machine: `transition` returns the next
//!   state plus the effects (timers, events) it needs.
//! - `AnimationController` owns one state, executes those effects against its
//!   scheduler and clock, and notifies observers after each change.

mod controller;
mod state;

pub use controller::{AnimationController, Observer};
pub use state::{AnimationState, Controls, DemoEvent, TICK_TIMER};
