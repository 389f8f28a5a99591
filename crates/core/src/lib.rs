// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! regen-core: staged-animation controller for the regeneration presentation
//!
//! This crate provides:
//! - The closed, ordered set of demo stages and traversal helpers
//! - A pure state machine for one running demo, plus the controller that owns it
//! - Cancellable timers driven by a testable clock
//! - Section metadata the host page uses to decide where a demo is mounted

pub mod clock;
pub mod config;
pub mod demo;
pub mod driver;
pub mod effect;
pub mod error;
pub mod scheduler;
pub mod section;
pub mod stage;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::DemoConfig;
pub use demo::{AnimationController, AnimationState, Controls, DemoEvent, Observer};
pub use driver::{DemoHandle, TokioClock};
pub use effect::{Effect, Event};
pub use error::{ConfigError, DemoError};
pub use scheduler::Scheduler;
pub use section::{Presentation, SectionData};
pub use stage::Stage;
