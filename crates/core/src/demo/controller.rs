// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AnimationController - owns one demo and its tick timer
//!
//! All operations take `&mut self` and run to completion, so mutations are
//! totally ordered. The only deferred work is the tick timer, which lives in
//! the controller's own [`Scheduler`] and fires from [`AnimationController::poll`].

use super::state::{AnimationState, DemoEvent, TICK_TIMER};
use crate::clock::Clock;
use crate::config::DemoConfig;
use crate::effect::Effect;
use crate::error::ConfigError;
use crate::scheduler::Scheduler;
use std::time::Instant;

/// Rendering callback, invoked after every operation that changed the snapshot
pub trait Observer: Send {
    fn on_change(&mut self, snapshot: &AnimationState);
}

impl<F> Observer for F
where
    F: FnMut(&AnimationState) + Send,
{
    fn on_change(&mut self, snapshot: &AnimationState) {
        self(snapshot)
    }
}

/// Controller for one mounted demo widget
pub struct AnimationController<C: Clock> {
    state: AnimationState,
    scheduler: Scheduler,
    clock: C,
    observers: Vec<Box<dyn Observer>>,
}

impl<C: Clock> AnimationController<C> {
    /// Create a controller at the first stage, paused
    pub fn new(config: DemoConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: AnimationState::new(config.tick_interval),
            scheduler: Scheduler::new(),
            clock,
            observers: Vec::new(),
        })
    }

    /// Create a controller for a widget entering view
    ///
    /// Starts playback immediately when `auto_start_on_mount` is set.
    pub fn mount(config: DemoConfig, clock: C) -> Result<Self, ConfigError> {
        let mut controller = Self::new(config, clock)?;
        tracing::debug!(
            tick_interval_ms = u64::try_from(config.tick_interval.as_millis()).unwrap_or(u64::MAX),
            auto_start = config.auto_start_on_mount,
            "demo mounted"
        );
        if config.auto_start_on_mount {
            controller.start();
        }
        Ok(controller)
    }

    /// Register an observer and return the controller (builder style)
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn start(&mut self) {
        self.apply(DemoEvent::Start);
    }

    pub fn pause(&mut self) {
        self.apply(DemoEvent::Pause);
    }

    pub fn step_forward(&mut self) {
        self.apply(DemoEvent::StepForward);
    }

    pub fn step_back(&mut self) {
        self.apply(DemoEvent::StepBack);
    }

    pub fn reset(&mut self) {
        self.apply(DemoEvent::Reset);
    }

    /// Fire every timer that is due according to the clock
    ///
    /// Returns the number of ticks applied. A late poll still applies at
    /// most one tick, because the next tick is armed relative to the moment
    /// the previous one fired.
    pub fn poll(&mut self) -> usize {
        let mut ticks = 0;
        for id in self.scheduler.fired_timers(self.clock.now()) {
            if id == TICK_TIMER {
                self.on_tick();
                ticks += 1;
            } else {
                tracing::warn!(timer = %id, "unknown timer fired");
            }
        }
        ticks
    }

    fn on_tick(&mut self) {
        self.apply(DemoEvent::Tick);
    }

    /// Read-only view for the rendering layer
    pub fn snapshot(&self) -> AnimationState {
        self.state
    }

    /// When the pending tick is due, if one is armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Cancel any pending tick and release the controller
    ///
    /// Takes `self` by value: a disposed controller cannot be used again.
    pub fn dispose(mut self) {
        self.scheduler.clear();
        self.observers.clear();
        tracing::debug!(stage = %self.state.stage, "demo disposed");
    }

    fn apply(&mut self, event: DemoEvent) {
        let (next, effects) = self.state.transition(event);
        let changed = next != self.state;
        self.state = next;

        for effect in effects {
            self.execute(effect);
        }

        if changed {
            tracing::debug!(
                ?event,
                stage = %self.state.stage,
                is_playing = self.state.is_playing,
                "demo state changed"
            );
            let snapshot = self.state;
            for observer in &mut self.observers {
                observer.on_change(&snapshot);
            }
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::SetTimer { id, duration } => {
                self.scheduler.set_timer(id, duration, self.clock.now());
            }
            Effect::CancelTimer { id } => {
                self.scheduler.cancel_timer(&id);
            }
            Effect::Emit(event) => {
                tracing::info!(event = event.name(), ?event, "demo event");
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
