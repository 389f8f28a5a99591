// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot named timers

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Owns the pending timers of one controller
///
/// Setting a timer with an id that is already armed replaces it, so at most
/// one deadline exists per id. Cancelled timers are removed immediately and
/// can never fire.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: HashMap<String, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `id` to fire `duration` after `now`
    ///
    /// A deadline past the end of representable time is never armed; any
    /// existing timer with the same id is still replaced (removed).
    pub fn set_timer(&mut self, id: impl Into<String>, duration: Duration, now: Instant) {
        let id = id.into();
        match now.checked_add(duration) {
            Some(deadline) => {
                self.timers.insert(id, deadline);
            }
            None => {
                tracing::warn!(timer = %id, ?duration, "timer deadline out of range, not armed");
                self.timers.remove(&id);
            }
        }
    }

    pub fn cancel_timer(&mut self, id: &str) {
        self.timers.remove(id);
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn fired_timers(&mut self, now: Instant) -> Vec<String> {
        let mut due: Vec<(Instant, String)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, id.clone()))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.timers.remove(id);
        }

        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn is_armed(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().min().copied()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
