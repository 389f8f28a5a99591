// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events produced by demo transitions

use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side effects a transition asks its owner to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for observers and logs
    Emit(Event),
    /// Arm a one-shot timer, replacing any timer with the same id
    SetTimer { id: String, duration: Duration },
    /// Disarm a timer; harmless if it is not armed
    CancelTimer { id: String },
}

/// Events describing what a transition did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    StageChanged { from: Stage, to: Stage },
    PlaybackStarted { stage: Stage },
    PlaybackPaused { stage: Stage },
    PlaybackCompleted,
    Reset { from: Stage },
}

impl Event {
    /// Colon-separated name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Event::StageChanged { .. } => "demo:stage",
            Event::PlaybackStarted { .. } => "demo:playing",
            Event::PlaybackPaused { .. } => "demo:paused",
            Event::PlaybackCompleted => "demo:complete",
            Event::Reset { .. } => "demo:reset",
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
