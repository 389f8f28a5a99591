// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo state machine

use crate::effect::{Effect, Event};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timer id used for automatic advancement
pub const TICK_TIMER: &str = "demo:tick";

/// Snapshot of one running demo
///
/// Invariant: `is_playing` is false whenever `stage` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    pub stage: Stage,
    pub is_playing: bool,
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
}

/// Inputs that can move the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    /// Begin automatic advancement
    Start,
    /// Stop automatic advancement
    Pause,
    /// Manual step to the next stage
    StepForward,
    /// Manual step to the previous stage
    StepBack,
    /// Jump back to the first stage and stop
    Reset,
    /// The tick timer fired
    Tick,
}

/// Which playback controls the host should render as enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub can_play: bool,
    pub can_pause: bool,
    pub can_step_forward: bool,
    pub can_step_back: bool,
    pub can_reset: bool,
}

impl AnimationState {
    /// Initial state: first stage, not playing
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            stage: Stage::first(),
            is_playing: false,
            tick_interval,
        }
    }

    pub fn rank(&self) -> u8 {
        self.stage.rank()
    }

    pub fn label(&self) -> &'static str {
        self.stage.label()
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_last()
    }

    /// Fraction of the sequence shown so far, 0.0 through 1.0
    pub fn progress(&self) -> f64 {
        f64::from(self.rank()) / f64::from(Stage::LAST_RANK)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            can_play: !self.is_playing && !self.stage.is_last(),
            can_pause: self.is_playing,
            can_step_forward: !self.stage.is_last(),
            can_step_back: !self.stage.is_first(),
            can_reset: self.is_playing || !self.stage.is_first(),
        }
    }

    /// Pure state transition returning new state and effects
    ///
    /// Every rule is total. Events that cannot apply (stepping past either
    /// end, starting at the terminal stage, a tick while paused) return the
    /// state unchanged with no effects.
    pub fn transition(&self, event: DemoEvent) -> (AnimationState, Vec<Effect>) {
        match event {
            DemoEvent::Start => {
                if self.is_playing || self.stage.is_last() {
                    return (*self, vec![]);
                }
                let next = AnimationState {
                    is_playing: true,
                    ..*self
                };
                let effects = vec![
                    Effect::SetTimer {
                        id: TICK_TIMER.to_string(),
                        duration: self.tick_interval,
                    },
                    Effect::Emit(Event::PlaybackStarted { stage: self.stage }),
                ];
                (next, effects)
            }

            DemoEvent::Pause => {
                if !self.is_playing {
                    return (*self, vec![]);
                }
                let next = AnimationState {
                    is_playing: false,
                    ..*self
                };
                let effects = vec![
                    Effect::CancelTimer {
                        id: TICK_TIMER.to_string(),
                    },
                    Effect::Emit(Event::PlaybackPaused { stage: self.stage }),
                ];
                (next, effects)
            }

            DemoEvent::StepForward => self.advance(false),

            // Stale tick (fired after pause): ignore
            DemoEvent::Tick if !self.is_playing => (*self, vec![]),
            DemoEvent::Tick => self.advance(true),

            DemoEvent::StepBack => {
                if self.stage.is_first() {
                    return (*self, vec![]);
                }
                let to = self.stage.previous();
                let next = AnimationState { stage: to, ..*self };
                let effects = vec![Effect::Emit(Event::StageChanged {
                    from: self.stage,
                    to,
                })];
                (next, effects)
            }

            DemoEvent::Reset => {
                if self.stage.is_first() && !self.is_playing {
                    return (*self, vec![]);
                }
                let next = AnimationState::new(self.tick_interval);
                let effects = vec![
                    Effect::CancelTimer {
                        id: TICK_TIMER.to_string(),
                    },
                    Effect::Emit(Event::Reset { from: self.stage }),
                ];
                (next, effects)
            }
        }
    }

    /// Move forward one rank; reschedule only when driven by the timer
    fn advance(&self, from_tick: bool) -> (AnimationState, Vec<Effect>) {
        if self.stage.is_last() {
            return (*self, vec![]);
        }

        let to = self.stage.next();
        let mut next = AnimationState { stage: to, ..*self };
        let mut effects = vec![Effect::Emit(Event::StageChanged {
            from: self.stage,
            to,
        })];

        if to.is_last() {
            if self.is_playing {
                effects.push(Effect::CancelTimer {
                    id: TICK_TIMER.to_string(),
                });
            }
            next.is_playing = false;
            effects.push(Effect::Emit(Event::PlaybackCompleted));
        } else if from_tick {
            effects.push(Effect::SetTimer {
                id: TICK_TIMER.to_string(),
                duration: self.tick_interval,
            });
        }

        (next, effects)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
