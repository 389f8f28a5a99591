// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of demo snapshots

use regen_core::{AnimationState, Controls, Stage};
use serde::Serialize;
use std::fmt;

const BAR_WIDTH: usize = 5;

/// What the host draws for one snapshot
#[derive(Debug, Serialize)]
pub struct StageView {
    pub stage: Stage,
    pub rank: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub progress: f64,
    pub is_playing: bool,
    pub controls: Controls,
}

impl From<AnimationState> for StageView {
    fn from(state: AnimationState) -> Self {
        Self {
            stage: state.stage,
            rank: state.rank(),
            label: state.label(),
            description: state.stage.description(),
            progress: state.progress(),
            is_playing: state.is_playing,
            controls: state.controls(),
        }
    }
}

impl fmt::Display for StageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = usize::from(self.rank).min(BAR_WIDTH);
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
        let status = if self.is_playing { "playing" } else { "paused" };
        write!(
            f,
            "[{}] {}/{} {:<12} {:<8} {}",
            bar,
            self.rank,
            Stage::LAST_RANK,
            self.label,
            status,
            self.description
        )
    }
}
