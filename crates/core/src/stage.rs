// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stages of the regeneration demo
//!
//! The six stages form a closed, totally ordered sequence. Traversal is
//! saturating: stepping past either end returns the boundary stage, so
//! callers never have to guard against running off the sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named point in the regeneration narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Overview before anything happens
    Intro,
    /// The regenerative agent is taken up by the body
    Ingestion,
    /// Dormant stem cells are switched on
    Activation,
    /// Activated cells differentiate into the needed tissue
    Conversion,
    /// New tissue replaces the damaged tissue
    Repair,
    /// Regeneration finished
    Complete,
}

const ORDER: [Stage; 6] = [
    Stage::Intro,
    Stage::Ingestion,
    Stage::Activation,
    Stage::Conversion,
    Stage::Repair,
    Stage::Complete,
];

impl Stage {
    /// Rank of the terminal stage
    pub const LAST_RANK: u8 = 5;

    /// The initial stage (rank 0)
    pub const fn first() -> Stage {
        Stage::Intro
    }

    /// The terminal stage (rank 5)
    pub const fn last() -> Stage {
        Stage::Complete
    }

    /// All stages in rank order
    pub fn all() -> impl Iterator<Item = Stage> {
        ORDER.into_iter()
    }

    /// Position of this stage in the sequence, 0 through 5
    pub const fn rank(self) -> u8 {
        match self {
            Stage::Intro => 0,
            Stage::Ingestion => 1,
            Stage::Activation => 2,
            Stage::Conversion => 3,
            Stage::Repair => 4,
            Stage::Complete => 5,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Stage> {
        ORDER.get(usize::from(rank)).copied()
    }

    /// The following stage, or `self` when already terminal
    pub fn next(self) -> Stage {
        Stage::from_rank(self.rank() + 1).unwrap_or(self)
    }

    /// The preceding stage, or `self` when already initial
    pub fn previous(self) -> Stage {
        match self.rank().checked_sub(1) {
            Some(rank) => Stage::from_rank(rank).unwrap_or(self),
            None => self,
        }
    }

    pub fn is_first(self) -> bool {
        self == Stage::first()
    }

    pub fn is_last(self) -> bool {
        self == Stage::last()
    }

    /// Human-readable name shown above the demo
    pub fn label(self) -> &'static str {
        match self {
            Stage::Intro => "Introduction",
            Stage::Ingestion => "Ingestion",
            Stage::Activation => "Activation",
            Stage::Conversion => "Conversion",
            Stage::Repair => "Repair",
            Stage::Complete => "Complete",
        }
    }

    /// One-line caption describing what the stage depicts
    pub fn description(self) -> &'static str {
        match self {
            Stage::Intro => "Damaged tissue waits for a regenerative signal.",
            Stage::Ingestion => "The regenerative agent is absorbed and carried to the injury.",
            Stage::Activation => "Resident stem cells near the injury wake from dormancy.",
            Stage::Conversion => "Activated cells differentiate into the tissue that was lost.",
            Stage::Repair => "New cells integrate and rebuild the damaged structure.",
            Stage::Complete => "The tissue is restored and the cycle is complete.",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Ingestion => "ingestion",
            Stage::Activation => "activation",
            Stage::Conversion => "conversion",
            Stage::Repair => "repair",
            Stage::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Stage::all()
            .find(|stage| stage.name() == wanted)
            .ok_or_else(|| format!("unknown stage: {}", s))
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
