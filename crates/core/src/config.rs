// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo configuration
//!
//! Recognized options, as they appear in a presentation file:
//!
//! ```toml
//! [demo]
//! tick_interval = "1500ms"
//! auto_start_on_mount = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay between automatic advances when none is configured
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1500);

/// Longest accepted delay between automatic advances
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for one demo placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    pub auto_start_on_mount: bool,
}

impl DemoConfig {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ..Self::default()
        }
    }

    pub fn auto_start(mut self) -> Self {
        self.auto_start_on_mount = true;
        self
    }

    /// Reject settings the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval);
        }
        if self.tick_interval > MAX_TICK_INTERVAL {
            return Err(ConfigError::IntervalTooLong {
                interval: self.tick_interval,
                max: MAX_TICK_INTERVAL,
            });
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            auto_start_on_mount: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
