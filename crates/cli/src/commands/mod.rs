// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod demo;
pub mod play;
pub mod sections;
pub mod show;

use crate::error::RegenError;
use regen_core::{DemoConfig, Presentation, SectionData};
use std::time::Duration;

/// The section that hosts the demo widget
pub fn demo_section(presentation: &Presentation) -> Result<&SectionData, RegenError> {
    presentation
        .animated_sections()
        .next()
        .ok_or_else(RegenError::no_demo_section)
}

/// Presentation demo settings with command-line overrides applied
pub fn demo_config(
    presentation: &Presentation,
    interval: Option<Duration>,
    auto_start: bool,
) -> DemoConfig {
    DemoConfig {
        tick_interval: interval.unwrap_or(presentation.demo.tick_interval),
        auto_start_on_mount: auto_start || presentation.demo.auto_start_on_mount,
    }
}
