// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `regen play` - mount the demo with auto-start and print each stage

use crate::error::RegenError;
use crate::output::{self, OutputFormat};
use crate::render::StageView;
use anyhow::Result;
use clap::Args;
use regen_core::{driver, Presentation};
use std::time::Duration;

#[derive(Args)]
pub struct PlayArgs {
    /// Delay between stages, e.g. 1500ms or 2s
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,
}

pub async fn play(presentation: &Presentation, args: PlayArgs, format: OutputFormat) -> Result<()> {
    let section = super::demo_section(presentation)?;
    let config = super::demo_config(presentation, args.interval, true);
    let mut handle = driver::spawn(config).map_err(RegenError::invalid_demo_config)?;
    let mut updates = handle.subscribe();

    if matches!(format, OutputFormat::Text) {
        println!("{}", section.title);
    }

    let mut snapshot = *updates.borrow_and_update();
    output::print_line(&StageView::from(snapshot), format);

    while !snapshot.is_complete() {
        updates.changed().await?;
        snapshot = *updates.borrow_and_update();
        output::print_line(&StageView::from(snapshot), format);
    }

    handle.dispose().await?;
    Ok(())
}
