// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `regen demo` - drive the demo from stdin
//!
//! Reads one command per line and prints a snapshot after every change.
//! End of input behaves like `quit`.

use crate::error::RegenError;
use crate::output::{self, OutputFormat};
use crate::render::StageView;
use anyhow::Result;
use clap::Args;
use regen_core::{driver, AnimationState, DemoHandle, Presentation};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "play, pause, next, back, reset, status, help, quit";

#[derive(Args)]
pub struct DemoArgs {
    /// Delay between stages while playing, e.g. 1500ms or 2s
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,

    /// Start playing as soon as the demo is mounted
    #[arg(long)]
    pub autostart: bool,
}

/// What one line of input asks for
enum Input {
    Continue,
    Quit,
}

pub async fn demo(presentation: &Presentation, args: DemoArgs, format: OutputFormat) -> Result<()> {
    let section = super::demo_section(presentation)?;
    let config = super::demo_config(presentation, args.interval, args.autostart);
    let mut handle = driver::spawn(config).map_err(RegenError::invalid_demo_config)?;
    let mut updates = handle.subscribe();

    if matches!(format, OutputFormat::Text) {
        println!("{}", section.title);
        println!("commands: {}", HELP);
    }

    let mut last_printed = *updates.borrow_and_update();
    output::print_line(&StageView::from(last_printed), format);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Input::Quit = dispatch(&handle, line.trim(), format)? {
                    break;
                }
            }
            changed = updates.changed() => {
                changed?;
                last_printed = *updates.borrow_and_update();
                output::print_line(&StageView::from(last_printed), format);
            }
        }
    }

    // Commands queued before quitting are applied before the task exits
    handle.dispose().await?;
    let final_state: AnimationState = *updates.borrow();
    if final_state != last_printed {
        output::print_line(&StageView::from(final_state), format);
    }
    Ok(())
}

fn dispatch(handle: &DemoHandle, command: &str, format: OutputFormat) -> Result<Input> {
    match command {
        "" => {}
        "play" | "start" => handle.start()?,
        "pause" => handle.pause()?,
        "next" | "forward" => handle.step_forward()?,
        "back" | "prev" => handle.step_back()?,
        "reset" => handle.reset()?,
        "status" => output::print_line(&StageView::from(handle.snapshot()), format),
        "help" => println!("commands: {}", HELP),
        "quit" | "exit" => return Ok(Input::Quit),
        other => {
            tracing::debug!(command = other, "unrecognized input");
            eprintln!("unknown command: {} (try `help`)", other);
        }
    }
    Ok(Input::Continue)
}
