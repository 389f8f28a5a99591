// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `regen show <id>`

use crate::error::RegenError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use regen_core::{Presentation, SectionData};

#[derive(Args)]
pub struct ShowArgs {
    /// Section id, as listed by `regen sections`
    pub id: String,
}

pub fn show(presentation: &Presentation, args: ShowArgs, format: OutputFormat) -> Result<()> {
    let section = presentation
        .section(&args.id)
        .ok_or_else(|| RegenError::section_not_found(&args.id))?;

    match format {
        OutputFormat::Text => print_section(section),
        OutputFormat::Json => output::print(section, format),
    }
    Ok(())
}

fn print_section(section: &SectionData) {
    println!("{}", section.title);
    if let Some(subtitle) = &section.subtitle {
        println!("  {}", subtitle);
    }

    for paragraph in &section.content {
        println!();
        println!("{}", paragraph);
    }

    if let Some(caption) = &section.image_caption {
        println!();
        println!("[image: {}]", caption);
    }

    if section.has_animation {
        println!();
        println!("[demo: run `regen play` or `regen demo`]");
    }
}
