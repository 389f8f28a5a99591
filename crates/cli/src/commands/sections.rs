// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `regen sections`

use crate::output::{self, OutputFormat};
use anyhow::Result;
use regen_core::Presentation;

pub fn sections(presentation: &Presentation, format: OutputFormat) -> Result<()> {
    if presentation.sections.is_empty() && matches!(format, OutputFormat::Text) {
        println!("No sections");
        return Ok(());
    }

    output::print_list(&presentation.sections, format);
    Ok(())
}
