// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! regen - terminal host for the regeneration presentation

mod commands;
mod completions;
mod error;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{demo, play, sections, show};
use output::OutputFormat;
use regen_core::Presentation;
use std::path::PathBuf;

use crate::error::RegenError;

/// Presentation used when `--file` is not given
const BUNDLED_PRESENTATION: &str = include_str!("../assets/presentation.toml");

#[derive(Parser)]
#[command(
    name = "regen",
    version,
    about = "Regeneration presentation with an interactive stage demo"
)]
struct Cli {
    /// Presentation file (TOML); defaults to the bundled presentation
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sections of the presentation
    Sections,
    /// Show one section
    Show(show::ShowArgs),
    /// Auto-play the demo until it completes
    Play(play::PlayArgs),
    /// Drive the demo interactively from stdin
    Demo(demo::DemoArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() {
    setup_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprint!("{}", render_error(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Completions don't need a presentation
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let presentation = load_presentation(cli.file.as_deref())?;

    match cli.command {
        Commands::Sections => sections::sections(&presentation, cli.format),
        Commands::Show(args) => show::show(&presentation, args, cli.format),
        Commands::Play(args) => play::play(&presentation, args, cli.format).await,
        Commands::Demo(args) => demo::demo(&presentation, args, cli.format).await,
        Commands::Completions(_) => Ok(()),
    }
}

fn load_presentation(path: Option<&std::path::Path>) -> Result<Presentation> {
    let presentation = match path {
        Some(path) => {
            Presentation::load(path).map_err(|e| RegenError::invalid_presentation(path, e))?
        }
        None => Presentation::from_toml_str(BUNDLED_PRESENTATION)?,
    };
    Ok(presentation)
}

/// Log to stderr so stdout stays clean for rendered output
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<RegenError>() {
        Some(regen) => regen.to_string(),
        None => format!("error: {:#}\n", e),
    }
}
