//! Demo command
//!
//! Replays a fixed sequence of operations against a fresh board.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::{self, Write};

use nb_core::config::Config;
use nb_core::content::{ContentRepository, NoteBuilder};
use nb_core::types::AuthorId;
use nb_core::view::RenderManager;

use super::{ensure_format, resolve_format, OutputFormat};

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Listing format (defaults to the configured one)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the demo command
pub fn execute(args: DemoArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);
    let renderer = RenderManager::from_display(&config.display);
    ensure_format(&renderer, &format)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &renderer, &format)
}

/// Run the scenario, writing each step and the resulting listing to `out`
pub fn run_demo(out: &mut impl Write, renderer: &RenderManager, format: &str) -> Result<()> {
    let mut repo = ContentRepository::new();

    let first = repo.add(
        NoteBuilder::new(AuthorId(1))
            .title("Hello, everyone!")
            .text("It's such a good day!")
            .build(),
    );
    let greeting = repo.create_comment(first.id, AuthorId(2), "same to you!")?;

    let second = repo.add(
        NoteBuilder::new(AuthorId(1))
            .title("Good morning!")
            .text("It's such a rainy day!")
            .build(),
    );
    repo.create_comment(second.id, AuthorId(15), "Morning!")?;
    step(out, renderer, format, "Two notes with one comment each", &repo)?;

    repo.delete_comment(greeting.id)?;
    step(out, renderer, format, &format!("Deleted comment {}", greeting.id), &repo)?;

    repo.restore_comment(greeting.id)?;
    step(out, renderer, format, &format!("Restored comment {}", greeting.id), &repo)?;

    repo.delete(first.id)?;
    step(out, renderer, format, &format!("Deleted note {}", first.id), &repo)?;

    repo.edit(second.id, "Good afternoon", "It's such a rainy day!")?;
    step(out, renderer, format, &format!("Edited note {}", second.id), &repo)?;

    Ok(())
}

fn step(
    out: &mut impl Write,
    renderer: &RenderManager,
    format: &str,
    title: &str,
    repo: &ContentRepository,
) -> Result<()> {
    let listing = renderer.render(&repo.list_active(), format)?;

    if format == "text" {
        writeln!(out, "{} {}", "==>".cyan(), title.bold())?;
        write!(out, "{}", listing)?;
        if listing.is_empty() {
            writeln!(out, "{}", "(nothing to show)".dimmed())?;
            writeln!(out)?;
        }
    } else {
        writeln!(out, "{}", listing)?;
    }
    Ok(())
}
