//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod demo;
pub mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use nb_core::config::Config;
use nb_core::view::RenderManager;

/// note-board - notes with comments, kept in memory
#[derive(Debug, Parser)]
#[command(name = "note-board")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay the sample scenario and print the listing after each step
    Demo(demo::DemoArgs),

    /// Work with a board interactively, one command per line on stdin
    Repl(repl::ReplArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Listing output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}

impl OutputFormat {
    /// Renderer format name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
        }
    }
}

/// Pick the format from the command line, falling back to the config
pub fn resolve_format(arg: Option<OutputFormat>, config: &Config) -> String {
    match arg {
        Some(format) => format.as_str().to_string(),
        None => config.display.format.clone(),
    }
}

/// Fail early when the configured format has no renderer
pub fn ensure_format(renderer: &RenderManager, format: &str) -> Result<()> {
    if !renderer.has_format(format) {
        anyhow::bail!(
            "Unknown output format '{}' (expected one of: {})",
            format,
            renderer.formats().join(", ")
        );
    }
    Ok(())
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Set up logging based on verbosity
    setup_logging(cli.verbose, &config.logging.level);
    tracing::debug!("Using config {:?}", config_path);

    // Handle color output
    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Demo(args) => demo::execute(args, &config),
        Commands::Repl(args) => repl::execute(args, &config),
        Commands::Config(cmd) => config::execute(cmd, &config_path, &config),
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::default_path()?),
    }
}

fn setup_logging(verbosity: u8, configured: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
