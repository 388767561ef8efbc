//! Config command
//!
//! Inspect and create the note-board configuration file.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::Path;

use nb_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: &Path, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, config, json),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Init { force } => init_config(path, force),
    }
}

fn show_config(path: &Path, config: &Config, as_json: bool) -> Result<()> {
    if as_json {
        let json = serde_json::to_string_pretty(config)?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if path.exists() {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", format!("{} (not found, using defaults)", path.display()).dimmed());
    }
    println!();
    print!("{}", config.to_toml_string()?);

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = Config::default().to_toml_string()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote default configuration to {:?}", path);
    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}
