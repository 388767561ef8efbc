//! Repl command
//!
//! Reads board commands from stdin, one per line, and applies them to a
//! board that lives for the duration of the session.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use nb_core::config::Config;
use nb_core::content::{ContentRepository, NoteBuilder};
use nb_core::types::{AuthorId, CommentId, ContentId};
use nb_core::NoteBoardError;
use nb_core::view::RenderManager;

use super::{ensure_format, resolve_format, OutputFormat};

/// Arguments for the repl command
#[derive(Debug, Args)]
pub struct ReplArgs {
    /// Listing format (defaults to the configured one)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Board commands, one per line. Quote arguments that contain spaces.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

/// Commands accepted by the session
#[derive(Debug, Subcommand)]
enum ReplCommand {
    /// Add a note
    Add {
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Author id (defaults to the configured one)
        #[arg(long)]
        author: Option<u64>,
    },

    /// Comment on a note
    Comment {
        note: u64,
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Author id (defaults to the configured one)
        #[arg(long)]
        author: Option<u64>,
    },

    /// Soft-delete a note
    Delete { note: u64 },

    /// Undo a note deletion
    Restore { note: u64 },

    /// Replace a note's title and text
    Edit {
        note: u64,
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Soft-delete a comment
    DeleteComment { comment: u64 },

    /// Undo a comment deletion
    RestoreComment { comment: u64 },

    /// Replace a comment's text
    EditComment {
        comment: u64,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Show active notes and comments
    List {
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show one note as stored, including deleted comments
    Show { note: u64 },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line
    Continue(String),
    /// Stop reading
    Quit,
}

/// A board plus the settings used to present it
pub struct Session {
    repo: ContentRepository,
    renderer: RenderManager,
    format: String,
    default_author: AuthorId,
}

impl Session {
    pub fn new(config: &Config, format: String) -> Self {
        Self {
            repo: ContentRepository::new(),
            renderer: RenderManager::from_display(&config.display),
            format,
            default_author: AuthorId(config.defaults.author_id),
        }
    }

    /// Parse and apply one input line
    pub fn handle(&mut self, line: &str) -> Result<Outcome> {
        let tokens = split_args(line)?;
        let parsed = match ReplLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp => {
                return Ok(Outcome::Continue(err.render().to_string()));
            }
            Err(err) => bail!("{}", err.render().to_string().trim_end()),
        };

        let message = match parsed.command {
            ReplCommand::Add {
                title,
                text,
                author,
            } => {
                let note = NoteBuilder::new(self.author(author)).title(title).text(text).build();
                let note = self.repo.add(note);
                format!("{} Added note {}", "✓".green(), note.id)
            }
            ReplCommand::Comment { note, text, author } => {
                let comment = self
                    .repo
                    .create_comment(ContentId(note), self.author(author), text)?;
                format!("{} Added comment {} to note {}", "✓".green(), comment.id, note)
            }
            ReplCommand::Delete { note } => {
                let note = self.repo.delete(ContentId(note))?;
                format!("{} Deleted note {}", "✓".green(), note.id)
            }
            ReplCommand::Restore { note } => {
                let note = self.repo.restore(ContentId(note))?;
                format!("{} Restored note {}", "✓".green(), note.id)
            }
            ReplCommand::Edit { note, title, text } => {
                let note = self.repo.edit(ContentId(note), &title, &text)?;
                format!("{} Updated note {}", "✓".green(), note.id)
            }
            ReplCommand::DeleteComment { comment } => {
                let note = self.repo.delete_comment(CommentId(comment))?;
                format!("{} Deleted comment {} on note {}", "✓".green(), comment, note.id)
            }
            ReplCommand::RestoreComment { comment } => {
                let note = self.repo.restore_comment(CommentId(comment))?;
                format!("{} Restored comment {} on note {}", "✓".green(), comment, note.id)
            }
            ReplCommand::EditComment { comment, text } => {
                let note = self.repo.edit_comment(CommentId(comment), &text)?;
                format!("{} Updated comment {} on note {}", "✓".green(), comment, note.id)
            }
            ReplCommand::List { format } => {
                let format = format.map_or_else(|| self.format.clone(), |f| f.as_str().to_string());
                let listing = self.renderer.render(&self.repo.list_active(), &format)?;
                if listing.is_empty() {
                    "No active notes.".to_string()
                } else {
                    listing.trim_end().to_string()
                }
            }
            ReplCommand::Show { note } => {
                let id = ContentId(note);
                let stored = self
                    .repo
                    .get(id)
                    .ok_or_else(|| NoteBoardError::content_not_found(id))?;
                serde_json::to_string_pretty(stored)?
            }
            ReplCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(message))
    }

    fn author(&self, explicit: Option<u64>) -> AuthorId {
        explicit.map(AuthorId).unwrap_or(self.default_author)
    }
}

/// Execute the repl command
pub fn execute(args: ReplArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);
    let mut session = Session::new(config, format);
    ensure_format(&session.renderer, &session.format)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_session(&mut session, stdin.lock(), &mut out, interactive)
}

/// Feed every line of `input` to the session until it ends or quits
pub fn run_session(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> Result<()> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            match session.handle(line) {
                Ok(Outcome::Continue(message)) => writeln!(out, "{}", message)?,
                Ok(Outcome::Quit) => break,
                Err(err) => {
                    tracing::debug!("Command failed: {}", line);
                    writeln!(out, "{} {:#}", "Error:".red(), err)?;
                }
            }
        }

        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Split a line on whitespace, keeping double-quoted runs together.
/// Inside quotes, `\"` and `\\` are escapes.
fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => match chars.next() {
                Some(next) => current.push(next),
                None => bail!("Trailing backslash"),
            },
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        bail!("Unterminated quote");
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}
