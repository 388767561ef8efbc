//! note-board - notes with comments, kept in memory
//!
//! A small driver around the `nb-core` repository.
//!
//! ## Quick Start
//!
//! ```bash
//! # Replay the sample scenario
//! note-board demo
//!
//! # Drive a board from a script
//! printf 'add "Hi" "First note"\ncomment 1 "Welcome"\nlist\n' | note-board repl
//!
//! # Write a default config file
//! note-board config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
