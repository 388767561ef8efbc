//! nb-core - Core library for note-board
//!
//! This crate provides an in-memory repository of notes with comments,
//! including soft-delete and restore, listing views and renderers, and
//! configuration handling.

pub mod error;
pub mod types;
pub mod config;
pub mod content;
pub mod view;

pub use error::{NoteBoardError, Result};
pub use types::*;
