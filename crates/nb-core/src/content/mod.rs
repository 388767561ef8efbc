//! Content module
//!
//! Notes, their comments, and the repository that stores them.

pub mod model;
pub mod builder;
pub mod repository;

pub use model::*;
pub use builder::NoteBuilder;
pub use repository::ContentRepository;
