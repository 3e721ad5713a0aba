//! Ports - trait definitions for external dependencies.
//! Infrastructure crates provide the implementations.

mod repository;

pub use repository::{BaseRepository, PostRepository};
