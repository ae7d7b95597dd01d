//! Storage backends.
//!
//! `sqlite` implements the repository traits from `picshare_core::storage`
//! over a single SQLite database; `files` holds the uploaded bytes on the
//! local filesystem.

pub mod files;
pub mod sqlite;

pub use sqlite::SqliteGallery;
