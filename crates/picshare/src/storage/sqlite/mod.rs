//! SQLite storage backend.
//!
//! Implements the repository traits from `picshare_core::storage` over a
//! single `tokio_rusqlite` connection.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteGallery;
