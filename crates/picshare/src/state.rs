//! Application state with repository-based storage.
//!
//! Shared state passed to all request handlers: repository trait objects
//! for the relational store, the filesystem store for uploaded bytes, and
//! the configured request identity.

use std::sync::Arc;

use picshare_core::storage::{ImageRepository, UserRepository, VoteRepository};

use crate::{
    config::Config,
    context::Identity,
    storage::{files::FileStore, SqliteGallery},
};

/// Shared application state.
///
/// Cloned for each request handler; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Image repository.
    pub images: Arc<dyn ImageRepository>,
    /// Vote repository.
    pub votes: Arc<dyn VoteRepository>,
    /// Filesystem store for uploaded bytes.
    pub files: Arc<FileStore>,
    /// Identity attributed to uploads and votes. Configured at startup;
    /// the seam where session-derived identity will plug in.
    identity: Identity,
    /// Request body cap applied to the router.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates AppState backed by the configured SQLite file and upload
    /// directory.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let gallery = Arc::new(SqliteGallery::new(&config.sqlite_path).await?);
        let files = Arc::new(FileStore::new(&config.upload_dir).await?);

        Ok(Self::build(gallery, files, config))
    }

    /// Creates AppState backed by an in-memory database and a throwaway
    /// upload directory. For tests.
    pub async fn new_in_memory(upload_dir: &std::path::Path) -> Result<Self, anyhow::Error> {
        let gallery = Arc::new(SqliteGallery::new_in_memory().await?);
        let files = Arc::new(FileStore::new(upload_dir).await?);

        Ok(Self::build(gallery, files, &Config::from_env()))
    }

    fn build(gallery: Arc<SqliteGallery>, files: Arc<FileStore>, config: &Config) -> Self {
        Self {
            users: gallery.clone(),
            images: gallery.clone(),
            votes: gallery,
            files,
            identity: Identity {
                user_id: config.service_user_id,
            },
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// The identity attributed to privileged actions on this instance.
    pub fn identity(&self) -> Identity {
        self.identity
    }
}
