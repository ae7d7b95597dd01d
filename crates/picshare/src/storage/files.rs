//! Filesystem store for uploaded image bytes.
//!
//! Files are stored flat under a root directory as
//! `<uuid>_<sanitized original name>`, so two uploads of the same file
//! never collide and a stored name is safe to embed in a path or URL.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Upload storage rooted at a single directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates the store, creating the root directory if absent.
    pub async fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Writes `data` under a freshly generated name and returns that name.
    ///
    /// The returned name is what gets persisted in the image row; callers
    /// resolve it against the same root later.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        tokio::fs::write(self.root.join(&stored_name), data).await?;
        Ok(stored_name)
    }

    /// Removes a previously stored file.
    pub async fn remove(&self, stored_name: &str) -> io::Result<()> {
        tokio::fs::remove_file(self.root.join(stored_name)).await
    }

    /// The directory files are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Reduces a client-supplied filename to a safe flat name.
///
/// Directory components are discarded, anything outside `[A-Za-z0-9._-]`
/// becomes `_`, and leading dots are stripped so the result is never hidden
/// or a path traversal. An empty result falls back to `"file"`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');

    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}
