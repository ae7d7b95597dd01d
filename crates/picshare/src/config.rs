use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "picshare.db")
    pub sqlite_path: String,
    /// Directory uploaded files are stored under (default: "uploads")
    pub upload_dir: String,
    /// User id attributed to uploads and votes until session auth lands
    /// (default: 1)
    pub service_user_id: i64,
    /// Maximum accepted request body size in bytes (default: 10 MiB)
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "picshare.db")
    /// - `UPLOAD_DIR` - upload storage root (default: "uploads")
    /// - `SERVICE_USER_ID` - identity for uploads/votes (default: 1)
    /// - `MAX_UPLOAD_BYTES` - request body cap (default: 10,485,760)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "picshare.db".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            service_user_id: env::var("SERVICE_USER_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
