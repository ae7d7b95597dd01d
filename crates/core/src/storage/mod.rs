//! Storage contracts for the gallery.
//!
//! Repository traits the server's SQLite backend implements, the shared
//! error taxonomy, and its HTTP status mapping.

pub mod error;
pub mod http_mapping;
pub mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{ImageRepository, UserRepository, VoteRepository};
