//! Pure mapping from repository errors to HTTP status codes.

use super::RepositoryError;

/// The HTTP status code the API reports for a [`RepositoryError`].
///
/// Uniqueness conflicts map to 400 rather than 409 because the API surface
/// treats a duplicate username as a plain bad request; `InvalidData` (a
/// broken reference or range check) is a bad request too. Only genuine
/// store failures become 500s.
///
/// # Examples
///
/// ```
/// use picshare_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::AlreadyExists {
///     entity_type: "User",
///     id: "alice".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 400);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 400,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
    }
}
