//! SQLite error mapping.
//!
//! Translates driver errors into the semantic `RepositoryError` taxonomy
//! from `picshare_core::storage`. Constraint failures carry meaning here:
//! UNIQUE and PRIMARY KEY collisions become `AlreadyExists`, FOREIGN KEY
//! and CHECK failures become `InvalidData`, and the rest degrade to plain
//! query or connection failures.

use picshare_core::storage::RepositoryError;
use rusqlite::ffi;

/// Maps a `tokio_rusqlite::Error` to a [`RepositoryError`].
///
/// For call sites that don't have a meaningful id for the failed statement;
/// the id field is filled with `"unknown"`.
pub fn map_store_error(err: tokio_rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    map_store_error_with_id(err, entity_type, "unknown")
}

/// Like [`map_store_error`], preserving the id the statement was about so
/// `NotFound`/`AlreadyExists` can name the offending row.
pub fn map_store_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let inner = match err {
        tokio_rusqlite::Error::Rusqlite(inner) => inner,
        tokio_rusqlite::Error::Close(_) => {
            return RepositoryError::ConnectionFailed("connection closed unexpectedly".to_string())
        }
        other => return RepositoryError::QueryFailed(other.to_string()),
    };

    match &inner {
        rusqlite::Error::SqliteFailure(cause, _) => match cause.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                RepositoryError::AlreadyExists {
                    entity_type,
                    id: id.into(),
                }
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => RepositoryError::InvalidData(format!(
                "foreign key constraint violation for {entity_type}"
            )),
            ffi::SQLITE_CONSTRAINT_CHECK => RepositoryError::InvalidData(format!(
                "check constraint violation for {entity_type}"
            )),
            _ if cause.code == rusqlite::ErrorCode::CannotOpen => {
                RepositoryError::ConnectionFailed(format!("cannot open database: {inner}"))
            }
            _ => RepositoryError::QueryFailed(inner.to_string()),
        },
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        _ => RepositoryError::QueryFailed(inner.to_string()),
    }
}
