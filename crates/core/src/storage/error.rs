use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Constraint violations surface as `AlreadyExists` (uniqueness) or
/// `InvalidData` (referential integrity, range checks); everything the
/// store itself breaks on is `ConnectionFailed` or `QueryFailed`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_errors_name_the_row() {
        let error = RepositoryError::NotFound {
            entity_type: "Image",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Image not found: 42");

        let error = RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "alice".to_string(),
        };
        assert_eq!(error.to_string(), "User already exists: alice");
    }

    #[test]
    fn test_store_errors_carry_their_cause() {
        let error = RepositoryError::ConnectionFailed("cannot open database".to_string());
        assert_eq!(error.to_string(), "connection failed: cannot open database");

        let error = RepositoryError::InvalidData("foreign key violation".to_string());
        assert_eq!(error.to_string(), "invalid data: foreign key violation");
    }
}
