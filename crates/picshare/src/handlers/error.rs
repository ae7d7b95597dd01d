use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use picshare_core::auth::AuthError;
use picshare_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type for all handlers.
///
/// Every variant renders as a JSON `{"error": message}` body with the
/// status code of its failure class.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request input.
    #[error("{0}")]
    Validation(String),

    /// Uniqueness conflict, reported as a bad request.
    #[error("{0}")]
    Conflict(String),

    /// Credential validation or verification failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Malformed multipart payload.
    #[error("{0}")]
    Multipart(#[from] MultipartError),

    /// Relational store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Filesystem failure while storing an upload.
    #[error("file storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::MissingCredentials) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::HashingFailed) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
