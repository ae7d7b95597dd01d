//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use picshare_core::auth::{hash_password, validate_credentials, verify_password, AuthError};
use picshare_core::gallery::{Credentials, LoginResponse, MessageResponse, NewUser};
use picshare_core::storage::RepositoryError;

use crate::{handlers::ApiError, state::AppState};

/// Register a new user (POST /register).
///
/// The unique constraint on usernames is the only duplicate check; a losing
/// concurrent registration maps to the same conflict response.
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    validate_credentials(&credentials)?;

    let user = NewUser {
        username: credentials.username,
        password_hash: hash_password(&credentials.password)?,
        registration_date: Utc::now(),
    };

    let user_id = state.users.create_user(&user).await.map_err(|err| match err {
        RepositoryError::AlreadyExists { .. } => {
            ApiError::Conflict("Username already exists".to_string())
        }
        other => ApiError::Repository(other),
    })?;

    tracing::info!(user_id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Log a user in (POST /login).
///
/// An unknown username and a wrong password produce the identical response;
/// nothing distinguishes which check failed.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    validate_credentials(&credentials)?;

    let Some(user) = state.users.get_user_by_username(&credentials.username).await? else {
        return Err(AuthError::InvalidCredentials.into());
    };
    if !verify_password(&credentials.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username: user.username,
        user_id: user.id,
    }))
}
