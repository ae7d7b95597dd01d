use thiserror::Error;

/// Errors from credential validation and password handling.
///
/// The display strings are the API-facing messages. `InvalidCredentials` is
/// deliberately shared by every authentication failure mode so the response
/// never reveals whether the username or the password was wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("password hashing failed")]
    HashingFailed,
}

/// Result type for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;
