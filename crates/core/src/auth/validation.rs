//! Credential presence validation.

use super::error::{AuthError, AuthResult};
use crate::gallery::Credentials;

/// Checks that both username and password are present and non-empty.
///
/// Missing JSON fields deserialize to empty strings (see
/// [`Credentials`]), so this single check covers both the absent and the
/// blank case.
pub fn validate_credentials(credentials: &Credentials) -> AuthResult<()> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}
