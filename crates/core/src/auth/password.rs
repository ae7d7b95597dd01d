//! Password hashing with Argon2id.
//!
//! Only salted hashes are ever stored; the raw password exists in memory for
//! the duration of the request and nowhere else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::error::{AuthError, AuthResult};

/// Hashes a password with Argon2id and a fresh random salt.
///
/// The returned string is the PHC-format hash, self-describing enough for
/// [`verify_password`] to check against later.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verifies a password against a stored hash.
///
/// A hash that fails to parse is reported as `InvalidCredentials`, the same
/// error a wrong password produces.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
