//! Wire types for the HTTP API.
//!
//! Shared request and response bodies. Request fields default to empty so a
//! missing field surfaces as a validation error rather than a
//! deserialization rejection, matching the API's 400 contract.

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /images/{id}/vote`.
///
/// The raw integer is validated into a
/// [`VoteValue`](super::types::VoteValue) by the handler; the default of 0
/// fails that validation, so an absent field is rejected the same way as an
/// out-of-range one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteBody {
    #[serde(default)]
    pub vote: i64,
}

/// Generic `{"message": ...}` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Success body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub user_id: i64,
}
