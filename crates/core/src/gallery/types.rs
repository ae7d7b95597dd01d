//! Gallery entity types.
//!
//! Ids are the numeric SQLite row ids; timestamps are UTC and stored as
//! RFC 3339 text by the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered user.
///
/// Carries the password hash, so it is never serialized directly; responses
/// use the types in [`super::requests`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub registration_date: DateTime<Utc>,
}

/// Payload for creating a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub registration_date: DateTime<Utc>,
}

/// An uploaded image.
#[derive(Debug, Clone)]
pub struct Image {
    pub id: i64,
    pub user_id: i64,
    /// Stored file name under the upload root, not the client's name.
    pub image_path: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub upload_date: DateTime<Utc>,
}

/// Payload for creating an image row together with its tag associations.
///
/// Tags are expected to be normalized already (see
/// [`super::tags::parse_tag_list`]); the storage layer treats them
/// idempotently either way.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub user_id: i64,
    pub image_path: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// A tag, created lazily on first use.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A user's vote on an image. At most one per (user, image) pair.
#[derive(Debug, Clone, Copy)]
pub struct Vote {
    pub user_id: i64,
    pub image_id: i64,
    pub value: VoteValue,
}

/// One row of the image listing: the image joined with its owner's username
/// and the comma-joined aggregate of all its tag names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageListing {
    pub image_id: i64,
    pub image_path: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub username: String,
    pub tags: Option<String>,
}

/// A vote value, constrained to up (+1) or down (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteValue {
    Up,
    Down,
}

/// Rejected vote value. Displays as the API-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid vote value")]
pub struct InvalidVoteValue(pub i64);

impl VoteValue {
    /// The integer stored in the votes table.
    pub fn as_i64(self) -> i64 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = InvalidVoteValue;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VoteValue::Up),
            -1 => Ok(VoteValue::Down),
            other => Err(InvalidVoteValue(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_value_round_trip() {
        assert_eq!(VoteValue::try_from(1).unwrap(), VoteValue::Up);
        assert_eq!(VoteValue::try_from(-1).unwrap(), VoteValue::Down);
        assert_eq!(VoteValue::Up.as_i64(), 1);
        assert_eq!(VoteValue::Down.as_i64(), -1);
    }

    #[test]
    fn test_vote_value_rejects_everything_else() {
        for value in [0, 2, -2, 100, i64::MIN] {
            let err = VoteValue::try_from(value).unwrap_err();
            assert_eq!(err, InvalidVoteValue(value));
        }
    }

    #[test]
    fn test_invalid_vote_value_display() {
        assert_eq!(InvalidVoteValue(5).to_string(), "Invalid vote value");
    }
}
