//! SQLite row conversions.
//!
//! Pure row-to-domain decoding, kept out of the repository so the parsing
//! of stored timestamps and vote values can be tested without a database.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use picshare_core::gallery::{ImageListing, User, Vote, VoteValue};

/// Convert a SQLite row to a User.
///
/// Expected columns: user_id, username, password_hash, registration_date
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let username: String = row.get(1)?;
    let password_hash: String = row.get(2)?;
    let registration_date: String = row.get(3)?;

    Ok(User {
        id,
        username,
        password_hash,
        registration_date: parse_datetime(&registration_date)?,
    })
}

/// Convert a listing row to an ImageListing.
///
/// Expected columns: image_id, image_path, name, description, username,
/// tags (comma-joined aggregate, NULL when the image has no tags)
pub fn row_to_listing(row: &Row) -> rusqlite::Result<ImageListing> {
    Ok(ImageListing {
        image_id: row.get(0)?,
        image_path: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        username: row.get(4)?,
        tags: row.get(5)?,
    })
}

/// Convert a SQLite row to a Vote.
///
/// Expected columns: user_id, image_id, vote_value
pub fn row_to_vote(row: &Row) -> rusqlite::Result<Vote> {
    let user_id: i64 = row.get(0)?;
    let image_id: i64 = row.get(1)?;
    let raw_value: i64 = row.get(2)?;

    Ok(Vote {
        user_id,
        image_id,
        value: parse_vote_value(raw_value)?,
    })
}

/// Parse a stored vote value. The CHECK constraint keeps the column in
/// {-1, 1}, so a mismatch means the row predates the constraint.
fn parse_vote_value(value: i64) -> rusqlite::Result<VoteValue> {
    VoteValue::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Integer, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
