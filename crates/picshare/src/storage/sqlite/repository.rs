//! SQLite repository implementation.
//!
//! Implements the repository traits from `picshare_core::storage` using
//! SQLite behind a `tokio_rusqlite` connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use picshare_core::gallery::{ImageListing, NewImage, NewUser, User, Vote, VoteValue};
use picshare_core::storage::{
    ImageRepository, RepositoryError, Result, UserRepository, VoteRepository,
};

use super::conversions::{format_datetime, row_to_listing, row_to_user, row_to_vote};
use super::error::{map_store_error, map_store_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed gallery store.
///
/// One connection serves all repositories; statements are serialized by the
/// connection actor and each multi-statement write runs in its own
/// transaction.
pub struct SqliteGallery {
    conn: Connection,
}

impl SqliteGallery {
    /// Creates a store on a file-based database, creating the file if it
    /// doesn't exist.
    ///
    /// Schema initialization is idempotent. If it fails on an otherwise
    /// usable connection the failure is logged and the store is returned
    /// anyway; individual statements then surface store errors per request.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        if let Err(err) = Self::init_schema(&conn).await {
            tracing::error!(error = %err, "schema initialization failed");
        }

        Ok(Self { conn })
    }

    /// Creates a store on an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteGallery {
    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        let username = user.username.clone();
        let password_hash = user.password_hash.clone();
        let registration_date = format_datetime(&user.registration_date);
        let username_id = user.username.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![username, password_hash, registration_date],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_store_error_with_id(e, "User", username_id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_USERNAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&username], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_store_error(e, "User"))
    }
}

// ============================================================================
// ImageRepository implementation
// ============================================================================

#[async_trait]
impl ImageRepository for SqliteGallery {
    async fn create_image(&self, image: &NewImage) -> Result<i64> {
        let user_id = image.user_id;
        let image_path = image.image_path.clone();
        let name = image.name.clone();
        let description = image.description.clone();
        let upload_date = format_datetime(&image.upload_date);
        let tags = image.tags.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(
                    schema::INSERT_IMAGE,
                    rusqlite::params![user_id, image_path, name, description, upload_date],
                )
                .map_err(wrap_err)?;
                let image_id = tx.last_insert_rowid();

                for tag in &tags {
                    tx.execute(schema::INSERT_TAG, [tag]).map_err(wrap_err)?;
                    let tag_id: i64 = tx
                        .query_row(schema::SELECT_TAG_ID, [tag], |row| row.get(0))
                        .map_err(wrap_err)?;
                    tx.execute(schema::INSERT_IMAGE_TAG, rusqlite::params![image_id, tag_id])
                        .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(image_id)
            })
            .await
            .map_err(|e| map_store_error(e, "Image"))
    }

    async fn list_images(&self, tag: Option<&str>) -> Result<Vec<ImageListing>> {
        let tag = tag.map(|t| t.to_string());

        self.conn
            .call(move |conn| {
                let (sql, params): (&str, Vec<String>) = match tag {
                    Some(tag) => (schema::SELECT_IMAGE_LISTING_BY_TAG, vec![tag]),
                    None => (schema::SELECT_IMAGE_LISTING, Vec::new()),
                };

                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params), row_to_listing)
                    .map_err(wrap_err)?;

                let mut listings = Vec::new();
                for row_result in rows {
                    listings.push(row_result.map_err(wrap_err)?);
                }
                Ok(listings)
            })
            .await
            .map_err(|e| map_store_error(e, "Image"))
    }
}

// ============================================================================
// VoteRepository implementation
// ============================================================================

#[async_trait]
impl VoteRepository for SqliteGallery {
    async fn upsert_vote(&self, user_id: i64, image_id: i64, value: VoteValue) -> Result<()> {
        let vote_value = value.as_i64();
        let vote_id = format!("{}:{}", user_id, image_id);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_VOTE,
                    rusqlite::params![user_id, image_id, vote_value],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_store_error_with_id(e, "Vote", vote_id))
    }

    async fn get_vote(&self, user_id: i64, image_id: i64) -> Result<Option<Vote>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_VOTE).map_err(wrap_err)?;
                match stmt.query_row(rusqlite::params![user_id, image_id], row_to_vote) {
                    Ok(vote) => Ok(Some(vote)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_store_error(e, "Vote"))
    }
}
