use async_trait::async_trait;

use crate::gallery::{ImageListing, NewImage, NewUser, User, Vote, VoteValue};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user and returns its id.
    ///
    /// A duplicate username fails with `AlreadyExists`.
    async fn create_user(&self, user: &NewUser) -> Result<i64>;

    /// Gets a user by username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Repository for image operations.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Creates an image row plus its tag associations in one transaction
    /// and returns the image id.
    ///
    /// Tags are created lazily and associations are idempotent: a tag name
    /// appearing twice, or already existing from another image, produces a
    /// single Tag row and a single ImageTag row.
    async fn create_image(&self, image: &NewImage) -> Result<i64>;

    /// Lists every image joined with its owner's username and aggregated
    /// tag names, optionally restricted to images carrying `tag`.
    ///
    /// The filter restricts which images are returned; each returned image
    /// still aggregates all of its tags.
    async fn list_images(&self, tag: Option<&str>) -> Result<Vec<ImageListing>>;
}

/// Repository for vote operations.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Records a vote, overwriting any previous vote by the same user on
    /// the same image.
    async fn upsert_vote(&self, user_id: i64, image_id: i64, value: VoteValue) -> Result<()>;

    /// Gets the vote a user has cast on an image, if any.
    async fn get_vote(&self, user_id: i64, image_id: i64) -> Result<Option<Vote>>;
}
