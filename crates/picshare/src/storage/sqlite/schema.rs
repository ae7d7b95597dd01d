//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the SQLite repository lives here as named constants,
//! pure data with no I/O.

/// SQL statement to create all tables.
///
/// Idempotent: safe to run on every process start against an existing
/// database. Foreign keys are enforced per-connection, so the pragma is
/// part of the batch.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    registration_date TEXT NOT NULL
);

-- Images table
CREATE TABLE IF NOT EXISTS images (
    image_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    image_path TEXT NOT NULL,
    name TEXT,
    description TEXT,
    upload_date TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(user_id)
);

-- Tags table
CREATE TABLE IF NOT EXISTS tags (
    tag_id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag_name TEXT NOT NULL UNIQUE
);

-- Image/tag associations, at most one per pair
CREATE TABLE IF NOT EXISTS image_tags (
    image_id INTEGER NOT NULL,
    tag_id INTEGER NOT NULL,
    PRIMARY KEY (image_id, tag_id),
    FOREIGN KEY (image_id) REFERENCES images(image_id),
    FOREIGN KEY (tag_id) REFERENCES tags(tag_id)
);

-- Votes, one row per (user, image) pair
CREATE TABLE IF NOT EXISTS votes (
    user_id INTEGER NOT NULL,
    image_id INTEGER NOT NULL,
    vote_value INTEGER NOT NULL CHECK (vote_value IN (-1, 1)),
    PRIMARY KEY (user_id, image_id),
    FOREIGN KEY (user_id) REFERENCES users(user_id),
    FOREIGN KEY (image_id) REFERENCES images(image_id)
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_images_user_id ON images(user_id);
CREATE INDEX IF NOT EXISTS idx_image_tags_tag_id ON image_tags(tag_id);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (username, password_hash, registration_date)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT user_id, username, password_hash, registration_date
FROM users
WHERE username = ?1
"#;

// Image queries
pub const INSERT_IMAGE: &str = r#"
INSERT INTO images (user_id, image_path, name, description, upload_date)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

// Tag queries, idempotent on purpose: a duplicate tag name or association
// is a no-op, not an error.
pub const INSERT_TAG: &str = r#"
INSERT OR IGNORE INTO tags (tag_name) VALUES (?1)
"#;

pub const SELECT_TAG_ID: &str = r#"
SELECT tag_id FROM tags WHERE tag_name = ?1
"#;

pub const INSERT_IMAGE_TAG: &str = r#"
INSERT OR IGNORE INTO image_tags (image_id, tag_id) VALUES (?1, ?2)
"#;

// Listing queries. Every image joined with its owner and the aggregate of
// all its tags; ordering by image id keeps results stable for a fixed
// database state.
pub const SELECT_IMAGE_LISTING: &str = r#"
SELECT
    images.image_id,
    images.image_path,
    images.name,
    images.description,
    users.username,
    GROUP_CONCAT(tags.tag_name) AS tags
FROM images
JOIN users ON images.user_id = users.user_id
LEFT JOIN image_tags ON images.image_id = image_tags.image_id
LEFT JOIN tags ON image_tags.tag_id = tags.tag_id
GROUP BY images.image_id
ORDER BY images.image_id
"#;

// The tag filter restricts which images qualify via a subquery so the
// outer join still aggregates each image's full tag set, not only the
// filter tag.
pub const SELECT_IMAGE_LISTING_BY_TAG: &str = r#"
SELECT
    images.image_id,
    images.image_path,
    images.name,
    images.description,
    users.username,
    GROUP_CONCAT(tags.tag_name) AS tags
FROM images
JOIN users ON images.user_id = users.user_id
LEFT JOIN image_tags ON images.image_id = image_tags.image_id
LEFT JOIN tags ON image_tags.tag_id = tags.tag_id
WHERE images.image_id IN (
    SELECT it.image_id
    FROM image_tags it
    JOIN tags t ON it.tag_id = t.tag_id
    WHERE t.tag_name = ?1
)
GROUP BY images.image_id
ORDER BY images.image_id
"#;

// Vote queries
pub const UPSERT_VOTE: &str = r#"
INSERT INTO votes (user_id, image_id, vote_value)
VALUES (?1, ?2, ?3)
ON CONFLICT (user_id, image_id) DO UPDATE SET vote_value = excluded.vote_value
"#;

pub const SELECT_VOTE: &str = r#"
SELECT user_id, image_id, vote_value
FROM votes
WHERE user_id = ?1 AND image_id = ?2
"#;
