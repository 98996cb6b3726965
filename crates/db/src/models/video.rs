//! Video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vidcat_core::types::{DbId, Timestamp};

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub is_published: bool,
    pub total_likes: i32,
    pub created_at: Timestamp,
}

/// A video joined with its owner's username, as listed to callers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoWithOwner {
    pub id: DbId,
    pub owner_id: DbId,
    pub owner_username: String,
    pub name: String,
    pub is_published: bool,
    pub total_likes: i32,
    pub created_at: Timestamp,
}

/// Identifier-only projection used by the published-ids listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoId {
    pub id: DbId,
}

/// DTO for creating a video. The owner is always the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideo {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub is_published: Option<bool>,
}

/// DTO for updating a video. All fields optional; the counter is never writable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVideo {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub is_published: Option<bool>,
}
