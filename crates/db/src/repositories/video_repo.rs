//! Repository for the `videos` table.
//!
//! No insert or update here writes `total_likes`;
//! only [`crate::repositories::LikeRepo`] changes it.

use sqlx::{PgConnection, PgPool};
use vidcat_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoId, VideoWithOwner};
use crate::visibility::VisibilityFilter;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, is_published, total_likes, created_at";

/// Columns for `videos v JOIN users u`, exposing the owner's username.
const OWNER_COLUMNS: &str = "v.id, v.owner_id, u.username AS owner_username, v.name, \
    v.is_published, v.total_likes, v.created_at";

/// Newest first; id breaks ties between rows created in the same instant.
const ORDER: &str = "ORDER BY v.created_at DESC, v.id DESC";

/// Provides CRUD and visibility-scoped reads for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video owned by `owner_id`. Unpublished unless stated otherwise.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (owner_id, name, is_published)
             VALUES ($1, $2, COALESCE($3, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a video by ID regardless of visibility.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published video by ID. Takes no lock.
    pub async fn find_published(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 AND is_published");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a video and hold an exclusive row lock on it until the
    /// surrounding transaction ends.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a video by ID if `filter` allows the caller to see it.
    pub async fn find_visible(
        pool: &PgPool,
        id: DbId,
        filter: &VisibilityFilter,
    ) -> Result<Option<VideoWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS} FROM videos v JOIN users u ON u.id = v.owner_id \
             WHERE v.id = $1 AND {}",
            VisibilityFilter::clause("v", 2)
        );
        sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(id)
            .bind(filter.is_admin)
            .bind(filter.viewer_id)
            .fetch_optional(pool)
            .await
    }

    /// List every video `filter` allows the caller to see, newest first.
    pub async fn list_visible(
        pool: &PgPool,
        filter: &VisibilityFilter,
    ) -> Result<Vec<VideoWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS} FROM videos v JOIN users u ON u.id = v.owner_id \
             WHERE {} {ORDER}",
            VisibilityFilter::clause("v", 1)
        );
        sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(filter.is_admin)
            .bind(filter.viewer_id)
            .fetch_all(pool)
            .await
    }

    /// List the IDs of all published videos, newest first.
    pub async fn list_published_ids(pool: &PgPool) -> Result<Vec<VideoId>, sqlx::Error> {
        sqlx::query_as::<_, VideoId>(&format!(
            "SELECT v.id FROM videos v WHERE v.is_published {ORDER}"
        ))
        .fetch_all(pool)
        .await
    }

    /// Update a video. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                name = COALESCE($2, name),
                is_published = COALESCE($3, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a video. Renditions and likes cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
