//! Repository for the `video_renditions` table.

use sqlx::PgPool;
use vidcat_core::types::DbId;

use crate::models::rendition::{CreateRendition, Rendition};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, file_path, quality, created_at";

/// Provides creation and batched lookup of renditions.
pub struct RenditionRepo;

impl RenditionRepo {
    /// Attach a rendition to a video.
    ///
    /// A second rendition of the same quality violates
    /// `uq_video_renditions_video_quality`.
    pub async fn create(
        pool: &PgPool,
        video_id: DbId,
        input: &CreateRendition,
    ) -> Result<Rendition, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_renditions (video_id, file_path, quality)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rendition>(&query)
            .bind(video_id)
            .bind(&input.file_path)
            .bind(input.quality.as_str())
            .fetch_one(pool)
            .await
    }

    /// List renditions for one video.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<Rendition>, sqlx::Error> {
        Self::list_by_videos(pool, &[video_id]).await
    }

    /// List renditions for a batch of videos in one round trip.
    pub async fn list_by_videos(
        pool: &PgPool,
        video_ids: &[DbId],
    ) -> Result<Vec<Rendition>, sqlx::Error> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM video_renditions
             WHERE video_id = ANY($1)
             ORDER BY video_id, id"
        );
        sqlx::query_as::<_, Rendition>(&query)
            .bind(video_ids)
            .fetch_all(pool)
            .await
    }
}
