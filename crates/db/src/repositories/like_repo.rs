//! Repository for the `likes` table and the `videos.total_likes` counter.
//!
//! Like and unlike both run inside one transaction that holds a
//! `FOR UPDATE` lock on the video row from before the edge is touched until
//! after the counter is written. The lock serializes counter updates on one
//! video; the `uq_likes_video_user` constraint decides whether an edge is new.
//! Dropping the transaction on any early return rolls back and releases the
//! lock.

use sqlx::PgPool;
use vidcat_core::likes::{LikeOutcome, UnlikeOutcome};
use vidcat_core::types::DbId;

use crate::repositories::VideoRepo;

/// Provides the like/unlike operations and edge lookups.
pub struct LikeRepo;

impl LikeRepo {
    /// Record that `user_id` likes `video_id`.
    ///
    /// Inserting an edge that already exists is a no-op reported as
    /// [`LikeOutcome::AlreadyLiked`]; the counter only moves when a row was
    /// actually inserted.
    pub async fn like(
        pool: &PgPool,
        video_id: DbId,
        user_id: DbId,
    ) -> Result<LikeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if VideoRepo::lock_for_update(&mut *tx, video_id).await?.is_none() {
            return Ok(LikeOutcome::VideoNotFound);
        }

        let inserted: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO likes (video_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (video_id, user_id) DO NOTHING \
             RETURNING id",
        )
        .bind(video_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            tx.commit().await?;
            return Ok(LikeOutcome::AlreadyLiked);
        }

        let (total_likes,): (i32,) = sqlx::query_as(
            "UPDATE videos SET total_likes = total_likes + 1 \
             WHERE id = $1 RETURNING total_likes",
        )
        .bind(video_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(video_id, user_id, total_likes, "Like edge inserted");
        Ok(LikeOutcome::Liked { total_likes })
    }

    /// Remove `user_id`'s like from `video_id`.
    ///
    /// The video must exist and be published. That is checked once without a
    /// lock so missing videos fail fast, and again on the locked row so a
    /// video unpublished in between is also rejected.
    pub async fn unlike(
        pool: &PgPool,
        video_id: DbId,
        user_id: DbId,
    ) -> Result<UnlikeOutcome, sqlx::Error> {
        if VideoRepo::find_published(pool, video_id).await?.is_none() {
            return Ok(UnlikeOutcome::VideoNotFound);
        }

        let mut tx = pool.begin().await?;

        match VideoRepo::lock_for_update(&mut *tx, video_id).await? {
            Some(video) if video.is_published => {}
            _ => return Ok(UnlikeOutcome::VideoNotFound),
        }

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM likes WHERE video_id = $1 AND user_id = $2 RETURNING id")
                .bind(video_id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        if deleted.is_none() {
            return Ok(UnlikeOutcome::NotLiked);
        }

        let (total_likes,): (i32,) = sqlx::query_as(
            "UPDATE videos SET total_likes = total_likes - 1 \
             WHERE id = $1 RETURNING total_likes",
        )
        .bind(video_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(video_id, user_id, total_likes, "Like edge deleted");
        Ok(UnlikeOutcome::Unliked { total_likes })
    }

    /// Whether `user_id` currently likes `video_id`.
    pub async fn exists(pool: &PgPool, video_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE video_id = $1 AND user_id = $2)",
        )
        .bind(video_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Count like edges for a video, independent of the denormalized counter.
    pub async fn count_for_video(pool: &PgPool, video_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE video_id = $1")
            .bind(video_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
