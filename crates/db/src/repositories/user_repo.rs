//! Repository for the `users` table.

use sqlx::PgPool;
use vidcat_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, is_staff, created_at";

/// Provides lookup and creation for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, is_staff)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.is_staff)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a user. Their videos and likes cascade.
    ///
    /// The cascade removes like edges on other owners' videos, so those
    /// videos' counters are decremented first in the same transaction, under
    /// the same row locks the like engine takes (acquired in id order).
    ///
    /// The user row is locked before anything else. `FOR UPDATE` conflicts
    /// with the key-share lock a like insert takes on its user, so a like
    /// still in flight commits first and is counted here, and no new like
    /// for this user can start until the delete is done.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM users WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(false);
        }

        sqlx::query(
            "SELECT id FROM videos \
             WHERE id IN (SELECT video_id FROM likes WHERE user_id = $1) \
             ORDER BY id FOR UPDATE",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let adjusted = sqlx::query(
            "UPDATE videos SET total_likes = total_likes - 1 \
             WHERE id IN (SELECT video_id FROM likes WHERE user_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            user_id = id,
            adjusted_videos = adjusted.rows_affected(),
            "Deleted user"
        );
        Ok(result.rows_affected() > 0)
    }
}
