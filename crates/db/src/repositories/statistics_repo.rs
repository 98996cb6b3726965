//! Owner rankings by likes on published videos.
//!
//! Two independent queries compute the same ranking. They share no SQL so
//! their plans can be compared; `vidcat_core::statistics::reconcile` checks
//! they agree. Both order by `likes_sum DESC, username ASC`.
//!
//! Neither query locks anything. A ranking taken while a like is in flight
//! reflects the counters as of the last commit.

use sqlx::PgPool;

use crate::models::statistics::{GroupByLikesRow, SubqueryLikesRow};

/// Per-user scalar subquery, correlated on ownership. Users whose subquery
/// yields no row (no published videos) come back NULL and are dropped.
const SUBQUERY_SQL: &str = "\
    SELECT id, username, likes_sum FROM (
        SELECT u.id,
               u.username,
               (SELECT SUM(v.total_likes)
                  FROM videos v
                 WHERE v.owner_id = u.id AND v.is_published
                 GROUP BY v.owner_id) AS likes_sum
          FROM users u
    ) ranked
    WHERE likes_sum IS NOT NULL
    ORDER BY likes_sum DESC, username ASC";

/// Published videos grouped by owner username.
const GROUP_BY_SQL: &str = "\
    SELECT u.username, SUM(v.total_likes) AS likes_sum
      FROM videos v
      JOIN users u ON u.id = v.owner_id
     WHERE v.is_published
     GROUP BY u.username
     ORDER BY likes_sum DESC, u.username ASC";

/// Provides the two owner-ranking strategies.
pub struct StatisticsRepo;

impl StatisticsRepo {
    /// Rank owners using a correlated scalar subquery per user.
    pub async fn likes_by_owner_subquery(
        pool: &PgPool,
    ) -> Result<Vec<SubqueryLikesRow>, sqlx::Error> {
        sqlx::query_as::<_, SubqueryLikesRow>(SUBQUERY_SQL)
            .fetch_all(pool)
            .await
    }

    /// Rank owners by grouping published videos on the owner's username.
    pub async fn likes_by_owner_group_by(
        pool: &PgPool,
    ) -> Result<Vec<GroupByLikesRow>, sqlx::Error> {
        sqlx::query_as::<_, GroupByLikesRow>(GROUP_BY_SQL)
            .fetch_all(pool)
            .await
    }
}
