//! Row shapes produced by the two owner-ranking queries.

use serde::Serialize;
use sqlx::FromRow;
use vidcat_core::statistics::OwnerLikes;
use vidcat_core::types::DbId;

/// Row from the correlated-subquery ranking: one per user with published videos.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubqueryLikesRow {
    pub id: DbId,
    pub username: String,
    pub likes_sum: i64,
}

/// Row from the group-by ranking: one per owner username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupByLikesRow {
    pub username: String,
    pub likes_sum: i64,
}

impl From<SubqueryLikesRow> for OwnerLikes {
    fn from(row: SubqueryLikesRow) -> Self {
        OwnerLikes {
            username: row.username,
            likes_sum: row.likes_sum,
        }
    }
}

impl From<GroupByLikesRow> for OwnerLikes {
    fn from(row: GroupByLikesRow) -> Self {
        OwnerLikes {
            username: row.username,
            likes_sum: row.likes_sum,
        }
    }
}
