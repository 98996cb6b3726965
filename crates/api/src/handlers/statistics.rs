//! Administrator-only owner rankings.

use axum::extract::State;
use axum::Json;
use vidcat_db::models::statistics::{GroupByLikesRow, SubqueryLikesRow};
use vidcat_db::repositories::StatisticsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/videos/statistics-subquery/
///
/// Owners ranked by likes on published videos, via a correlated subquery.
pub async fn likes_by_owner_subquery(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<Vec<SubqueryLikesRow>>> {
    let rows = StatisticsRepo::likes_by_owner_subquery(&state.pool).await?;
    tracing::debug!(user_id = admin.user_id, owners = rows.len(), "Subquery statistics");
    Ok(Json(rows))
}

/// GET /api/v1/videos/statistics-group-by/
///
/// Owners ranked by likes on published videos, via GROUP BY username.
pub async fn likes_by_owner_group_by(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<Vec<GroupByLikesRow>>> {
    let rows = StatisticsRepo::likes_by_owner_group_by(&state.pool).await?;
    tracing::debug!(user_id = admin.user_id, owners = rows.len(), "Group-by statistics");
    Ok(Json(rows))
}
