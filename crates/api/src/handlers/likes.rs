//! Handlers for `/videos/{id}/likes/`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use vidcat_core::error::CoreError;
use vidcat_core::likes::{LikeOutcome, UnlikeOutcome, LIKED_STATUS};
use vidcat_core::types::DbId;
use vidcat_db::repositories::LikeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Body returned by a successful like.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub status: &'static str,
}

/// POST /api/v1/videos/{id}/likes/
///
/// 201 when a new like was recorded, 400 if the caller already liked the
/// video, 404 if the video does not exist.
pub async fn like(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<LikeResponse>)> {
    match LikeRepo::like(&state.pool, video_id, user.user_id).await? {
        LikeOutcome::Liked { total_likes } => {
            tracing::info!(video_id, user_id = user.user_id, total_likes, "Video liked");
            Ok((
                StatusCode::CREATED,
                Json(LikeResponse {
                    status: LIKED_STATUS,
                }),
            ))
        }
        LikeOutcome::AlreadyLiked => Err(AppError::BadRequest("Already liked".into())),
        LikeOutcome::VideoNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        })),
    }
}

/// DELETE /api/v1/videos/{id}/likes/
///
/// 204 when the like was removed, 404 if the video is missing or unpublished
/// or the caller had not liked it.
pub async fn unlike(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    user: AuthUser,
) -> AppResult<StatusCode> {
    match LikeRepo::unlike(&state.pool, video_id, user.user_id).await? {
        UnlikeOutcome::Unliked { total_likes } => {
            tracing::info!(video_id, user_id = user.user_id, total_likes, "Video unliked");
            Ok(StatusCode::NO_CONTENT)
        }
        UnlikeOutcome::NotLiked => Err(AppError::NotFound("Like not found".into())),
        UnlikeOutcome::VideoNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        })),
    }
}
