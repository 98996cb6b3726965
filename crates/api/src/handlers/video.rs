//! Handlers for the `/videos` resource.
//!
//! Reads go through the visibility filter in SQL. Writes (update, delete,
//! renditions) are limited to the owner and administrators; a caller who
//! cannot see a video gets 404 rather than 403 so its existence is not leaked.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;
use vidcat_core::error::CoreError;
use vidcat_core::types::{DbId, Timestamp};
use vidcat_core::visibility::Viewer;
use vidcat_db::models::rendition::{CreateRendition, Rendition};
use vidcat_db::models::video::{CreateVideo, UpdateVideo, Video, VideoId, VideoWithOwner};
use vidcat_db::repositories::{RenditionRepo, VideoRepo};
use vidcat_db::visibility::VisibilityFilter;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, Path};
use crate::middleware::auth::{AuthUser, OptionalAuth};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// A video as returned to callers, with its renditions nested.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: DbId,
    pub owner: DbId,
    pub owner_username: String,
    pub name: String,
    pub is_published: bool,
    pub total_likes: i32,
    pub created_at: Timestamp,
    pub files: Vec<Rendition>,
}

impl VideoResponse {
    fn new(video: VideoWithOwner, files: Vec<Rendition>) -> Self {
        Self {
            id: video.id,
            owner: video.owner_id,
            owner_username: video.owner_username,
            name: video.name,
            is_published: video.is_published,
            total_likes: video.total_likes,
            created_at: video.created_at,
            files,
        }
    }
}

fn video_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Video", id })
}

/// Load a single visible video with its renditions.
async fn load_visible(state: &AppState, id: DbId, viewer: &Viewer) -> AppResult<VideoResponse> {
    let video = VideoRepo::find_visible(&state.pool, id, &VisibilityFilter::from(viewer))
        .await?
        .ok_or_else(|| video_not_found(id))?;
    let files = RenditionRepo::list_by_video(&state.pool, id).await?;
    Ok(VideoResponse::new(video, files))
}

/// Fetch a video the caller may modify.
///
/// 404 if absent or invisible to the caller, 403 if visible but not theirs.
async fn load_manageable(state: &AppState, id: DbId, viewer: &Viewer) -> AppResult<Video> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|v| viewer.can_view(v.owner_id, v.is_published))
        .ok_or_else(|| video_not_found(id))?;
    if !viewer.can_manage(video.owner_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner may modify this video".into(),
        )));
    }
    Ok(video)
}

/// GET /api/v1/videos/
///
/// All videos visible to the caller, newest first, with renditions.
pub async fn list(
    State(state): State<AppState>,
    auth: OptionalAuth,
) -> AppResult<Json<Vec<VideoResponse>>> {
    let viewer = auth.viewer();
    let videos = VideoRepo::list_visible(&state.pool, &VisibilityFilter::from(&viewer)).await?;

    let ids: Vec<DbId> = videos.iter().map(|v| v.id).collect();
    let mut files_by_video: HashMap<DbId, Vec<Rendition>> = HashMap::new();
    for rendition in RenditionRepo::list_by_videos(&state.pool, &ids).await? {
        files_by_video
            .entry(rendition.video_id)
            .or_default()
            .push(rendition);
    }

    let response = videos
        .into_iter()
        .map(|video| {
            let files = files_by_video.remove(&video.id).unwrap_or_default();
            VideoResponse::new(video, files)
        })
        .collect();
    Ok(Json(response))
}

/// GET /api/v1/videos/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    auth: OptionalAuth,
) -> AppResult<Json<VideoResponse>> {
    let video = load_visible(&state, id, &auth.viewer()).await?;
    Ok(Json(video))
}

/// POST /api/v1/videos/
///
/// Create a video owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<CreateVideo>,
) -> AppResult<(StatusCode, Json<VideoResponse>)> {
    input.validate()?;
    let video = VideoRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(video_id = video.id, user_id = user.user_id, "Video created");

    let response = load_visible(&state, video.id, &user.viewer()).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/v1/videos/{id}/
///
/// Rename and/or (un)publish a video. The like counter is not writable.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
    JsonBody(input): JsonBody<UpdateVideo>,
) -> AppResult<Json<VideoResponse>> {
    input.validate()?;
    let viewer = user.viewer();
    load_manageable(&state, id, &viewer).await?;

    VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| video_not_found(id))?;
    tracing::info!(video_id = id, user_id = user.user_id, "Video updated");

    let response = load_visible(&state, id, &viewer).await?;
    Ok(Json(response))
}

/// DELETE /api/v1/videos/{id}/
///
/// Delete a video together with its renditions and likes.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
) -> AppResult<StatusCode> {
    load_manageable(&state, id, &user.viewer()).await?;

    if !VideoRepo::delete(&state.pool, id).await? {
        return Err(video_not_found(id));
    }
    tracing::info!(video_id = id, user_id = user.user_id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/videos/{id}/renditions/
///
/// Attach a rendition. A second rendition of the same quality is a 409.
pub async fn add_rendition(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
    JsonBody(input): JsonBody<CreateRendition>,
) -> AppResult<(StatusCode, Json<Rendition>)> {
    input.validate()?;
    load_manageable(&state, id, &user.viewer()).await?;

    let rendition = RenditionRepo::create(&state.pool, id, &input).await?;
    tracing::info!(
        video_id = id,
        rendition_id = rendition.id,
        quality = input.quality.as_str(),
        "Rendition added"
    );
    Ok((StatusCode::CREATED, Json(rendition)))
}

/// GET /api/v1/videos/ids/
///
/// IDs of all published videos. Administrators only.
pub async fn list_published_ids(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<VideoId>>> {
    let ids = VideoRepo::list_published_ids(&state.pool).await?;
    Ok(Json(ids))
}
