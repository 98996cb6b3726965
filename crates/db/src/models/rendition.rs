//! Video rendition (quality-tier file variant) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vidcat_core::quality::RenditionQuality;
use vidcat_core::types::{DbId, Timestamp};

/// A row from the `video_renditions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rendition {
    pub id: DbId,
    #[serde(rename = "video")]
    pub video_id: DbId,
    #[serde(rename = "file")]
    pub file_path: String,
    #[sqlx(try_from = "String")]
    pub quality: RenditionQuality,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// DTO for attaching a rendition to a video.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRendition {
    #[validate(length(min = 1))]
    pub file_path: String,
    pub quality: RenditionQuality,
}
