//! Rendition quality tiers.
//!
//! Stored in `video_renditions.quality` as the short codes `HD`, `FHD` and
//! `UHD`. The tier names `standard`, `high` and `ultra` are accepted as
//! input aliases.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenditionQuality {
    #[serde(rename = "HD", alias = "standard")]
    Hd,
    #[serde(rename = "FHD", alias = "high")]
    Fhd,
    #[serde(rename = "UHD", alias = "ultra")]
    Uhd,
}

impl RenditionQuality {
    pub const ALL: [RenditionQuality; 3] = [Self::Hd, Self::Fhd, Self::Uhd];

    /// Parse a quality code from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid rendition quality '{s}'. Must be one of: HD, FHD, UHD"
                ))
            })
    }

    /// Convert to the database code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hd => "HD",
            Self::Fhd => "FHD",
            Self::Uhd => "UHD",
        }
    }
}

/// Lets `sqlx` decode the `quality` text column straight into the enum.
impl TryFrom<String> for RenditionQuality {
    type Error = CoreError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_str_db(&code)
    }
}
