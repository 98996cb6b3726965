//! Who may see which video.
//!
//! Administrators see every video. Authenticated users see published videos
//! plus their own unpublished ones. Anonymous callers see published videos
//! only.
//!
//! [`Viewer::can_view`] states the rule for a single row. List and detail
//! queries must not filter after fetching; they bind the same rule into SQL
//! through `vidcat_db::visibility::VisibilityFilter`.

use crate::types::DbId;

/// The caller of a request, as far as visibility is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    User(DbId),
    Admin(DbId),
}

impl Viewer {
    /// Build a viewer from an optional authenticated identity.
    pub fn from_identity(user_id: Option<DbId>, is_admin: bool) -> Self {
        match user_id {
            None => Viewer::Anonymous,
            Some(id) if is_admin => Viewer::Admin(id),
            Some(id) => Viewer::User(id),
        }
    }

    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(id) | Viewer::Admin(id) => Some(*id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::Admin(_))
    }

    /// Whether this viewer may see a video with the given owner and state.
    pub fn can_view(&self, owner_id: DbId, is_published: bool) -> bool {
        match self {
            Viewer::Admin(_) => true,
            Viewer::User(id) => is_published || *id == owner_id,
            Viewer::Anonymous => is_published,
        }
    }

    /// Whether this viewer may modify a video (rename, publish, delete,
    /// attach renditions). Only the owner and administrators may.
    pub fn can_manage(&self, owner_id: DbId) -> bool {
        match self {
            Viewer::Admin(_) => true,
            Viewer::User(id) => *id == owner_id,
            Viewer::Anonymous => false,
        }
    }
}
