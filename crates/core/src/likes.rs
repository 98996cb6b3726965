//! Results of the like/unlike operations.
//!
//! The repository reports what happened inside its transaction; the HTTP
//! layer decides the status code. Every variant other than `Liked` and
//! `Unliked` means the counter was left untouched.

/// Body value returned by a successful like.
pub const LIKED_STATUS: &str = "liked";

/// Outcome of liking a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// A new like edge was inserted and the counter incremented.
    Liked { total_likes: i32 },
    /// The caller had already liked this video.
    AlreadyLiked,
    /// No video with the requested id exists.
    VideoNotFound,
}

/// Outcome of removing a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlikeOutcome {
    /// The like edge was deleted and the counter decremented.
    Unliked { total_likes: i32 },
    /// The caller had not liked this video.
    NotLiked,
    /// The video does not exist or is not published.
    VideoNotFound,
}

impl LikeOutcome {
    /// Whether the operation changed the like counter.
    pub fn mutated(&self) -> bool {
        matches!(self, LikeOutcome::Liked { .. })
    }
}

impl UnlikeOutcome {
    /// Whether the operation changed the like counter.
    pub fn mutated(&self) -> bool {
        matches!(self, UnlikeOutcome::Unliked { .. })
    }
}
