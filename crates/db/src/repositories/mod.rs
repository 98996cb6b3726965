//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod like_repo;
pub mod rendition_repo;
pub mod statistics_repo;
pub mod user_repo;
pub mod video_repo;

pub use like_repo::LikeRepo;
pub use rendition_repo::RenditionRepo;
pub use statistics_repo::StatisticsRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
