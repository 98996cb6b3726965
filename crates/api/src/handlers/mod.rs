pub mod auth;
pub mod likes;
pub mod statistics;
pub mod video;
