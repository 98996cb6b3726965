//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and patches, validated with `validator`

pub mod rendition;
pub mod statistics;
pub mod user;
pub mod video;
