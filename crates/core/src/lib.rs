//! Domain types for the video catalog.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build on
//! these types so the rules (visibility, rendition tiers, like outcomes,
//! report reconciliation) are defined once.

pub mod error;
pub mod likes;
pub mod quality;
pub mod roles;
pub mod statistics;
pub mod types;
pub mod visibility;
