//! Primitive aliases shared by every crate.

/// Primary key of every table (`BIGSERIAL`).
pub type DbId = i64;

/// Stored as `TIMESTAMPTZ`, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
