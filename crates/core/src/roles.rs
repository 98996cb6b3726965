//! Well-known role name constants carried in access-token claims.
//!
//! The database stores a single `users.is_staff` flag; [`role_for_staff`]
//! maps it onto one of these names.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Role name for a user with the given `is_staff` flag.
pub fn role_for_staff(is_staff: bool) -> &'static str {
    if is_staff {
        ROLE_ADMIN
    } else {
        ROLE_USER
    }
}
