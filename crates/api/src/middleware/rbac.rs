//! Administrator gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vidcat_core::error::CoreError;
use vidcat_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated administrator. Anonymous callers get 401, authenticated
/// non-administrators get 403.
///
/// The token must carry the admin role and the account must still be staff
/// in the database, so revoking `is_staff` takes effect on the next request
/// rather than when the token expires.
pub struct RequireAdmin(pub AuthUser);

fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden("Permission denied".into()))
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::info!(user_id = user.user_id, "Non-admin refused");
            return Err(forbidden());
        }

        match UserRepo::find_by_id(&state.pool, user.user_id).await? {
            Some(account) if account.is_staff => Ok(RequireAdmin(user)),
            Some(_) => {
                tracing::info!(user_id = user.user_id, "Admin token for revoked staff refused");
                Err(forbidden())
            }
            None => Err(AppError::Core(CoreError::Unauthorized(
                "User no longer exists".into(),
            ))),
        }
    }
}
