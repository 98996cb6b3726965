//! Bearer-token extractors.
//!
//! [`AuthUser`] requires a valid token. [`OptionalAuth`] lets requests
//! without an `Authorization` header through as anonymous, but a header that
//! is present and fails validation is still a 401.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use vidcat_core::error::CoreError;
use vidcat_core::types::DbId;
use vidcat_core::visibility::Viewer;

use crate::auth::jwt::{decode_access_token, Claims};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The caller identified by a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub is_admin: bool,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_identity(Some(self.user_id), self.is_admin)
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            is_admin: claims.is_admin(),
            user_id: claims.sub,
        }
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

/// Resolve the caller from the `Authorization` header.
///
/// `Ok(None)` when no header was sent at all.
fn authenticate(parts: &Parts, state: &AppState) -> AppResult<Option<AuthUser>> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Expected 'Authorization: Bearer <token>'"))?;

    let claims = decode_access_token(token, &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        unauthorized("Invalid or expired token")
    })?;

    Ok(Some(AuthUser::from(claims)))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)?
            .ok_or_else(|| unauthorized("Authentication credentials were not provided"))
    }
}

/// The caller if a token was sent, otherwise anonymous.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthUser>);

impl OptionalAuth {
    pub fn viewer(&self) -> Viewer {
        self.0.as_ref().map_or(Viewer::Anonymous, AuthUser::viewer)
    }
}

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(OptionalAuth)
    }
}
