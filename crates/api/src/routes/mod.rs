pub mod auth;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
///
/// /videos/                             list (optional auth), create (auth)
/// /videos/ids/                         published ids (admin only)
/// /videos/statistics-subquery/         owner ranking, subquery (admin only)
/// /videos/statistics-group-by/         owner ranking, group-by (admin only)
/// /videos/{id}/                        get (optional auth), update, delete
/// /videos/{id}/likes/                  like (POST), unlike (DELETE)
/// /videos/{id}/renditions/             attach rendition (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(video::router())
}
