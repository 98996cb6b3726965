//! Route definitions for videos, likes and owner statistics.
//!
//! Paths keep their trailing slash. Static segments (`ids`,
//! `statistics-*`) take precedence over `{id}`.
//!
//! ```text
//! GET    /videos/                         list
//! POST   /videos/                         create
//! GET    /videos/ids/                     list_published_ids
//! GET    /videos/statistics-subquery/     likes_by_owner_subquery
//! GET    /videos/statistics-group-by/     likes_by_owner_group_by
//! GET    /videos/{id}/                    get_by_id
//! PATCH  /videos/{id}/                    update
//! DELETE /videos/{id}/                    delete
//! POST   /videos/{id}/likes/              like
//! DELETE /videos/{id}/likes/              unlike
//! POST   /videos/{id}/renditions/         add_rendition
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{likes, statistics, video};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos/", get(video::list).post(video::create))
        .route("/videos/ids/", get(video::list_published_ids))
        .route(
            "/videos/statistics-subquery/",
            get(statistics::likes_by_owner_subquery),
        )
        .route(
            "/videos/statistics-group-by/",
            get(statistics::likes_by_owner_group_by),
        )
        .route(
            "/videos/{id}/",
            get(video::get_by_id)
                .patch(video::update)
                .delete(video::delete),
        )
        .route("/videos/{id}/likes/", post(likes::like).delete(likes::unlike))
        .route("/videos/{id}/renditions/", post(video::add_rendition))
}
