//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{ordering, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// PUT    /order         -> set_project_order
/// GET    /slug/{slug}   -> get_by_slug
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/publish  -> toggle_publish
/// POST   /{id}/move     -> move_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/order", put(ordering::set_project_order))
        .route("/slug/{slug}", get(project::get_by_slug))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/publish", post(project::toggle_publish))
        .route("/{id}/move", post(ordering::move_project))
}
