//! Route tree.

pub mod category;
pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio                       public grouped view (published only)
///
/// /projects                        list, create
/// /projects/order                  save full order (PUT)
/// /projects/slug/{slug}            get by slug
/// /projects/{id}                   get, update, delete
/// /projects/{id}/publish           toggle publish (POST)
/// /projects/{id}/move              single-step move (POST)
///
/// /categories                      editor grouped view (GET)
/// /categories/move                 single-step move (POST)
/// /categories/order                get, save full order (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(handlers::ordering::public_portfolio))
        .nest("/projects", project::router())
        .nest("/categories", category::router())
}
