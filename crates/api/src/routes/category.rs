//! Route definitions for the `/categories` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ordering;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET  /        -> grouped (editor view, drafts included)
/// POST /move    -> move_category
/// GET  /order   -> get_category_order
/// PUT  /order   -> set_category_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ordering::grouped))
        .route("/move", post(ordering::move_category))
        .route(
            "/order",
            get(ordering::get_category_order).put(ordering::set_category_order),
        )
}
