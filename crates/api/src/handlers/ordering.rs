//! Handlers for the grouped view and reorder actions.
//!
//! Single-step moves go through the organizer (optimistic update with
//! rollback); the `PUT .../order` endpoints take a full order array from a
//! drag-and-drop session and hand it straight to the order store.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use atelier_core::ordering::{self, Direction, ProjectEntry};
use atelier_core::project as rules;
use atelier_core::store::OrderStore;
use atelier_core::types::DbId;
use atelier_db::models::project::Project;
use atelier_db::repositories::ProjectRepo;
use atelier_db::store::PgPortfolioStore;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for a single-step project move.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Body for a single-step category move.
#[derive(Debug, Deserialize)]
pub struct MoveCategoryRequest {
    pub index: usize,
    pub direction: Direction,
}

/// Body for saving a full category order (drag-and-drop).
#[derive(Debug, Deserialize)]
pub struct CategoryOrderRequest {
    pub labels: Vec<String>,
}

/// Body for saving a full within-category project order (drag-and-drop).
#[derive(Debug, Deserialize)]
pub struct ProjectOrderRequest {
    pub ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// GET /portfolio
// ---------------------------------------------------------------------------

/// One category of the public listing, with full project rows.
#[derive(Debug, Serialize)]
pub struct PortfolioGroup {
    pub category: String,
    pub projects: Vec<Project>,
}

/// The public grouped listing: published projects only, full content
/// rows, categories ordered by the saved order with novel ones appended.
/// Categories left empty by unpublished drafts disappear on their own.
pub async fn public_portfolio(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = PgPortfolioStore::new(state.pool.clone());
    let rows = ProjectRepo::list_published(&state.pool).await?;
    let saved_order = store.category_order().await?;

    let entries: Vec<ProjectEntry> = rows.iter().map(|p| p.to_entry()).collect();
    let view = ordering::group_projects(&entries, &saved_order);

    let groups: Vec<PortfolioGroup> = view
        .categories
        .into_iter()
        .map(|group| PortfolioGroup {
            projects: group
                .projects
                .iter()
                .filter_map(|entry| rows.iter().find(|r| r.id == entry.id).cloned())
                .collect(),
            category: group.category,
        })
        .collect();
    Ok(Json(DataResponse { data: groups }))
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// The editor grouped view, drafts included.
pub async fn grouped(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let organizer = super::loaded_organizer(&state).await?;
    Ok(Json(DataResponse {
        data: organizer.grouped_view(),
    }))
}

// ---------------------------------------------------------------------------
// POST /categories/move
// ---------------------------------------------------------------------------

/// Move a category one step up or down and return the updated view.
pub async fn move_category(
    State(state): State<AppState>,
    Json(input): Json<MoveCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let mut organizer = super::loaded_organizer(&state).await?;
    organizer.move_category(input.index, input.direction).await?;
    tracing::info!(index = input.index, "Category moved");
    Ok(Json(DataResponse {
        data: organizer.grouped_view(),
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/order
// ---------------------------------------------------------------------------

/// The current merged category order.
pub async fn get_category_order(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let organizer = super::loaded_organizer(&state).await?;
    Ok(Json(DataResponse {
        data: organizer.category_order().to_vec(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /categories/order
// ---------------------------------------------------------------------------

/// Save a full category order produced by a drag-and-drop session.
pub async fn set_category_order(
    State(state): State<AppState>,
    Json(input): Json<CategoryOrderRequest>,
) -> AppResult<impl IntoResponse> {
    for label in &input.labels {
        rules::validate_category(label)?;
    }
    let store = PgPortfolioStore::new(state.pool.clone());
    store.set_category_order(&input.labels).await?;
    tracing::info!(count = input.labels.len(), "Category order saved");

    let organizer = super::loaded_organizer(&state).await?;
    Ok(Json(DataResponse {
        data: organizer.grouped_view(),
    }))
}

// ---------------------------------------------------------------------------
// POST /projects/{id}/move
// ---------------------------------------------------------------------------

/// Move a project one step within its category and return the updated view.
pub async fn move_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let mut organizer = super::loaded_organizer(&state).await?;
    organizer.move_project(id, input.direction).await?;
    tracing::info!(id, "Project moved");
    Ok(Json(DataResponse {
        data: organizer.grouped_view(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /projects/order
// ---------------------------------------------------------------------------

/// Save a full within-category project order produced by a drag-and-drop
/// session. Positions in `ids` become the new display_order ranks.
pub async fn set_project_order(
    State(state): State<AppState>,
    Json(input): Json<ProjectOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let store = PgPortfolioStore::new(state.pool.clone());
    store.set_project_order(&input.ids).await?;
    tracing::info!(count = input.ids.len(), "Project order saved");

    let organizer = super::loaded_organizer(&state).await?;
    Ok(Json(DataResponse {
        data: organizer.grouped_view(),
    }))
}
