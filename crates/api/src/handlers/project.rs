//! Handlers for project CRUD and publication.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use atelier_core::error::CoreError;
use atelier_core::project as rules;
use atelier_core::types::DbId;
use atelier_db::models::project::{CreateProject, Project, UpdateProject};
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a project exists, returning the full row.
async fn ensure_project_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "project",
            id,
        })
    })
}

/// Validate the fields of a create request.
fn validate_create(input: &CreateProject) -> AppResult<()> {
    rules::validate_category(&input.category)?;
    rules::validate_slug(&input.slug)?;
    rules::validate_title(&input.title)?;
    if let Some(title_ja) = &input.title_ja {
        rules::validate_title(title_ja)?;
    }
    for (name, value) in [
        ("description", &input.description),
        ("description_ja", &input.description_ja),
        ("challenge", &input.challenge),
        ("challenge_ja", &input.challenge_ja),
        ("solution", &input.solution),
        ("solution_ja", &input.solution_ja),
    ] {
        if let Some(value) = value {
            rules::validate_text_field(name, value)?;
        }
    }
    Ok(())
}

/// Validate whichever fields an update request provides.
fn validate_update(input: &UpdateProject) -> AppResult<()> {
    if let Some(category) = &input.category {
        rules::validate_category(category)?;
    }
    if let Some(slug) = &input.slug {
        rules::validate_slug(slug)?;
    }
    if let Some(title) = &input.title {
        rules::validate_title(title)?;
    }
    if let Some(title_ja) = &input.title_ja {
        rules::validate_title(title_ja)?;
    }
    for (name, value) in [
        ("description", &input.description),
        ("description_ja", &input.description_ja),
        ("challenge", &input.challenge),
        ("challenge_ja", &input.challenge_ja),
        ("solution", &input.solution),
        ("solution_ja", &input.solution_ja),
    ] {
        if let Some(value) = value {
            rules::validate_text_field(name, value)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// List every project, drafts included (the editor listing).
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ProjectRepo::list_all(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed projects");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

/// Create a new project.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;
    let created = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, slug = %created.slug, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}
// ---------------------------------------------------------------------------

/// Get a single project by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ensure_project_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// GET /projects/slug/{slug}
// ---------------------------------------------------------------------------

/// Get a single project by slug (the public detail-page key).
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No project with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}
// ---------------------------------------------------------------------------

/// Update a project. Only provided fields are applied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;
    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "project",
                id,
            })
        })?;
    tracing::info!(id, "Project updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /projects/{id}
// ---------------------------------------------------------------------------

/// Delete a project and return the refreshed grouped view.
///
/// Goes through the organizer so the response reflects a full reload;
/// survivors keep their display_order (gaps are fine).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut organizer = super::loaded_organizer(&state).await?;
    let view = organizer.delete(id).await?;
    tracing::info!(id, "Project deleted");
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /projects/{id}/publish
// ---------------------------------------------------------------------------

/// New publication state after a toggle.
#[derive(Debug, Serialize)]
pub struct PublishState {
    pub published: bool,
}

/// Toggle the published flag on a project.
pub async fn toggle_publish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut organizer = super::loaded_organizer(&state).await?;
    let published = organizer.toggle_publish(id).await?;
    tracing::info!(id, published, "Publish flag toggled");
    Ok(Json(DataResponse {
        data: PublishState { published },
    }))
}
