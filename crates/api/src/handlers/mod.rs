//! HTTP handlers.

pub mod ordering;
pub mod project;

use atelier_core::organizer::ProjectOrganizer;
use atelier_db::store::PgPortfolioStore;

use crate::error::AppResult;
use crate::state::AppState;

/// Build an organizer over the request's pool and load current state.
///
/// Handlers are per-request, so each action works on a freshly loaded
/// snapshot; the optimistic-update/rollback cycle happens within the one
/// request.
pub(crate) async fn loaded_organizer(
    state: &AppState,
) -> AppResult<ProjectOrganizer<PgPortfolioStore>> {
    let mut organizer = ProjectOrganizer::new(PgPortfolioStore::new(state.pool.clone()));
    organizer.load().await?;
    Ok(organizer)
}
