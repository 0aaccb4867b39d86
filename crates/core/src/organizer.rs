//! The reorder/publish state machine.
//!
//! [`ProjectOrganizer`] holds the authoritative in-memory copy of the flat
//! project collection and the category order, and mediates every reorder
//! and publish action: mutate in memory first (optimistic), then persist,
//! then roll back if persistence failed. Methods take `&mut self`, so the
//! borrow checker enforces the single-writer assumption — overlapping
//! actions against the same organizer cannot be expressed.

use crate::error::CoreError;
use crate::ordering::{self, Direction, GroupedView, ProjectEntry};
use crate::store::{OrderStore, ProjectStore};
use crate::types::DbId;

/// Maintains the grouped view and reconciles optimistic in-memory state
/// with persistence results.
pub struct ProjectOrganizer<S> {
    store: S,
    projects: Vec<ProjectEntry>,
    category_order: Vec<String>,
}

impl<S> ProjectOrganizer<S>
where
    S: ProjectStore + OrderStore,
{
    /// Create an organizer with empty in-memory state. Call
    /// [`ProjectOrganizer::load`] before issuing actions.
    pub fn new(store: S) -> Self {
        Self {
            store,
            projects: Vec::new(),
            category_order: Vec::new(),
        }
    }

    /// The current flat project collection.
    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// The current merged category order.
    pub fn category_order(&self) -> &[String] {
        &self.category_order
    }

    /// The grouped view derived from current in-memory state.
    pub fn grouped_view(&self) -> GroupedView {
        ordering::group_projects(&self.projects, &self.category_order)
    }

    /// Fetch the project collection and the saved category order (two
    /// independent reads, issued concurrently), merge them, and replace the
    /// in-memory state.
    ///
    /// If either fetch fails the error propagates and prior state is left
    /// intact.
    pub async fn load(&mut self) -> Result<GroupedView, CoreError> {
        let (projects, saved_order) =
            tokio::join!(self.store.list_entries(), self.store.category_order());
        let projects = projects?;
        let saved_order = saved_order?;

        self.category_order = ordering::merge_category_order(&saved_order, &projects);
        self.projects = projects;
        Ok(self.grouped_view())
    }

    /// Move the category at `index` one step up or down.
    ///
    /// A boundary move is a no-op. Otherwise the two adjacent labels are
    /// swapped in memory, the new sequence is persisted, and the swap is
    /// reverted if persistence fails.
    pub async fn move_category(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<(), CoreError> {
        if index >= self.category_order.len() {
            return Err(CoreError::Validation(format!(
                "Category index {index} out of range (have {})",
                self.category_order.len()
            )));
        }
        let neighbor = match direction {
            Direction::Up => match index.checked_sub(1) {
                Some(n) => n,
                None => return Ok(()),
            },
            Direction::Down => {
                if index + 1 >= self.category_order.len() {
                    return Ok(());
                }
                index + 1
            }
        };

        self.category_order.swap(index, neighbor);
        if let Err(err) = self.store.set_category_order(&self.category_order).await {
            self.category_order.swap(index, neighbor);
            tracing::warn!(index, error = %err, "Category move failed; order reverted");
            return Err(err);
        }
        Ok(())
    }

    /// Move a project one step up or down within its category.
    ///
    /// Computes the full re-ranked id sequence for the category, assigns
    /// `display_order = rank` to every member in memory, then persists the
    /// sequence. On failure the pre-swap snapshot is restored — except
    /// after a partial application, where local state is left as-is and
    /// the caller must [`ProjectOrganizer::load`] to resynchronize with
    /// whatever subset of rows actually persisted.
    pub async fn move_project(
        &mut self,
        project_id: DbId,
        direction: Direction,
    ) -> Result<(), CoreError> {
        let Some(ids) = ordering::reranked_ids(&self.projects, project_id, direction) else {
            // Boundary move or unknown id: distinguish the two.
            if self.projects.iter().any(|p| p.id == project_id) {
                return Ok(());
            }
            return Err(CoreError::NotFound {
                entity: "project",
                id: project_id,
            });
        };

        let snapshot = self.projects.clone();
        for (rank, id) in ids.iter().enumerate() {
            if let Some(entry) = self.projects.iter_mut().find(|p| p.id == *id) {
                entry.display_order = rank as i32;
            }
        }

        match self.store.set_project_order(&ids).await {
            Ok(()) => Ok(()),
            Err(err @ CoreError::PartialOrderApplication { .. }) => {
                // Some rows persisted, some did not; neither the snapshot
                // nor the optimistic state is trustworthy now. Surface the
                // error and let the caller reload.
                tracing::warn!(project_id, error = %err, "Project order partially applied; reload required");
                Err(err)
            }
            Err(err) => {
                self.projects = snapshot;
                tracing::warn!(project_id, error = %err, "Project move failed; order reverted");
                Err(err)
            }
        }
    }

    /// Flip the published flag on a project, returning the new value.
    ///
    /// The flip is applied in memory first; if persisting fails the flag is
    /// flipped back, so a failed toggle is observably a no-op.
    pub async fn toggle_publish(&mut self, project_id: DbId) -> Result<bool, CoreError> {
        let entry = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(CoreError::NotFound {
                entity: "project",
                id: project_id,
            })?;

        entry.published = !entry.published;
        let published = entry.published;

        if let Err(err) = self.store.set_published(project_id, published).await {
            if let Some(entry) = self.projects.iter_mut().find(|p| p.id == project_id) {
                entry.published = !published;
            }
            tracing::warn!(project_id, error = %err, "Publish toggle failed; flag reverted");
            return Err(err);
        }
        Ok(published)
    }

    /// Delete a project, then reload for a fully consistent grouped view.
    ///
    /// Survivors' `display_order` is not compacted; the resulting gaps are
    /// harmless because sorting is the only requirement.
    pub async fn delete(&mut self, project_id: DbId) -> Result<GroupedView, CoreError> {
        self.store.delete_project(project_id).await?;
        self.load().await
    }
}
