//! Persistence collaborator traits.
//!
//! The organizer never talks to a database directly; it goes through these
//! traits so the engine stays independent of the storage vendor and can be
//! driven by an in-memory double in tests. `atelier-db` provides the
//! PostgreSQL implementation.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::ordering::ProjectEntry;
use crate::types::DbId;

/// Persists and retrieves the two order facts: the relative order of
/// categories, and the relative order of projects within each category.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// The saved category order. An empty sequence means "never saved",
    /// which is not an error; an I/O failure is surfaced as
    /// [`CoreError::Persistence`] and must never be mistaken for an empty
    /// order.
    async fn category_order(&self) -> Result<Vec<String>, CoreError>;

    /// Upsert the singleton category-order record. Idempotent: replaying an
    /// identical sequence produces no visible change.
    async fn set_category_order(&self, labels: &[String]) -> Result<(), CoreError>;

    /// Assign `display_order = position` for exactly the listed project
    /// ids, leaving every other row untouched.
    ///
    /// Implementations attempt a single atomic write first and fall back to
    /// sequential per-row updates when the bulk path fails; the fallback
    /// surfaces its first per-row failure as
    /// [`CoreError::PartialOrderApplication`] without rolling back the
    /// rows already written.
    async fn set_project_order(&self, ids_in_order: &[DbId]) -> Result<(), CoreError>;
}

/// Read and mutate the flat project collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, published or not, as ordering-engine entries.
    async fn list_entries(&self) -> Result<Vec<ProjectEntry>, CoreError>;

    /// Set the published flag on one project.
    async fn set_published(&self, id: DbId, published: bool) -> Result<(), CoreError>;

    /// Delete one project. Survivors keep their `display_order`; gaps are
    /// tolerated because sorting, not density, is the only requirement.
    async fn delete_project(&self, id: DbId) -> Result<(), CoreError>;
}
