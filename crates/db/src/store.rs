//! PostgreSQL implementation of the core engine's persistence traits.
//!
//! Order writes go through the single-statement bulk update first; if that
//! path fails, the per-row fallback applies updates sequentially in array
//! order and surfaces the first individual failure as a partial
//! application, leaving already-written rows in place. A failure before
//! anything is written is an ordinary persistence error. The fallback is a
//! degrade strategy, not a transaction.

use async_trait::async_trait;

use atelier_core::error::CoreError;
use atelier_core::ordering::ProjectEntry;
use atelier_core::store::{OrderStore, ProjectStore};
use atelier_core::types::DbId;

use crate::repositories::{CategoryOrderRepo, ProjectRepo};
use crate::DbPool;

/// Persistence backend for the ordering engine, backed by the `projects`
/// and `category_order` tables.
#[derive(Clone)]
pub struct PgPortfolioStore {
    pool: DbPool,
}

impl PgPortfolioStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn persistence(
    entity: &'static str,
    operation: &'static str,
    err: sqlx::Error,
) -> CoreError {
    CoreError::Persistence {
        entity,
        operation,
        message: err.to_string(),
    }
}

#[async_trait]
impl ProjectStore for PgPortfolioStore {
    async fn list_entries(&self) -> Result<Vec<ProjectEntry>, CoreError> {
        let rows = ProjectRepo::list_all(&self.pool)
            .await
            .map_err(|e| persistence("project", "list", e))?;
        Ok(rows.iter().map(|p| p.to_entry()).collect())
    }

    async fn set_published(&self, id: DbId, published: bool) -> Result<(), CoreError> {
        let updated = ProjectRepo::set_published(&self.pool, id, published)
            .await
            .map_err(|e| persistence("project", "set_published", e))?;
        if !updated {
            return Err(CoreError::NotFound {
                entity: "project",
                id,
            });
        }
        Ok(())
    }

    async fn delete_project(&self, id: DbId) -> Result<(), CoreError> {
        let removed = ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(|e| persistence("project", "delete", e))?;
        if !removed {
            return Err(CoreError::NotFound {
                entity: "project",
                id,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for PgPortfolioStore {
    async fn category_order(&self) -> Result<Vec<String>, CoreError> {
        let saved = CategoryOrderRepo::get(&self.pool)
            .await
            .map_err(|e| persistence("category_order", "get", e))?;
        // Never-saved is an empty order, not an error.
        Ok(saved.unwrap_or_default())
    }

    async fn set_category_order(&self, labels: &[String]) -> Result<(), CoreError> {
        CategoryOrderRepo::set(&self.pool, labels)
            .await
            .map_err(|e| persistence("category_order", "set", e))
    }

    async fn set_project_order(&self, ids_in_order: &[DbId]) -> Result<(), CoreError> {
        match ProjectRepo::set_display_orders(&self.pool, ids_in_order).await {
            Ok(rows) => {
                tracing::debug!(rows, "Bulk order update applied");
                Ok(())
            }
            Err(bulk_err) => {
                tracing::warn!(
                    error = %bulk_err,
                    count = ids_in_order.len(),
                    "Bulk order update failed; falling back to per-row updates"
                );
                for (rank, id) in ids_in_order.iter().enumerate() {
                    let failure =
                        match ProjectRepo::set_display_order(&self.pool, *id, rank as i32).await {
                            Ok(true) => continue,
                            Ok(false) => format!("project {id} not found during fallback"),
                            Err(row_err) => row_err.to_string(),
                        };
                    // A first-row failure means nothing persisted; that is a
                    // plain persistence error, not a partial application.
                    if rank == 0 {
                        return Err(CoreError::Persistence {
                            entity: "project",
                            operation: "set_display_order",
                            message: failure,
                        });
                    }
                    return Err(CoreError::PartialOrderApplication {
                        entity: "project",
                        applied: rank,
                        total: ids_in_order.len(),
                        message: failure,
                    });
                }
                Ok(())
            }
        }
    }
}
