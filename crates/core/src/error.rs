use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A storage backend failure. Always identifies the entity and the
    /// operation that was being attempted.
    #[error("Persistence failure: {operation} on {entity}: {message}")]
    Persistence {
        entity: &'static str,
        operation: &'static str,
        message: String,
    },

    /// Raised only by the per-row fallback of the bulk order write: some
    /// prefix of the per-row updates landed before one failed. The
    /// succeeded prefix is not rolled back; callers must reload to
    /// resynchronize with whatever actually persisted.
    #[error(
        "Order partially applied to {entity}: {applied} of {total} rows updated before failure: {message}"
    )]
    PartialOrderApplication {
        entity: &'static str,
        applied: usize,
        total: usize,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
