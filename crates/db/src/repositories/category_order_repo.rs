//! Repository for the singleton `category_order` table.

use sqlx::PgPool;

use crate::models::category_order::CategoryOrderRecord;

/// The fixed primary key of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Persists the one ordered list of category labels.
pub struct CategoryOrderRepo;

impl CategoryOrderRepo {
    /// Fetch the saved label order. `None` means no order has ever been
    /// saved — callers treat that as an empty order, never as a failure.
    pub async fn get(pool: &PgPool) -> Result<Option<Vec<String>>, sqlx::Error> {
        let record = sqlx::query_as::<_, CategoryOrderRecord>(
            "SELECT id, labels, updated_at FROM category_order WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(pool)
        .await?;
        Ok(record.map(|r| r.labels))
    }

    /// Upsert the saved label order. Idempotent: replaying the same labels
    /// produces no visible change.
    pub async fn set(pool: &PgPool, labels: &[String]) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO category_order (id, labels) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET labels = EXCLUDED.labels, updated_at = now()",
        )
        .bind(SINGLETON_ID)
        .bind(labels)
        .execute(pool)
        .await?;
        Ok(())
    }
}
