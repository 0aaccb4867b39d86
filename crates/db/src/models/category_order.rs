//! The singleton category-order record.

use atelier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The single row of the `category_order` table: the desired display order
/// of category labels. Advisory — labels may reference categories without
/// projects, and new categories may be absent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryOrderRecord {
    pub id: DbId,
    pub labels: Vec<String>,
    pub updated_at: Timestamp,
}
