//! Project models and DTOs.
//!
//! Every textual content field carries an optional Japanese variant in a
//! `*_ja` column; the site renders whichever language is active and falls
//! back to the base field.

use atelier_core::ordering::ProjectEntry;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub category: String,
    pub slug: String,
    pub title: String,
    pub title_ja: Option<String>,
    pub description: Option<String>,
    pub description_ja: Option<String>,
    pub technologies: Option<String>,
    pub technologies_ja: Option<String>,
    pub role: Option<String>,
    pub role_ja: Option<String>,
    pub duration: Option<String>,
    pub duration_ja: Option<String>,
    pub challenge: Option<String>,
    pub challenge_ja: Option<String>,
    pub solution: Option<String>,
    pub solution_ja: Option<String>,
    pub published: bool,
    /// Meaningful only within `category`; `NULL` sorts as 0.
    pub display_order: Option<i32>,
    /// Object-storage paths for gallery images.
    pub image_paths: Vec<String>,
    /// Object-storage paths for 3D model files.
    pub model_paths: Vec<String>,
    /// Embeddable prototype snippets (Figma/HTML iframes).
    pub iframes: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The ordering engine's view of this row.
    pub fn to_entry(&self) -> ProjectEntry {
        ProjectEntry {
            id: self.id,
            category: self.category.clone(),
            slug: self.slug.clone(),
            published: self.published,
            display_order: self.display_order.unwrap_or(0),
            created_at: self.created_at,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub category: String,
    pub slug: String,
    pub title: String,
    pub title_ja: Option<String>,
    pub description: Option<String>,
    pub description_ja: Option<String>,
    pub technologies: Option<String>,
    pub technologies_ja: Option<String>,
    pub role: Option<String>,
    pub role_ja: Option<String>,
    pub duration: Option<String>,
    pub duration_ja: Option<String>,
    pub challenge: Option<String>,
    pub challenge_ja: Option<String>,
    pub solution: Option<String>,
    pub solution_ja: Option<String>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub image_paths: Option<Vec<String>>,
    pub model_paths: Option<Vec<String>>,
    pub iframes: Option<Vec<String>>,
}

/// DTO for updating an existing project. All fields are optional; `None`
/// leaves the column unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub category: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_ja: Option<String>,
    pub description: Option<String>,
    pub description_ja: Option<String>,
    pub technologies: Option<String>,
    pub technologies_ja: Option<String>,
    pub role: Option<String>,
    pub role_ja: Option<String>,
    pub duration: Option<String>,
    pub duration_ja: Option<String>,
    pub challenge: Option<String>,
    pub challenge_ja: Option<String>,
    pub solution: Option<String>,
    pub solution_ja: Option<String>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub image_paths: Option<Vec<String>>,
    pub model_paths: Option<Vec<String>>,
    pub iframes: Option<Vec<String>>,
}
