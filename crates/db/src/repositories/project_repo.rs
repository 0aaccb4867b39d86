//! Repository for the `projects` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

const COLUMNS: &str = "id, category, slug, title, title_ja, description, description_ja, \
     technologies, technologies_ja, role, role_ja, duration, duration_ja, \
     challenge, challenge_ja, solution, solution_ja, published, display_order, \
     image_paths, model_paths, iframes, created_at, updated_at";

/// Provides CRUD and ordering operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (category, slug, title, title_ja, description, description_ja, \
                 technologies, technologies_ja, role, role_ja, duration, duration_ja, \
                 challenge, challenge_ja, solution, solution_ja, published, display_order, \
                 image_paths, model_paths, iframes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                     COALESCE($17, false), $18, \
                     COALESCE($19, '{{}}'), COALESCE($20, '{{}}'), COALESCE($21, '{{}}')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.category)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.title_ja)
            .bind(&input.description)
            .bind(&input.description_ja)
            .bind(&input.technologies)
            .bind(&input.technologies_ja)
            .bind(&input.role)
            .bind(&input.role_ja)
            .bind(&input.duration)
            .bind(&input.duration_ja)
            .bind(&input.challenge)
            .bind(&input.challenge_ja)
            .bind(&input.solution)
            .bind(&input.solution_ja)
            .bind(input.published)
            .bind(input.display_order)
            .bind(&input.image_paths)
            .bind(&input.model_paths)
            .bind(&input.iframes)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by slug (the public detail-page key).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every project, drafts included, in within-category display
    /// order. `NULL` display_order sorts as 0; ties break on creation time
    /// then id so the order stays stable under gaps and duplicates.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             ORDER BY COALESCE(display_order, 0) ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List published projects only, in within-category display order.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE published = true \
             ORDER BY COALESCE(display_order, 0) ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                category = COALESCE($2, category), \
                slug = COALESCE($3, slug), \
                title = COALESCE($4, title), \
                title_ja = COALESCE($5, title_ja), \
                description = COALESCE($6, description), \
                description_ja = COALESCE($7, description_ja), \
                technologies = COALESCE($8, technologies), \
                technologies_ja = COALESCE($9, technologies_ja), \
                role = COALESCE($10, role), \
                role_ja = COALESCE($11, role_ja), \
                duration = COALESCE($12, duration), \
                duration_ja = COALESCE($13, duration_ja), \
                challenge = COALESCE($14, challenge), \
                challenge_ja = COALESCE($15, challenge_ja), \
                solution = COALESCE($16, solution), \
                solution_ja = COALESCE($17, solution_ja), \
                published = COALESCE($18, published), \
                display_order = COALESCE($19, display_order), \
                image_paths = COALESCE($20, image_paths), \
                model_paths = COALESCE($21, model_paths), \
                iframes = COALESCE($22, iframes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.title_ja)
            .bind(&input.description)
            .bind(&input.description_ja)
            .bind(&input.technologies)
            .bind(&input.technologies_ja)
            .bind(&input.role)
            .bind(&input.role_ja)
            .bind(&input.duration)
            .bind(&input.duration_ja)
            .bind(&input.challenge)
            .bind(&input.challenge_ja)
            .bind(&input.solution)
            .bind(&input.solution_ja)
            .bind(input.published)
            .bind(input.display_order)
            .bind(&input.image_paths)
            .bind(&input.model_paths)
            .bind(&input.iframes)
            .fetch_optional(pool)
            .await
    }

    /// Set the published flag. Returns `true` if a row was updated.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        published: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET published = $2 WHERE id = $1")
            .bind(id)
            .bind(published)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the display order of a single project. Returns `true` if a row
    /// was updated. This is the per-row fallback path for order writes.
    pub async fn set_display_order(
        pool: &PgPool,
        id: DbId,
        display_order: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET display_order = $2 WHERE id = $1")
            .bind(id)
            .bind(display_order)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign `display_order = position` for exactly the given ids in one
    /// statement, leaving all other rows untouched. Returns the number of
    /// rows updated; a concurrent reader never observes a half-applied
    /// order.
    pub async fn set_display_orders(
        pool: &PgPool,
        ids_in_order: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let ids: Vec<DbId> = ids_in_order.to_vec();
        let orders: Vec<i32> = (0..ids.len() as i32).collect();
        let result = sqlx::query(
            "UPDATE projects AS p \
             SET display_order = v.ord \
             FROM (SELECT * FROM unnest($1::bigint[], $2::integer[]) AS t(id, ord)) AS v \
             WHERE p.id = v.id",
        )
        .bind(&ids)
        .bind(&orders)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a project by ID. Returns `true` if a row was removed.
    /// Survivors keep their display_order; gaps are tolerated.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
