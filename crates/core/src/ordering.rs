//! Grouping and ordering rules for the portfolio listing.
//!
//! Categories are free-text labels with an advisory saved order; projects
//! carry an integer `display_order` that is only meaningful within their
//! category. Nothing here enforces density or uniqueness of the order
//! values — sorting stays well-defined under gaps and duplicates because
//! ties break on `(created_at, id)`.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Engine-facing project view
// ---------------------------------------------------------------------------

/// The ordering engine's view of a project row.
///
/// Content fields (titles, descriptions, media) stay on the database model;
/// the engine only needs what grouping, sorting, and publication require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub id: DbId,
    pub category: String,
    pub slug: String,
    pub published: bool,
    /// Missing `display_order` in storage is treated as 0.
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// Sort key for projects within a category.
///
/// `display_order` first, then creation time, then id, so the order stays
/// stable when `display_order` values collide or have gaps.
fn order_key(entry: &ProjectEntry) -> (i32, Timestamp, DbId) {
    (entry.display_order, entry.created_at, entry.id)
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a single-step reorder action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

// ---------------------------------------------------------------------------
// Grouped view
// ---------------------------------------------------------------------------

/// One category with its projects in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub projects: Vec<ProjectEntry>,
}

/// The derived (category, ordered project list) sequence consumed by
/// display logic. Not persisted; recomputed from the flat project
/// collection plus the saved category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedView {
    pub categories: Vec<CategoryGroup>,
}

impl GroupedView {
    /// The view restricted to published projects, with categories that end
    /// up empty removed. This is what the public site renders.
    pub fn published_only(&self) -> GroupedView {
        let categories = self
            .categories
            .iter()
            .filter_map(|group| {
                let projects: Vec<ProjectEntry> = group
                    .projects
                    .iter()
                    .filter(|p| p.published)
                    .cloned()
                    .collect();
                (!projects.is_empty()).then(|| CategoryGroup {
                    category: group.category.clone(),
                    projects,
                })
            })
            .collect();
        GroupedView { categories }
    }

    /// Category labels in display order.
    pub fn category_labels(&self) -> Vec<String> {
        self.categories.iter().map(|g| g.category.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Merge and grouping
// ---------------------------------------------------------------------------

/// Merge the saved category order with the categories observed in the live
/// project collection.
///
/// Saved labels come first, in saved order; categories present in the data
/// but absent from the saved order are appended in first-observed order.
/// Saved labels with no matching project are dropped — the saved order is
/// advisory and may reference categories that no longer have rows.
pub fn merge_category_order(saved: &[String], projects: &[ProjectEntry]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for label in saved {
        if projects.iter().any(|p| &p.category == label) && !merged.contains(label) {
            merged.push(label.clone());
        }
    }
    for project in projects {
        if !merged.contains(&project.category) {
            merged.push(project.category.clone());
        }
    }
    merged
}

/// Compute the grouped view from a flat project collection and a category
/// order sequence (already merged or freshly loaded — merging is applied
/// either way, so stale sequences are tolerated).
pub fn group_projects(projects: &[ProjectEntry], category_order: &[String]) -> GroupedView {
    let merged = merge_category_order(category_order, projects);
    let categories = merged
        .into_iter()
        .map(|category| {
            let mut members: Vec<ProjectEntry> = projects
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect();
            members.sort_by_key(order_key);
            CategoryGroup {
                category,
                projects: members,
            }
        })
        .collect();
    GroupedView { categories }
}

/// Compute the re-ranked id sequence for a one-step move of `project_id`
/// within its category.
///
/// `projects` is the full flat collection; only same-category rows
/// participate. Returns `None` when the project is already at the boundary
/// in the requested direction (a no-op), or when the id is unknown.
/// Positions in the returned sequence are the new `display_order` ranks.
pub fn reranked_ids(
    projects: &[ProjectEntry],
    project_id: DbId,
    direction: Direction,
) -> Option<Vec<DbId>> {
    let category = &projects.iter().find(|p| p.id == project_id)?.category;
    let mut members: Vec<&ProjectEntry> = projects
        .iter()
        .filter(|p| &p.category == category)
        .collect();
    members.sort_by_key(|p| order_key(p));

    let rank = members.iter().position(|p| p.id == project_id)?;
    let neighbor = match direction {
        Direction::Up => rank.checked_sub(1)?,
        Direction::Down => {
            if rank + 1 >= members.len() {
                return None;
            }
            rank + 1
        }
    };

    let mut ids: Vec<DbId> = members.iter().map(|p| p.id).collect();
    ids.swap(rank, neighbor);
    Some(ids)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: DbId, category: &str, order: i32) -> ProjectEntry {
        ProjectEntry {
            id,
            category: category.to_string(),
            slug: format!("project-{id}"),
            published: true,
            display_order: order,
            created_at: chrono::Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        }
    }

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // -- merge_category_order ------------------------------------------------

    #[test]
    fn saved_categories_first_then_novel_in_first_seen_order() {
        let projects = vec![entry(1, "B", 0), entry(2, "A", 0), entry(3, "C", 0)];
        let merged = merge_category_order(&labels(&["A"]), &projects);
        assert_eq!(merged, labels(&["A", "B", "C"]));
    }

    #[test]
    fn empty_saved_order_yields_first_seen_order() {
        let projects = vec![entry(1, "X", 0), entry(2, "Y", 0), entry(3, "X", 1)];
        let merged = merge_category_order(&[], &projects);
        assert_eq!(merged, labels(&["X", "Y"]));
    }

    #[test]
    fn saved_category_without_projects_is_dropped() {
        let projects = vec![entry(1, "A", 0)];
        let merged = merge_category_order(&labels(&["Gone", "A"]), &projects);
        assert_eq!(merged, labels(&["A"]));
    }

    #[test]
    fn saved_order_is_preserved_verbatim() {
        let projects = vec![entry(1, "A", 0), entry(2, "B", 0), entry(3, "C", 0)];
        let merged = merge_category_order(&labels(&["C", "A", "B"]), &projects);
        assert_eq!(merged, labels(&["C", "A", "B"]));
    }

    // -- group_projects ------------------------------------------------------

    #[test]
    fn groups_sort_by_display_order() {
        let projects = vec![entry(1, "A", 2), entry(2, "A", 0), entry(3, "A", 1)];
        let view = group_projects(&projects, &[]);
        assert_eq!(view.categories.len(), 1);
        let ids: Vec<DbId> = view.categories[0].projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn gaps_in_display_order_are_tolerated() {
        let projects = vec![entry(1, "A", 10), entry(2, "A", 3), entry(3, "A", 40)];
        let view = group_projects(&projects, &[]);
        let ids: Vec<DbId> = view.categories[0].projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn duplicate_display_orders_break_ties_by_creation_time() {
        // Same display_order; entry(1) was created before entry(2).
        let projects = vec![entry(2, "A", 0), entry(1, "A", 0)];
        let view = group_projects(&projects, &[]);
        let ids: Vec<DbId> = view.categories[0].projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn display_order_scopes_per_category() {
        let projects = vec![
            entry(1, "A", 1),
            entry(2, "B", 0),
            entry(3, "A", 0),
            entry(4, "B", 1),
        ];
        let view = group_projects(&projects, &labels(&["A", "B"]));
        let a: Vec<DbId> = view.categories[0].projects.iter().map(|p| p.id).collect();
        let b: Vec<DbId> = view.categories[1].projects.iter().map(|p| p.id).collect();
        assert_eq!(a, vec![3, 1]);
        assert_eq!(b, vec![2, 4]);
    }

    // -- published_only ------------------------------------------------------

    #[test]
    fn published_only_drops_unpublished_and_empty_categories() {
        let mut hidden = entry(1, "A", 0);
        hidden.published = false;
        let projects = vec![hidden, entry(2, "B", 0)];
        let view = group_projects(&projects, &labels(&["A", "B"])).published_only();
        assert_eq!(view.category_labels(), labels(&["B"]));
        assert_eq!(view.categories[0].projects.len(), 1);
    }

    // -- reranked_ids --------------------------------------------------------

    #[test]
    fn move_down_swaps_with_next_neighbor() {
        let projects = vec![entry(1, "x", 0), entry(2, "x", 1), entry(3, "x", 2)];
        let ids = reranked_ids(&projects, 2, Direction::Down).unwrap();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn move_up_swaps_with_previous_neighbor() {
        let projects = vec![entry(1, "x", 0), entry(2, "x", 1), entry(3, "x", 2)];
        let ids = reranked_ids(&projects, 2, Direction::Up).unwrap();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn move_up_at_top_is_boundary_noop() {
        let projects = vec![entry(1, "x", 0), entry(2, "x", 1)];
        assert_eq!(reranked_ids(&projects, 1, Direction::Up), None);
    }

    #[test]
    fn move_down_at_bottom_is_boundary_noop() {
        let projects = vec![entry(1, "x", 0), entry(2, "x", 1)];
        assert_eq!(reranked_ids(&projects, 2, Direction::Down), None);
    }

    #[test]
    fn unknown_id_yields_none() {
        let projects = vec![entry(1, "x", 0)];
        assert_eq!(reranked_ids(&projects, 99, Direction::Down), None);
    }

    #[test]
    fn other_categories_do_not_participate() {
        let projects = vec![
            entry(1, "x", 0),
            entry(2, "y", 1),
            entry(3, "x", 1),
            entry(4, "x", 2),
        ];
        let ids = reranked_ids(&projects, 3, Direction::Down).unwrap();
        assert_eq!(ids, vec![1, 4, 3]);
    }

    #[test]
    fn double_swap_restores_original_order() {
        let projects = vec![entry(1, "x", 0), entry(2, "x", 1), entry(3, "x", 2)];
        let first = reranked_ids(&projects, 2, Direction::Down).unwrap();
        assert_eq!(first, vec![1, 3, 2]);

        // Apply the first swap, then move the same project back up.
        let mut moved = projects.clone();
        for (rank, id) in first.iter().enumerate() {
            moved.iter_mut().find(|p| p.id == *id).unwrap().display_order = rank as i32;
        }
        let second = reranked_ids(&moved, 2, Direction::Up).unwrap();
        assert_eq!(second, vec![1, 2, 3]);
    }
}
