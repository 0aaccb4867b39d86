//! Project field validation helpers.
//!
//! Used by the API layer before any row is inserted or patched. Slugs must
//! be URL-safe because they are the public detail-page path segment.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

/// Maximum length for a project slug.
pub const MAX_SLUG_LEN: usize = 120;

/// Maximum length for a project title (either language).
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a category label.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Maximum length for long-form text fields (description, challenge, ...).
pub const MAX_TEXT_LEN: usize = 10_000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a slug: non-empty, within length limit, lowercase ASCII
/// alphanumerics and hyphens only, no leading or trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug too long: {} chars (max {MAX_SLUG_LEN})",
            slug.len()
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' may only contain lowercase letters, digits, and hyphens"
        )));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' must not start or end with a hyphen"
        )));
    }
    Ok(())
}

/// Validate a title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a category label: non-empty and within length limit.
///
/// Labels are free text; they double as grouping keys, so surrounding
/// whitespace is rejected rather than silently trimmed.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if category.is_empty() {
        return Err(CoreError::Validation(
            "Category must not be empty".to_string(),
        ));
    }
    if category != category.trim() {
        return Err(CoreError::Validation(format!(
            "Category '{category}' must not have leading or trailing whitespace"
        )));
    }
    if category.len() > MAX_CATEGORY_LEN {
        return Err(CoreError::Validation(format!(
            "Category too long: {} chars (max {MAX_CATEGORY_LEN})",
            category.len()
        )));
    }
    Ok(())
}

/// Validate a long-form text field against the shared length cap.
pub fn validate_text_field(name: &str, value: &str) -> Result<(), CoreError> {
    if value.len() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{name} too long: {} chars (max {MAX_TEXT_LEN})",
            value.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
