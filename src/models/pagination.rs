// src/models/pagination.rs
// DOCUMENTATION: Fixed-size page slicing shared by every listing
// PURPOSE: One definition of page size, offsets and out-of-range behavior

use serde::Deserialize;

/// Items per page for every paginated endpoint
pub const PAGE_SIZE: usize = 10;

/// `?page=` query parameter (1-based, defaults to 1)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    /// Page number clamped to at least 1. No upper bound is enforced.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Offset of the first item on `page`
pub fn page_offset(page: i64) -> usize {
    (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE)
}

/// Slice `items` to `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`
/// A page past the end yields an empty vector
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(page_offset(page))
        .take(PAGE_SIZE)
        .collect()
}

/// Escape LIKE metacharacters so a search term matches literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Unanchored `ILIKE` pattern for a search term
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term.trim()))
}
