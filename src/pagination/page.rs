//! Page arithmetic for callers that start from an item count.

/// Number of pages needed for `item_count` items, `per_page` treated as at least 1.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Half-open item index range `(start, end)` covered by a one-based page.
pub fn page_bounds(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page argument.
///
/// A missing value means page 1. Zero and unparsable values yield `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
