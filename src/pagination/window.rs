//! Pagination window calculator.
//!
//! Maps `(current_page, total_pages)` to at most [`MAX_WINDOW_LEN`] tokens:
//! the full range when it fits, otherwise the first and last page anchored
//! around a three-wide run with ellipsis markers for the omitted pages.

use crate::error::PaginationError;
use crate::pagination::token::{PageToken, PaginationWindow};
use tracing::trace;

/// Longest window the calculator ever produces.
pub const MAX_WINDOW_LEN: usize = 7;

/// Pages shown before the ellipsis while the current page sits near the start.
const LEADING_RUN: usize = 5;

/// Compute the pagination window for `current_page` out of `total_pages`.
///
/// Inputs are not validated. `total_pages == 0` yields an empty window and a
/// `current_page` outside `[1, total_pages]` falls into the start or end
/// anchored shape; callers that need a guarantee use
/// [`try_generate_pagination`]. The subtractions only run once
/// `total_pages > MAX_WINDOW_LEN` (and `current_page > 3` in the middle band),
/// so plain unsigned arithmetic cannot underflow.
pub fn generate_pagination(current_page: usize, total_pages: usize) -> PaginationWindow {
    let tokens = if total_pages <= MAX_WINDOW_LEN {
        trace!(current_page, total_pages, "window: full range");
        (1..=total_pages).map(PageToken::Page).collect()
    } else if current_page <= 3 {
        trace!(current_page, total_pages, "window: anchored to start");
        let mut tokens: Vec<PageToken> = (1..=LEADING_RUN).map(PageToken::Page).collect();
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
        tokens
    } else if current_page >= total_pages - 2 {
        trace!(current_page, total_pages, "window: anchored to end");
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend((total_pages - 4..=total_pages).map(PageToken::Page));
        tokens
    } else {
        trace!(current_page, total_pages, "window: sliding middle");
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(current_page - 1),
            PageToken::Page(current_page),
            PageToken::Page(current_page + 1),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ]
    };

    PaginationWindow::new(tokens)
}

/// Validated variant of [`generate_pagination`].
///
/// Rejects `total_pages == 0` and any `current_page` outside `[1, total_pages]`.
pub fn try_generate_pagination(
    current_page: usize,
    total_pages: usize,
) -> Result<PaginationWindow, PaginationError> {
    if total_pages == 0 {
        return Err(PaginationError::InvalidArgument {
            name: "total_pages",
            value: total_pages,
            reason: "must be at least 1".to_string(),
        });
    }
    if current_page == 0 || current_page > total_pages {
        return Err(PaginationError::InvalidArgument {
            name: "current_page",
            value: current_page,
            reason: format!("must be within 1..={}", total_pages),
        });
    }
    Ok(generate_pagination(current_page, total_pages))
}
