//! Pagination: window calculator, page tokens and page arithmetic.

mod page;
pub mod token;
pub mod window;

pub use page::{clamp_page, page_bounds, parse_one_based_page, total_pages};
pub use token::{PageToken, PaginationWindow, ELLIPSIS_LABEL};
pub use window::{generate_pagination, try_generate_pagination, MAX_WINDOW_LEN};
