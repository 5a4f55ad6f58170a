//! Pagewin: Fixed-Width Pagination Windows
//!
//! Computes the sequence of page numbers and ellipsis markers a pagination control
//! renders for a current page out of a page count, together with the page arithmetic
//! callers need to get there from an item count.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
