//! Pages formatters: page arithmetic summary plus the window for the selected page.

use super::window::{format_window_table, format_window_text};
use crate::config::DisplayConfig;
use crate::error::ApiError;
use crate::pagination::PaginationWindow;
use serde::Serialize;

/// Result of resolving an item count and requested page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagesReport {
    pub items: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub requested_page: usize,
    pub current_page: usize,
    /// Half-open item index range shown on the current page
    pub item_start: usize,
    pub item_end: usize,
    pub window: PaginationWindow,
}

impl PagesReport {
    fn clamped(&self) -> bool {
        self.requested_page != self.current_page
    }
}

pub fn format_pages_text(report: &PagesReport, display: &DisplayConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Items {}-{} of {} (page {} of {}, {} per page)\n",
        shown_start(report),
        report.item_end,
        report.items,
        report.current_page,
        report.total_pages,
        report.per_page
    ));
    if report.clamped() {
        out.push_str(&format!(
            "Requested page {} is out of range; showing page {}\n",
            report.requested_page, report.current_page
        ));
    }
    out.push_str(&format_window_text(&report.window, report.current_page, display));
    out
}

pub fn format_pages_json(report: &PagesReport) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_pages_table(report: &PagesReport, display: &DisplayConfig) -> String {
    format!(
        "Items {}-{} of {} (page {} of {})\n{}",
        shown_start(report),
        report.item_end,
        report.items,
        report.current_page,
        report.total_pages,
        format_window_table(&report.window, report.current_page, display)
    )
}

// One-based index of the first item shown, 0 when the page is empty.
fn shown_start(report: &PagesReport) -> usize {
    if report.item_end > report.item_start {
        report.item_start + 1
    } else {
        0
    }
}
