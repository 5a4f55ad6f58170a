//! Window formatters: one line of tokens, a JSON document, or a token table.

use crate::config::DisplayConfig;
use crate::error::ApiError;
use crate::pagination::{PageToken, PaginationWindow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

fn token_label(token: &PageToken, current_page: usize, display: &DisplayConfig) -> String {
    match token {
        PageToken::Page(page) if *page == current_page && display.highlight_current => {
            format!("[{}]", page)
        }
        PageToken::Page(page) => page.to_string(),
        PageToken::Ellipsis => display.ellipsis.clone(),
    }
}

/// Tokens separated by spaces, e.g. `1 ... 4 [5] 6 ... 10`.
pub fn format_window_text(
    window: &PaginationWindow,
    current_page: usize,
    display: &DisplayConfig,
) -> String {
    window
        .iter()
        .map(|token| token_label(token, current_page, display))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_window_json(
    window: &PaginationWindow,
    current_page: usize,
    total_pages: usize,
) -> Result<String, ApiError> {
    let value = json!({
        "current_page": current_page,
        "total_pages": total_pages,
        "window": window,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn format_window_table(
    window: &PaginationWindow,
    current_page: usize,
    display: &DisplayConfig,
) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Slot", "Token", "Kind"]);
    for (slot, token) in window.iter().enumerate() {
        let kind = match token {
            PageToken::Page(page) if *page == current_page => "current",
            PageToken::Page(_) => "page",
            PageToken::Ellipsis => "gap",
        };
        let label = match token {
            PageToken::Page(page) => page.to_string(),
            PageToken::Ellipsis => display.ellipsis.clone(),
        };
        table.add_row(vec![(slot + 1).to_string(), label, kind.to_string()]);
    }
    table.to_string()
}
