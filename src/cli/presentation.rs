//! CLI presentation: text, json and table formatters per command family.

mod config;
mod pages;
mod window;

pub use config::{format_config_json, format_config_table, format_config_text};
pub use pages::{format_pages_json, format_pages_table, format_pages_text, PagesReport};
pub use window::{format_window_json, format_window_table, format_window_text};
