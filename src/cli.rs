//! CLI domain: parse, route, help, output, and presentation only.
//! No pagination logic lives here; the route table calls into `crate::pagination`.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_config_json, format_config_table, format_config_text, format_pages_json, format_pages_table,
    format_pages_text, format_window_json, format_window_table, format_window_text, PagesReport,
};
pub use route::RunContext;
