//! Config formatters for `config show`.

use crate::config::PagewinConfig;
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::Value;

pub fn format_config_text(config: &PagewinConfig) -> Result<String, ApiError> {
    Ok(toml::to_string_pretty(config)?)
}

pub fn format_config_json(config: &PagewinConfig) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// One row per leaf setting, keyed by its dotted path (e.g. `paging.per_page`).
pub fn format_config_table(config: &PagewinConfig) -> Result<String, ApiError> {
    let mut rows = Vec::new();
    flatten("", &serde_json::to_value(config)?, &mut rows);
    rows.sort();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in rows {
        table.add_row(vec![key, value]);
    }
    Ok(table.to_string())
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, rows);
            }
        }
        Value::Object(_) => rows.push((prefix.to_string(), "-".to_string())),
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}
