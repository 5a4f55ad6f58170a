//! Display and paging settings consumed by the CLI presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(format!(
                "Unknown output format '{}' (must be 'text', 'json', or 'table')",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How windows are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Label printed for ellipsis markers in text and table output
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Wrap the current page in brackets in text output
    #[serde(default = "default_true")]
    pub highlight_current: bool,

    /// Format used when a command is given no --format
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_ellipsis() -> String {
    crate::pagination::ELLIPSIS_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ellipsis: default_ellipsis(),
            highlight_current: default_true(),
            default_format: default_format(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.ellipsis.trim().is_empty() {
            return Err("Ellipsis label cannot be empty".to_string());
        }
        self.default_format.parse::<OutputFormat>()?;
        Ok(())
    }
}

/// Item-to-page settings for the `pages` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Items per page when --per-page is not given
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    10
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl PagingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.per_page == 0 {
            return Err("per_page must be at least 1".to_string());
        }
        Ok(())
    }
}
