//! CLI route: single route table and run context. Dispatches to pagination and presentation.

use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_config_json, format_config_table, format_config_text, format_pages_json, format_pages_table,
    format_pages_text, format_window_json, format_window_table, format_window_text, PagesReport,
};
use crate::cli::command_name;
use crate::config::{
    env_config_name, global_config_path, workspace_config_paths, ConfigLoader, OutputFormat,
    PagewinConfig,
};
use crate::error::ApiError;
use crate::pagination::{
    clamp_page, generate_pagination, page_bounds, parse_one_based_page, total_pages,
    try_generate_pagination,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, config path, and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
    config: PagewinConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        Ok(Self {
            workspace_root,
            config_path,
            config,
        })
    }

    /// Build a context around an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: PagewinConfig) -> Self {
        Self {
            workspace_root,
            config_path: None,
            config,
        }
    }

    pub fn config(&self) -> &PagewinConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let started = Instant::now();
        debug!(command = %name, "Dispatching command");

        let result = match command {
            Commands::Window {
                current,
                total,
                format,
                unchecked,
            } => self.handle_window(*current, *total, format.as_deref(), *unchecked),
            Commands::Pages {
                items,
                per_page,
                page,
                format,
            } => self.handle_pages(*items, *per_page, page.as_deref(), format.as_deref()),
            Commands::Config { command } => self.handle_config(command),
        };

        info!(
            command = %name,
            ok = result.is_ok(),
            duration_us = started.elapsed().as_micros() as u64,
            "Command finished"
        );
        result
    }

    fn resolve_format(&self, format: Option<&str>) -> Result<OutputFormat, ApiError> {
        format
            .unwrap_or(self.config.display.default_format.as_str())
            .parse::<OutputFormat>()
            .map_err(ApiError::InvalidInput)
    }

    fn handle_window(
        &self,
        current: usize,
        total: usize,
        format: Option<&str>,
        unchecked: bool,
    ) -> Result<String, ApiError> {
        let format = self.resolve_format(format)?;
        let window = if unchecked {
            generate_pagination(current, total)
        } else {
            try_generate_pagination(current, total)?
        };
        debug!(current, total, tokens = window.len(), unchecked, "Window computed");

        let display = &self.config.display;
        match format {
            OutputFormat::Text => Ok(format_window_text(&window, current, display)),
            OutputFormat::Json => format_window_json(&window, current, total),
            OutputFormat::Table => Ok(format_window_table(&window, current, display)),
        }
    }

    fn handle_pages(
        &self,
        items: usize,
        per_page: Option<usize>,
        page: Option<&str>,
        format: Option<&str>,
    ) -> Result<String, ApiError> {
        let format = self.resolve_format(format)?;
        let per_page = per_page.unwrap_or(self.config.paging.per_page);
        if per_page == 0 {
            return Err(ApiError::InvalidInput(
                "--per-page must be at least 1".to_string(),
            ));
        }
        let requested_page = parse_one_based_page(page).ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "Invalid page '{}': expected a positive integer",
                page.unwrap_or_default()
            ))
        })?;

        // An empty listing still renders as a single page.
        let total = total_pages(items, per_page).max(1);
        let current_page = clamp_page(requested_page, total);
        if current_page != requested_page {
            debug!(requested_page, current_page, total, "Requested page clamped");
        }
        let (item_start, item_end) = page_bounds(items, per_page, current_page);
        let window = try_generate_pagination(current_page, total)?;

        let report = PagesReport {
            items,
            per_page,
            total_pages: total,
            requested_page,
            current_page,
            item_start,
            item_end,
            window,
        };

        let display = &self.config.display;
        match format {
            OutputFormat::Text => Ok(format_pages_text(&report, display)),
            OutputFormat::Json => format_pages_json(&report),
            OutputFormat::Table => Ok(format_pages_table(&report, display)),
        }
    }

    fn handle_config(&self, command: &ConfigCommands) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show { format } => match self.resolve_format(format.as_deref())? {
                OutputFormat::Text => format_config_text(&self.config),
                OutputFormat::Json => format_config_json(&self.config),
                OutputFormat::Table => format_config_table(&self.config),
            },
            ConfigCommands::Path => {
                let mut out = String::new();
                match &self.config_path {
                    Some(path) => out.push_str(&format!("explicit: {}\n", path.display())),
                    None => {
                        let global = global_config_path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "-".to_string());
                        out.push_str(&format!("global: {}\n", global));
                        let (base, env_specific) = workspace_config_paths(&self.workspace_root);
                        out.push_str(&format!("workspace: {}\n", base.display()));
                        out.push_str(&format!(
                            "workspace ({}): {}\n",
                            env_config_name(),
                            env_specific.display()
                        ));
                    }
                }
                Ok(out.trim_end().to_string())
            }
        }
    }
}
