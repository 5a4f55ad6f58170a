//! Config loading facade: assembles sources in precedence order and deserializes.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{env, global_file, workspace_file};
use super::PagewinConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`PagewinConfig`] from defaults, files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{PAGEWIN_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<PagewinConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder);

        let config: PagewinConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Self::validated(config)
    }

    /// Load configuration from an explicit file. Global and workspace files are skipped;
    /// environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<PagewinConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = env::add_to_builder(builder);

        let config: PagewinConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Self::validated(config)
    }

    fn validated(config: PagewinConfig) -> Result<PagewinConfig, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
