//! Workspace config file source: config/config.toml and config/{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Environment name selecting the env-specific workspace file (PAGEWIN_ENV, default "development").
pub fn env_config_name() -> String {
    std::env::var("PAGEWIN_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Workspace config files in load order: base file, then env-specific file.
pub fn workspace_config_paths(workspace_root: &Path) -> (PathBuf, PathBuf) {
    let config_dir = workspace_root.join("config");
    (
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", env_config_name())),
    )
}

/// Add workspace config files to builder.
/// Precedence: config/config.toml (base) then config/{PAGEWIN_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let (base_config_path, env_config_path) = workspace_config_paths(workspace_root);

    let mut builder = builder;

    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if env_config_path.exists() {
        builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
    }

    Ok(builder)
}
