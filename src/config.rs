//! Configuration System
//!
//! Layered configuration for pagewin: built-in defaults, a global user file, workspace
//! files and environment overrides, merged with the `config` crate and validated after
//! deserialization.

use crate::logging::{LoggingConfig, LOG_FORMATS, LOG_LEVELS, LOG_OUTPUTS};
use serde::{Deserialize, Serialize};

mod display;
mod facade;
mod merge;
mod sources;

pub use display::{DisplayConfig, OutputFormat, PagingConfig};
pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{env_config_name, workspace_config_paths};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagewinConfig {
    /// Window rendering settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Item-to-page settings
    #[serde(default)]
    pub paging: PagingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Display(String),
    Paging(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Display(msg) => write!(f, "Display: {}", msg),
            ValidationError::Paging(msg) => write!(f, "Paging: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PagewinConfig {
    /// Validate the entire configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.display.validate() {
            errors.push(ValidationError::Display(e));
        }

        if let Err(e) = self.paging.validate() {
            errors.push(ValidationError::Paging(e));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format '{}' (must be one of: {})",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid log level '{}' (must be one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid log output '{}' (must be one of: {})",
                self.logging.output,
                LOG_OUTPUTS.join(", ")
            )));
        }

        for (module, level) in &self.logging.modules {
            if !LOG_LEVELS.contains(&level.as_str()) {
                errors.push(ValidationError::Logging(format!(
                    "Invalid log level '{}' for module '{}'",
                    level, module
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
