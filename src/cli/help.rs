//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log events (e.g. "window", "config.show").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Window { .. } => "window".to_string(),
        Commands::Pages { .. } => "pages".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show { .. } => "show",
        ConfigCommands::Path => "path",
    }
}
