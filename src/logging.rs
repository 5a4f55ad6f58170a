//! Logging System
//!
//! Structured logging using the `tracing` crate. Provides configurable log levels,
//! output formats and destinations. Command output goes to stdout, so logs default
//! to stderr.

use crate::error::ApiError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const LOG_FILE_NAME: &str = "pagewin.log";

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted values for `logging.output`.
pub const LOG_OUTPUTS: [&str; 4] = ["stdout", "stderr", "file", "file+stderr"];

/// Accepted values for `logging.format`.
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable to suppress all log output
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output includes "file"); resolved at startup when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, terminal outputs only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Default log file under the platform state directory (data dir where no state dir exists).
pub fn default_log_file_path() -> Result<PathBuf, ApiError> {
    let dirs = ProjectDirs::from("", "", "pagewin").ok_or_else(|| {
        ApiError::ConfigError("Could not determine a home directory for log files".to_string())
    })?;
    let base = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
    Ok(base.join(LOG_FILE_NAME))
}

/// Resolve the log file path. Precedence: CLI flag, config file, platform default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    match cli_file.or(config_file) {
        Some(path) => Ok(path),
        None => default_log_file_path(),
    }
}

/// Fold PAGEWIN_LOG, PAGEWIN_LOG_FORMAT, PAGEWIN_LOG_OUTPUT and PAGEWIN_LOG_MODULES
/// into `config`. Apply after the config file layer and before CLI flags.
pub fn apply_env_overrides(config: &mut LoggingConfig) {
    apply_env_overrides_from(config, |key| std::env::var(key).ok());
}

/// Same as [`apply_env_overrides`] with an explicit variable lookup.
pub fn apply_env_overrides_from<F>(config: &mut LoggingConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    // PAGEWIN_LOG takes a full filter directive, e.g. "pagewin=debug,warn".
    if let Some(level) = lookup("PAGEWIN_LOG").filter(|v| !v.trim().is_empty()) {
        config.level = level;
    }
    if let Some(format) = lookup("PAGEWIN_LOG_FORMAT").filter(|v| LOG_FORMATS.contains(&v.as_str())) {
        config.format = format;
    }
    if let Some(output) = lookup("PAGEWIN_LOG_OUTPUT") {
        config.output = output;
    }
    if let Some(modules_str) = lookup("PAGEWIN_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, level)) = module_spec.split_once('=') {
                config
                    .modules
                    .insert(module.trim().to_string(), level.trim().to_string());
            }
        }
    }
}

/// Initialize the logging system from a fully resolved configuration.
///
/// The caller folds sources together first; priority order (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables ([`apply_env_overrides`])
/// 3. Configuration file
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let json = parse_format(&config.format)? == "json";
    let output = parse_output_destinations(&config.output)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if output.stdout {
        layers.push(terminal_layer(json, config.color, std::io::stdout));
    }
    if output.stderr {
        layers.push(terminal_layer(json, config.color, std::io::stderr));
    }
    if output.file {
        let file_writer = Mutex::new(open_log_file(config)?);
        let layer = fmt::layer()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false)
            .with_writer(file_writer);
        layers.push(if json { layer.json().boxed() } else { layer.boxed() });
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn terminal_layer<W>(json: bool, use_color: bool, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    if json {
        layer.json().boxed()
    } else {
        layer.with_ansi(use_color).boxed()
    }
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ApiError> {
    let log_file = match config.file.clone() {
        Some(path) => path,
        None => default_log_file_path()?,
    };

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build the event filter from the level (or directive) and module levels
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ApiError> {
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| {
        ApiError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn parse_format(format: &str) -> Result<&str, ApiError> {
    if LOG_FORMATS.contains(&format) {
        Ok(format)
    } else {
        Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )))
    }
}

/// Output destinations
#[derive(Debug, PartialEq, Eq)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ApiError> {
    match output {
        "stdout" => Ok(OutputDestinations {
            stdout: true,
            stderr: false,
            file: false,
        }),
        "stderr" => Ok(OutputDestinations {
            stdout: false,
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputDestinations {
            stdout: false,
            stderr: false,
            file: true,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stdout: false,
            stderr: true,
            file: true,
        }),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', 'file', or 'file+stderr')",
            output
        ))),
    }
}
