//! CLI parse: clap types for pagewin. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagewin CLI - fixed-width pagination windows
#[derive(Parser, Debug)]
#[command(name = "pagewin")]
#[command(about = "Compute pagination windows of page numbers and ellipsis markers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (workspace config lives in <workspace>/config/)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the window for a current page out of a page count
    Window {
        /// Current page (1-based)
        #[arg(long)]
        current: usize,
        /// Total number of pages
        #[arg(long)]
        total: usize,
        /// Output format (text, json, table); defaults to display.default_format
        #[arg(long)]
        format: Option<String>,
        /// Skip input validation and run the raw calculator
        #[arg(long)]
        unchecked: bool,
    },
    /// Derive pages from an item count and show the window for one page
    Pages {
        /// Total number of items
        #[arg(long)]
        items: usize,
        /// Items per page; defaults to paging.per_page
        #[arg(long)]
        per_page: Option<usize>,
        /// Requested page (1-based); clamped to the page range
        #[arg(long)]
        page: Option<String>,
        /// Output format (text, json, table); defaults to display.default_format
        #[arg(long)]
        format: Option<String>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the global config file location
    Path,
}
