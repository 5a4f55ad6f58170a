//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources override these keys; tables merge key by key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("display.ellipsis", "...")?
        .set_default("display.highlight_current", true)?
        .set_default("display.default_format", "text")?
        .set_default("paging.per_page", 10_i64)
}
