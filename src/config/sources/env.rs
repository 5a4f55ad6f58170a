//! Environment source: PAGEWIN__SECTION__KEY overrides (e.g. PAGEWIN__PAGING__PER_PAGE=25).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment overrides to builder. Highest precedence of all sources.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("PAGEWIN")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
