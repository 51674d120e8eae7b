//! Environment source: ROLLCALL__SECTION__KEY variables

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment overrides, e.g. `ROLLCALL__ROSTER__TABLE=people.csv`.
///
/// `ROLLCALL__ROSTER__LEAVES` is a comma-separated list.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("ROLLCALL")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("roster.leaves"),
    )
}
