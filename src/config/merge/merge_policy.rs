//! Merge rules: defaults, override order, conflict handling.

use crate::config::paths::default_store_path;
use crate::tree::TableTemplate;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of environment overrides, e.g. `RC_TRACKER__STORAGE__STORE_PATH`
pub const ENV_PREFIX: &str = "RC_TRACKER";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    let columns: Vec<String> = TableTemplate::default().columns().to_vec();
    Config::builder()
        .set_default(
            "storage.store_path",
            default_store_path().to_string_lossy().to_string(),
        )?
        .set_default("tree.default_columns", columns)
}

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 1] = ["tree.default_columns"];

/// Environment source; highest precedence, applied last.
///
/// `RC_TRACKER__TREE__DEFAULT_COLUMNS="Part,Qty"` yields a two-element list.
pub fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
