//! Per-workspace config files under `<root>/config/`

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Selects the environment overlay, e.g. `staging` → `config/staging.toml`
const ENV_VAR: &str = "RC_TRACKER_ENV";
const DEFAULT_ENV: &str = "development";

/// Files that exist for this workspace, shared base first and the
/// environment overlay after it.
fn candidate_files(workspace_root: &Path) -> Vec<PathBuf> {
    let dir = workspace_root.join("config");
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());
    [dir.join("config.toml"), dir.join(env).with_extension("toml")]
        .into_iter()
        .filter(|path| path.is_file())
        .collect()
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(candidate_files(workspace_root)
        .into_iter()
        .fold(builder, |builder, path| builder.add_source(File::from(path))))
}
