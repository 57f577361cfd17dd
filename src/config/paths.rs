//! Platform directories for config and data

use directories::ProjectDirs;
use std::path::PathBuf;

const APPLICATION: &str = "rc-tracker";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APPLICATION)
}

/// `<data dir>/rc-tracker/store`, or `.rc-tracker/store` when no home
/// directory can be determined.
pub fn default_store_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("store"))
        .unwrap_or_else(|| PathBuf::from(".rc-tracker").join("store"))
}

/// `<config dir>/rc-tracker/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}
