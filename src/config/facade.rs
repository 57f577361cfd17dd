//! Entry points for loading configuration.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::TrackerConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace files,
    /// environment.
    pub fn load(workspace_root: &Path) -> Result<TrackerConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: TrackerConfig = builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;
        Self::checked(config)
    }

    /// Load and validate configuration from a single file plus defaults.
    pub fn load_from_file(path: &Path) -> Result<TrackerConfig, ApiError> {
        let config: TrackerConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Self::checked(config)
    }

    fn checked(config: TrackerConfig) -> Result<TrackerConfig, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        debug!(store_path = %config.storage.store_path.display(), "Configuration loaded");
        Ok(config)
    }
}
