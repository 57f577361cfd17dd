//! Configuration System
//!
//! Layered configuration built with the `config` crate: built-in defaults,
//! then the global config file, then the workspace config file, then
//! `RC_TRACKER__SECTION__KEY` environment variables.

use crate::logging::LoggingConfig;
use crate::tree::TableTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{default_store_path, global_config_path};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the forest is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the sled database
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Tree model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Column names given to every new table
    #[serde(default = "default_columns")]
    pub default_columns: Vec<String>,
}

fn default_columns() -> Vec<String> {
    TableTemplate::default().columns().to_vec()
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_columns: default_columns(),
        }
    }
}

impl TreeConfig {
    pub fn template(&self) -> TableTemplate {
        TableTemplate::new(self.default_columns.clone())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.default_columns.len() != 2 {
            return Err(format!(
                "default_columns must name exactly 2 columns, got {}",
                self.default_columns.len()
            ));
        }
        if self.default_columns.iter().any(|c| c.trim().is_empty()) {
            return Err("default_columns cannot contain blank names".to_string());
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.store_path.as_os_str().is_empty() {
            return Err("Store path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Storage: {0}")]
    Storage(String),

    #[error("Tree: {0}")]
    Tree(String),

    #[error("Logging: {0}")]
    Logging(String),
}

impl TrackerConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.storage.validate() {
            errors.push(ValidationError::Storage(e));
        }
        if let Err(e) = self.tree.validate() {
            errors.push(ValidationError::Tree(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
