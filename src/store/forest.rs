//! Forest load/save on top of a KvStore
//!
//! Root folders and root tables are kept as two separate JSON arrays. Both
//! are written in a single atomic batch so the halves never drift apart.
//! Reading is fail-soft: an absent or unparsable record becomes an empty
//! sequence and only an unreachable store is reported as an error.

use crate::error::StorageError;
use crate::store::KvStore;
use crate::tree::{Folder, Forest, Table};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Key holding the root folders array
pub const FOLDERS_KEY: &str = "folders";

/// Key holding the root tables array
pub const TABLES_KEY: &str = "tables";

pub struct ForestStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> ForestStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Result<Forest, StorageError> {
        let root_folders: Vec<Folder> = self.read_record(FOLDERS_KEY)?;
        let root_tables: Vec<Table> = self.read_record(TABLES_KEY)?;
        let forest = Forest {
            root_folders,
            root_tables,
        };
        info!(
            folders = forest.folder_count(),
            tables = forest.table_count(),
            "Loaded forest"
        );
        Ok(forest)
    }

    pub fn save(&self, forest: &Forest) -> Result<(), StorageError> {
        let folders = encode(&forest.root_folders)?;
        let tables = encode(&forest.root_tables)?;
        self.store
            .put_all(&[(FOLDERS_KEY, folders), (TABLES_KEY, tables)])?;
        debug!(
            folders = forest.folder_count(),
            tables = forest.table_count(),
            "Saved forest"
        );
        Ok(())
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let Some(bytes) = self.store.get(key)? else {
            debug!(key, "No persisted record; starting empty");
            return Ok(Vec::new());
        };
        match serde_json::from_slice::<Vec<T>>(&bytes) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "Persisted record is corrupt; treating it as empty");
                Ok(Vec::new())
            }
        }
    }
}

fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(items).map_err(|e| StorageError::Serialize(e.to_string()))
}
