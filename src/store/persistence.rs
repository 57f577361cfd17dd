//! Sled-backed key-value store

use crate::error::StorageError;
use crate::store::KvStore;
use std::path::Path;
use tracing::debug;

/// Sled-based implementation of KvStore
pub struct SledKvStore {
    db: sled::Db,
}

impl SledKvStore {
    /// Open (or create) a sled database at the given directory
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|e| {
            StorageError::Unavailable(format!(
                "Failed to open sled database at {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "Opened sled store");
        Ok(Self { db })
    }

    /// A throwaway database that is removed when dropped
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| StorageError::Unavailable(format!("Failed to open temporary sled database: {}", e)))?;
        Ok(Self { db })
    }
}

impl KvStore for SledKvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let value = self.db.get(key.as_bytes()).map_err(|e| {
            StorageError::Unavailable(format!("Failed to read key {:?}: {}", key, e))
        })?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn put_all(&self, entries: &[(&str, Vec<u8>)]) -> Result<(), StorageError> {
        let mut batch = sled::Batch::default();
        for (key, value) in entries {
            batch.insert(key.as_bytes(), value.as_slice());
        }

        self.db.apply_batch(batch).map_err(|e| {
            StorageError::Unavailable(format!("Failed to apply batch: {}", e))
        })?;

        // Writes are synchronous: the caller only proceeds once they are durable
        self.flush()
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(|e| {
            StorageError::Unavailable(format!("Failed to flush database: {}", e))
        })?;
        Ok(())
    }
}
