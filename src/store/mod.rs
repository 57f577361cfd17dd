//! Forest Persistence
//!
//! A byte-level key-value store abstraction plus the adapter that keeps the
//! forest in it as two JSON records: `folders` (root folders) and `tables`
//! (root tables).

pub mod forest;
pub mod memory;
pub mod persistence;

pub use forest::{ForestStore, FOLDERS_KEY, TABLES_KEY};
pub use memory::MemoryKvStore;
pub use persistence::SledKvStore;

use crate::error::StorageError;

/// Key-value byte store interface
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write every entry or none of them, overwriting prior values.
    fn put_all(&self, entries: &[(&str, Vec<u8>)]) -> Result<(), StorageError>;

    /// Flush pending writes to durable storage
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn put_all(&self, entries: &[(&str, Vec<u8>)]) -> Result<(), StorageError> {
        (**self).put_all(entries)
    }

    fn flush(&self) -> Result<(), StorageError> {
        (**self).flush()
    }
}
