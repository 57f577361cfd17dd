//! Session: the boundary the presentation layer talks to
//!
//! A session owns the single forest, the current path and the persistence
//! adapter. Each user intent runs to completion: the new forest is computed,
//! persisted and only then committed. If the store stops accepting writes
//! the session keeps serving reads and rejects further mutations.

use crate::config::{TrackerConfig, TreeConfig};
use crate::error::{ApiError, TreeError};
use crate::navigation::Navigator;
use crate::store::{ForestStore, KvStore, MemoryKvStore, SledKvStore};
use crate::tree::{self, FolderPath, FolderView, Forest, TableTemplate};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Outcome of a mutating intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The forest changed and was persisted
    Applied,
    /// Nothing matched (e.g. deleting an absent name)
    Unchanged,
    /// Blank name on create; dropped without error
    Ignored,
}

pub struct Session<S: KvStore> {
    forest: Forest,
    navigator: Navigator,
    store: ForestStore<S>,
    template: TableTemplate,
    read_only: bool,
}

impl<S: KvStore> Session<S> {
    /// Load the forest from `store` and start at the root.
    ///
    /// An unreachable store yields an empty, read-only session.
    pub fn open(store: S, template: TableTemplate) -> Self {
        let store = ForestStore::new(store);
        let (forest, read_only) = match store.load() {
            Ok(forest) => (forest, false),
            Err(e) => {
                error!(error = %e, "Store unavailable; session is read-only");
                (Forest::new(), true)
            }
        };
        info!(read_only, "Session opened");
        Self {
            forest,
            navigator: Navigator::new(),
            store,
            template,
            read_only,
        }
    }

    pub fn with_config(store: S, config: &TreeConfig) -> Self {
        Self::open(store, config.template())
    }

    fn degraded(store: S, template: TableTemplate) -> Self {
        Self {
            forest: Forest::new(),
            navigator: Navigator::new(),
            store: ForestStore::new(store),
            template,
            read_only: true,
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn current_path(&self) -> &FolderPath {
        self.navigator.path()
    }

    pub fn current_folder(&self) -> Result<FolderView<'_>, TreeError> {
        self.navigator.current(&self.forest)
    }

    /// Owned copy of what the presentation layer renders from
    pub fn snapshot(&self) -> (Forest, FolderPath) {
        (self.forest.clone(), self.navigator.path().clone())
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn store(&self) -> &ForestStore<S> {
        &self.store
    }

    pub fn create_folder(&mut self, name: &str) -> Result<Change, ApiError> {
        self.mutate("create_folder", |forest, path| tree::add_folder(forest, path, name))
    }

    pub fn delete_folder(&mut self, name: &str) -> Result<Change, ApiError> {
        self.mutate("delete_folder", |forest, path| tree::delete_folder(forest, path, name))
    }

    pub fn create_table(&mut self, name: &str) -> Result<Change, ApiError> {
        let template = self.template.clone();
        self.mutate("create_table", move |forest, path| {
            tree::add_table(forest, path, name, &template)
        })
    }

    pub fn delete_table(&mut self, name: &str) -> Result<Change, ApiError> {
        self.mutate("delete_table", |forest, path| tree::delete_table(forest, path, name))
    }

    /// Enter the child folder `name` of the current folder.
    ///
    /// A missing child is rejected and the current path snaps to its
    /// nearest valid ancestor.
    pub fn open_folder(&mut self, name: &str) -> Result<(), ApiError> {
        match self.navigator.open_checked(&self.forest, name) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.navigator.recover(&self.forest);
                Err(e.into())
            }
        }
    }

    /// Move straight to `path`, e.g. one remembered by the host.
    ///
    /// A path that no longer resolves lands on its nearest valid ancestor and
    /// the miss is reported.
    pub fn jump_to(&mut self, path: FolderPath) -> Result<(), ApiError> {
        self.navigator = Navigator::at(path);
        match self.navigator.current(&self.forest) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.navigator.recover(&self.forest);
                Err(e.into())
            }
        }
    }

    pub fn back(&mut self) {
        self.navigator.back();
    }

    pub fn to_menu(&mut self) {
        self.navigator.to_menu();
    }

    fn mutate<F>(&mut self, op: &'static str, apply: F) -> Result<Change, ApiError>
    where
        F: FnOnce(&Forest, &FolderPath) -> Result<Forest, TreeError>,
    {
        if self.read_only {
            warn!(op, "Rejected mutation in read-only session");
            return Err(ApiError::ReadOnly);
        }

        let next = match apply(&self.forest, self.navigator.path()) {
            Ok(next) => next,
            Err(TreeError::InvalidName) => {
                debug!(op, "Ignoring blank name");
                return Ok(Change::Ignored);
            }
            Err(e @ TreeError::PathNotFound(_)) => {
                self.navigator.recover(&self.forest);
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        if next == self.forest {
            return Ok(Change::Unchanged);
        }

        if let Err(e) = self.store.save(&next) {
            error!(op, error = %e, "Failed to persist forest; session is now read-only");
            self.read_only = true;
            return Err(e.into());
        }

        self.forest = next;
        info!(op, path = %self.navigator.path(), "Applied");
        Ok(Change::Applied)
    }
}

impl Session<Box<dyn KvStore>> {
    /// Open the sled store named by `config.storage`.
    ///
    /// If the database cannot be opened the session starts empty and
    /// read-only on an in-memory store.
    pub fn from_config(config: &TrackerConfig) -> Self {
        let template = config.tree.template();
        match SledKvStore::new(&config.storage.store_path) {
            Ok(store) => Self::open(Box::new(store), template),
            Err(e) => {
                error!(
                    store_path = %config.storage.store_path.display(),
                    error = %e,
                    "Store unavailable; session is read-only"
                );
                Self::degraded(Box::new(MemoryKvStore::new()), template)
            }
        }
    }
}

/// A session shared across threads; calls are serialized by a mutex.
pub struct SharedSession<S: KvStore> {
    inner: Arc<Mutex<Session<S>>>,
}

impl<S: KvStore> SharedSession<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut Session<S>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl<S: KvStore> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
