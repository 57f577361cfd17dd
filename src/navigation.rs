//! Navigation State
//!
//! The current location is a [`FolderPath`]. The free functions model plain
//! path arithmetic and never look at the forest; [`Navigator`] adds checked
//! descent and recovery from paths that stopped resolving.

use crate::error::TreeError;
use crate::tree::{resolve_path, FolderPath, FolderView, Forest};
use tracing::{debug, warn};

/// Descend one level. The child is not checked for existence.
pub fn open(path: &FolderPath, name: &str) -> FolderPath {
    path.child(name)
}

/// Ascend one level; the root stays the root.
pub fn back(path: &FolderPath) -> FolderPath {
    path.parent()
}

/// Return to the root from any depth.
pub fn to_menu(_path: &FolderPath) -> FolderPath {
    FolderPath::root()
}

/// Holder of the current path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    path: FolderPath,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(path: FolderPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &FolderPath {
        &self.path
    }

    /// Permissive descent; see [`open`].
    pub fn open(&mut self, name: &str) {
        self.path = open(&self.path, name);
    }

    /// Descend only if `name` is a child folder of the current folder.
    ///
    /// On failure the path is left as it was.
    pub fn open_checked(&mut self, forest: &Forest, name: &str) -> Result<(), TreeError> {
        let target = open(&self.path, name);
        resolve_path(forest, &target)?;
        debug!(path = %target, "Opened folder");
        self.path = target;
        Ok(())
    }

    pub fn back(&mut self) {
        self.path = back(&self.path);
    }

    pub fn to_menu(&mut self) {
        self.path = to_menu(&self.path);
    }

    /// Resolve the current folder against `forest`.
    pub fn current<'a>(&self, forest: &'a Forest) -> Result<FolderView<'a>, TreeError> {
        resolve_path(forest, &self.path)
    }

    /// Snap to the nearest ancestor that still resolves. Returns true if the
    /// path changed.
    pub fn recover(&mut self, forest: &Forest) -> bool {
        let valid = forest.nearest_valid(&self.path);
        if valid == self.path {
            return false;
        }
        warn!(stale = %self.path, now = %valid, "Current path no longer resolves; moving up");
        self.path = valid;
        true
    }
}
