//! RC Tracker: a persistent hierarchy of folders and tables
//!
//! Users build a tree of named folders, each holding subfolders and tables,
//! and move around it by path. The tree model, navigation state and
//! persistence adapter live here; rendering is left to whatever host drives a
//! [`session::Session`].

pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod store;
pub mod tree;

pub use error::{ApiError, StorageError, TreeError};
pub use session::{Change, Session, SharedSession};
pub use tree::{Folder, FolderPath, Forest, Table};
