//! Folder and Table Hierarchy
//!
//! The forest is the whole persisted hierarchy: root folders plus root-level
//! tables, which live beside the root folders rather than inside a synthetic
//! root folder. Nested folders own their children and tables uniformly.
//!
//! Every mutation in [`ops`] is pure: it takes the current forest by shared
//! reference and returns a fresh forest, leaving the input untouched.

pub mod model;
pub mod ops;
pub mod path;
pub mod view;

pub use model::{EntryKind, Folder, Forest, Table, TableTemplate};
pub use ops::{add_folder, add_table, delete_folder, delete_table, resolve_path};
pub use path::{normalize_name, FolderPath};
pub use view::FolderView;
