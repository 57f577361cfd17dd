//! Forest, Folder and Table records
//!
//! These are the persisted shapes: each serializes to a plain JSON object and
//! the forest is stored as two independent arrays (root folders, root tables).

use crate::tree::path::FolderPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sibling namespace an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Folder,
    Table,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Folder => write!(f, "folder"),
            EntryKind::Table => write!(f, "table"),
        }
    }
}

/// A named leaf holding placeholder columns and opaque rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Row records; never interpreted here
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// A named container that exclusively owns its subfolders and tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Folder>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Folder {
    /// An empty folder. The name is stored as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Folders in this subtree, this folder included
    pub fn folder_count(&self) -> usize {
        1 + self.children.iter().map(Folder::folder_count).sum::<usize>()
    }

    /// Tables in this subtree
    pub fn table_count(&self) -> usize {
        self.tables.len() + self.children.iter().map(Folder::table_count).sum::<usize>()
    }
}

/// The full hierarchy.
///
/// Root tables are held at the menu level, separately from any folder's
/// tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    #[serde(default)]
    pub root_folders: Vec<Folder>,
    #[serde(default)]
    pub root_tables: Vec<Table>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root_folders.is_empty() && self.root_tables.is_empty()
    }

    /// Every folder in the forest, at any depth
    pub fn folder_count(&self) -> usize {
        self.root_folders.iter().map(Folder::folder_count).sum()
    }

    /// Every table in the forest, root tables included
    pub fn table_count(&self) -> usize {
        self.root_tables.len() + self.root_folders.iter().map(Folder::table_count).sum::<usize>()
    }

    /// Longest prefix of `path` that still resolves to a folder.
    ///
    /// Returns the root when not even the first segment exists.
    pub fn nearest_valid(&self, path: &FolderPath) -> FolderPath {
        let mut level = &self.root_folders;
        let mut depth = 0;
        for segment in path {
            match level.iter().find(|folder| folder.name == *segment) {
                Some(folder) => {
                    level = &folder.children;
                    depth += 1;
                }
                None => break,
            }
        }
        path.prefix(depth)
    }
}

/// Column layout given to every newly created table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTemplate {
    columns: Vec<String>,
}

impl TableTemplate {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// A fresh table with the template's columns and no rows
    pub fn instantiate(&self, name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            rows: Vec::new(),
            columns: self.columns.clone(),
        }
    }
}

impl Default for TableTemplate {
    fn default() -> Self {
        Self {
            columns: vec!["Column 1".to_string(), "Column 2".to_string()],
        }
    }
}
