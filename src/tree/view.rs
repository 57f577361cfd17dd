//! Read-only view of the current folder

use crate::tree::model::{Folder, Forest, Table};

/// The folder a path resolves to.
///
/// At the root this is a synthetic view combining the forest's root folders
/// and root tables; below it, a borrowed nested folder.
#[derive(Debug, Clone, Copy)]
pub enum FolderView<'a> {
    Root(&'a Forest),
    Nested(&'a Folder),
}

impl<'a> FolderView<'a> {
    pub fn is_root(&self) -> bool {
        matches!(self, FolderView::Root(_))
    }

    /// Folder name; `None` for the root view
    pub fn name(&self) -> Option<&'a str> {
        match self {
            FolderView::Root(_) => None,
            FolderView::Nested(folder) => Some(folder.name.as_str()),
        }
    }

    pub fn folders(&self) -> &'a [Folder] {
        match self {
            FolderView::Root(forest) => &forest.root_folders,
            FolderView::Nested(folder) => &folder.children,
        }
    }

    pub fn tables(&self) -> &'a [Table] {
        match self {
            FolderView::Root(forest) => &forest.root_tables,
            FolderView::Nested(folder) => &folder.tables,
        }
    }

    /// First child folder with exactly this name
    pub fn folder(&self, name: &str) -> Option<&'a Folder> {
        self.folders().iter().find(|folder| folder.name == name)
    }

    pub fn table(&self, name: &str) -> Option<&'a Table> {
        self.tables().iter().find(|table| table.name == name)
    }

    pub fn folder_names(&self) -> Vec<&'a str> {
        self.folders().iter().map(|folder| folder.name.as_str()).collect()
    }

    pub fn table_names(&self) -> Vec<&'a str> {
        self.tables().iter().map(|table| table.name.as_str()).collect()
    }
}
