//! Path resolution and copy-on-write mutations
//!
//! Mutations clone the forest, apply the change to the clone and hand it back.
//! The caller decides whether to commit the result.

use crate::error::TreeError;
use crate::tree::model::{EntryKind, Folder, Forest, Table, TableTemplate};
use crate::tree::path::{normalize_name, FolderPath};
use crate::tree::view::FolderView;
use tracing::debug;

/// Mutable access to the folders and tables directly under one path.
struct Container<'a> {
    folders: &'a mut Vec<Folder>,
    tables: &'a mut Vec<Table>,
}

/// Walk `path` from the root, matching each segment against child folder names.
///
/// The empty path yields the synthetic root view.
pub fn resolve_path<'a>(forest: &'a Forest, path: &FolderPath) -> Result<FolderView<'a>, TreeError> {
    let not_found = || TreeError::PathNotFound(path.clone());

    let mut segments = path.iter();
    let Some(first) = segments.next() else {
        return Ok(FolderView::Root(forest));
    };

    let mut folder = find_folder(&forest.root_folders, first).ok_or_else(not_found)?;
    for segment in segments {
        folder = find_folder(&folder.children, segment).ok_or_else(not_found)?;
    }
    Ok(FolderView::Nested(folder))
}

fn find_folder<'a>(folders: &'a [Folder], name: &str) -> Option<&'a Folder> {
    folders.iter().find(|folder| folder.name == name)
}

fn resolve_container_mut<'a>(
    forest: &'a mut Forest,
    path: &FolderPath,
) -> Result<Container<'a>, TreeError> {
    let not_found = || TreeError::PathNotFound(path.clone());

    let mut segments = path.iter();
    let Some(first) = segments.next() else {
        return Ok(Container {
            folders: &mut forest.root_folders,
            tables: &mut forest.root_tables,
        });
    };

    let mut folder = forest
        .root_folders
        .iter_mut()
        .find(|folder| folder.name == *first)
        .ok_or_else(not_found)?;
    for segment in segments {
        folder = folder
            .children
            .iter_mut()
            .find(|child| child.name == *segment)
            .ok_or_else(not_found)?;
    }
    Ok(Container {
        folders: &mut folder.children,
        tables: &mut folder.tables,
    })
}

/// Append an empty folder under `path`.
///
/// The name is trimmed first; blank names fail with `InvalidName` and a name
/// already used by a sibling folder fails with `DuplicateName`.
pub fn add_folder(forest: &Forest, path: &FolderPath, name: &str) -> Result<Forest, TreeError> {
    let name = normalize_name(name)?;
    let mut next = forest.clone();
    let container = resolve_container_mut(&mut next, path)?;

    if container.folders.iter().any(|folder| folder.name == name) {
        return Err(TreeError::DuplicateName {
            kind: EntryKind::Folder,
            name,
        });
    }

    debug!(path = %path, name = %name, "Adding folder");
    container.folders.push(Folder::new(name));
    Ok(next)
}

/// Remove the child folder called `name` under `path`, with everything it owns.
///
/// `name` is compared verbatim. A missing name leaves the forest unchanged.
pub fn delete_folder(forest: &Forest, path: &FolderPath, name: &str) -> Result<Forest, TreeError> {
    let mut next = forest.clone();
    let container = resolve_container_mut(&mut next, path)?;

    match container.folders.iter().position(|folder| folder.name == name) {
        Some(index) => {
            let removed = container.folders.remove(index);
            debug!(
                path = %path,
                name = %name,
                folders = removed.folder_count(),
                tables = removed.table_count(),
                "Deleted folder subtree"
            );
        }
        None => debug!(path = %path, name = %name, "No folder to delete"),
    }
    Ok(next)
}

/// Append a table under `path` with the template's columns and no rows.
///
/// At the root the table joins the forest's root tables.
pub fn add_table(
    forest: &Forest,
    path: &FolderPath,
    name: &str,
    template: &TableTemplate,
) -> Result<Forest, TreeError> {
    let name = normalize_name(name)?;
    let mut next = forest.clone();
    let container = resolve_container_mut(&mut next, path)?;

    if container.tables.iter().any(|table| table.name == name) {
        return Err(TreeError::DuplicateName {
            kind: EntryKind::Table,
            name,
        });
    }

    debug!(path = %path, name = %name, "Adding table");
    container.tables.push(template.instantiate(name));
    Ok(next)
}

/// Remove the table called `name` under `path`. A missing name is a no-op.
pub fn delete_table(forest: &Forest, path: &FolderPath, name: &str) -> Result<Forest, TreeError> {
    let mut next = forest.clone();
    let container = resolve_container_mut(&mut next, path)?;

    match container.tables.iter().position(|table| table.name == name) {
        Some(index) => {
            container.tables.remove(index);
            debug!(path = %path, name = %name, "Deleted table");
        }
        None => debug!(path = %path, name = %name, "No table to delete"),
    }
    Ok(next)
}
