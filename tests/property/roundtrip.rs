//! Replaying persisted bytes reproduces the in-memory forest

use proptest::prelude::*;
use rc_tracker::store::{ForestStore, MemoryKvStore};
use rc_tracker::tree::{add_folder, delete_folder, FolderPath, Forest};
use rc_tracker::Folder;

#[derive(Debug, Clone)]
enum Op {
    Add { at: usize, name: String },
    Delete { at: usize, name: String },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), "[ a-c]{0,3}").prop_map(|(at, name)| Op::Add { at, name }),
        (any::<usize>(), "[a-c]{1,2}").prop_map(|(at, name)| Op::Delete { at, name }),
    ]
}

/// Root plus every folder path in the forest, depth-first
fn all_paths(forest: &Forest) -> Vec<FolderPath> {
    fn walk(folders: &[Folder], prefix: &FolderPath, out: &mut Vec<FolderPath>) {
        for folder in folders {
            let path = prefix.child(folder.name.clone());
            out.push(path.clone());
            walk(&folder.children, &path, out);
        }
    }
    let mut out = vec![FolderPath::root()];
    walk(&forest.root_folders, &FolderPath::root(), &mut out);
    out
}

fn apply(forest: &Forest, op: &Op) -> Forest {
    let paths = all_paths(forest);
    match op {
        Op::Add { at, name } => {
            let path = &paths[at % paths.len()];
            // Blank and duplicate names are rejected; the forest stays as it was
            add_folder(forest, path, name).unwrap_or_else(|_| forest.clone())
        }
        Op::Delete { at, name } => {
            let path = &paths[at % paths.len()];
            delete_folder(forest, path, name).unwrap()
        }
    }
}

/// Test that save followed by load reproduces the forest after any edit sequence
#[test]
fn test_persisted_forest_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(op_strategy(), 0..40), |ops| {
            let store = ForestStore::new(MemoryKvStore::new());
            let mut forest = Forest::new();

            for op in &ops {
                forest = apply(&forest, op);
                store.save(&forest).unwrap();
            }

            prop_assert_eq!(store.load().unwrap(), forest);
            Ok(())
        })
        .unwrap();
}

/// Test that deleting an absent name never changes the forest
#[test]
fn test_delete_absent_is_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(op_strategy(), 0..20), |ops| {
            let forest = ops.iter().fold(Forest::new(), |forest, op| apply(&forest, op));
            for path in all_paths(&forest) {
                let after = delete_folder(&forest, &path, "zz-not-present").unwrap();
                prop_assert_eq!(&after, &forest);
            }
            Ok(())
        })
        .unwrap();
}

proptest! {
    /// Test that sibling folder names stay unique whatever is added
    #[test]
    fn test_sibling_names_unique(names in prop::collection::vec("[ a-b]{1,3}", 1..20)) {
        let mut forest = Forest::new();
        for name in &names {
            if let Ok(next) = add_folder(&forest, &FolderPath::root(), name) {
                forest = next;
            }
        }
        let mut seen: Vec<&str> = forest.root_folders.iter().map(|f| f.name.as_str()).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);
        prop_assert!(forest.root_folders.iter().all(|f| f.name == f.name.trim() && !f.name.is_empty()));
    }
}
