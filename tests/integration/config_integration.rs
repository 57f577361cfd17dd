//! Integration tests for layered configuration

use rc_tracker::config::{global_config_path, ConfigLoader, TrackerConfig};
use rc_tracker::store::SledKvStore;
use rc_tracker::{ApiError, Session};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

#[test]
fn test_defaults_resolve_under_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace = temp_dir.path().join("ws");
        fs::create_dir_all(&workspace).unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert!(config.storage.store_path.starts_with(temp_dir.path()));
        assert!(config.storage.store_path.ends_with("store"));
        assert_eq!(config.tree.default_columns, vec!["Column 1", "Column 2"]);
        assert!(config.validate().is_ok());
    });
}

#[test]
fn test_precedence_global_then_workspace_then_env() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let global = global_config_path().unwrap();
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            r#"
[storage]
store_path = "/global/store"

[tree]
default_columns = ["Global A", "Global B"]
"#,
        )
        .unwrap();

        let workspace = temp_dir.path().join("ws");
        fs::create_dir_all(workspace.join("config")).unwrap();
        fs::write(
            workspace.join("config").join("config.toml"),
            r#"
[tree]
default_columns = ["Part", "Qty"]
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.storage.store_path, PathBuf::from("/global/store"));
        assert_eq!(config.tree.default_columns, vec!["Part", "Qty"]);

        std::env::set_var("RC_TRACKER__STORAGE__STORE_PATH", "/from/env");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.storage.store_path, PathBuf::from("/from/env"));
    });
}

#[test]
fn test_env_specific_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace = temp_dir.path().join("ws");
        let config_dir = workspace.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();
        fs::write(
            config_dir.join("staging.toml"),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        assert_eq!(ConfigLoader::load(&workspace).unwrap().logging.level, "warn");

        std::env::set_var("RC_TRACKER_ENV", "staging");
        assert_eq!(ConfigLoader::load(&workspace).unwrap().logging.level, "debug");
    });
}

#[test]
fn test_configured_columns_reach_new_tables() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tracker.toml");
    fs::write(
        &config_file,
        format!(
            "[storage]\nstore_path = {:?}\n\n[tree]\ndefault_columns = [\"Part\", \"Qty\"]\n",
            temp_dir.path().join("store").to_string_lossy()
        ),
    )
    .unwrap();

    let config: TrackerConfig = ConfigLoader::load_from_file(&config_file).unwrap();
    let store = SledKvStore::new(&config.storage.store_path).unwrap();
    let mut session = Session::with_config(store, &config.tree);
    session.create_table("Parts").unwrap();

    let table = &session.forest().root_tables[0];
    assert_eq!(table.columns, vec!["Part", "Qty"]);
}

#[test]
fn test_three_default_columns_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tracker.toml");
    fs::write(&config_file, "[tree]\ndefault_columns = [\"A\", \"B\", \"C\"]\n").unwrap();

    match ConfigLoader::load_from_file(&config_file) {
        Err(ApiError::ConfigError(msg)) => assert!(msg.contains("default_columns")),
        other => panic!("expected ConfigError, got {:?}", other.map(|c| c.tree)),
    }
}

#[test]
fn test_blank_default_column_rejected_in_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace = temp_dir.path().join("ws");
        fs::create_dir_all(workspace.join("config")).unwrap();
        fs::write(
            workspace.join("config").join("config.toml"),
            "[tree]\ndefault_columns = [\"Name\", \" \"]\n",
        )
        .unwrap();

        assert!(matches!(
            ConfigLoader::load(&workspace),
            Err(ApiError::ConfigError(_))
        ));
    });
}

#[test]
fn test_default_columns_from_env_list() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace = temp_dir.path().join("ws");
        fs::create_dir_all(&workspace).unwrap();

        std::env::set_var("RC_TRACKER__TREE__DEFAULT_COLUMNS", "Part,Qty");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.tree.default_columns, vec!["Part", "Qty"]);

        std::env::set_var("RC_TRACKER__TREE__DEFAULT_COLUMNS", "A,B,C");
        assert!(ConfigLoader::load(&workspace).is_err());
    });
}

#[test]
fn test_session_from_config_persists_to_store_path() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = TrackerConfig::default();
    config.storage.store_path = temp_dir.path().join("store");

    {
        let mut session = Session::from_config(&config);
        assert!(!session.is_read_only());
        session.create_folder("Projects").unwrap();
    }

    let session = Session::from_config(&config);
    assert_eq!(session.forest().root_folders[0].name, "Projects");
}

#[test]
fn test_session_from_config_unopenable_store_is_read_only() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the database directory should be
    let blocker = temp_dir.path().join("store");
    fs::write(&blocker, "not a directory").unwrap();

    let mut config = TrackerConfig::default();
    config.storage.store_path = blocker;

    let mut session = Session::from_config(&config);
    assert!(session.is_read_only());
    assert!(session.forest().is_empty());
    assert!(matches!(session.create_folder("A"), Err(ApiError::ReadOnly)));
    assert!(session.current_folder().unwrap().is_root());
}
