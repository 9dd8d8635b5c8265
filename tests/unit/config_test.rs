//! Unit tests for the shell config store: load/save semantics,
//! dot-notation updates, and reset.

use serde_json::json;
use tempfile::TempDir;

use glassview::config::{ConfigStore, FileConfigStore, ShellConfig};
use glassview::types::errors::ConfigError;

fn store_in(dir: &TempDir) -> FileConfigStore {
    let path = dir.path().join("config.json");
    FileConfigStore::new(Some(path.to_string_lossy().to_string()))
}

// ─── Load ───

#[test]
fn test_load_missing_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    let config = store.load().unwrap();
    assert_eq!(config, ShellConfig::default());
    assert_eq!(config.window.title, "GlassView");
    assert!(!config.debug);
}

#[test]
fn test_load_malformed_file_is_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = FileConfigStore::new(Some(path.to_string_lossy().to_string()));
    assert!(matches!(
        store.load(),
        Err(ConfigError::SerializationError(_))
    ));
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(&path, r#"{"debug": true}"#).unwrap();

    let mut store = FileConfigStore::new(Some(path.to_string_lossy().to_string()));
    let config = store.load().unwrap();
    assert!(config.debug);
    assert_eq!(config.window.title, "GlassView");
}

// ─── Save ───

#[test]
fn test_save_and_reload_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    store.load().unwrap();
    store.set_value("window.title", json!("Saved Title")).unwrap();

    let mut reopened = store_in(&tmp);
    let config = reopened.load().unwrap();
    assert_eq!(config.window.title, "Saved Title");
}

#[test]
fn test_save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deep").join("config.json");
    let store = FileConfigStore::new(Some(path.to_string_lossy().to_string()));
    store.save().unwrap();
    assert!(path.exists());
}

// ─── set_value ───

#[test]
fn test_set_value_nested_key() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    store.set_value("window.width", json!(1024)).unwrap();
    store.set_value("window.fullscreen", json!(true)).unwrap();
    assert_eq!(store.get_config().window.width, 1024);
    assert!(store.get_config().window.fullscreen);
}

#[test]
fn test_set_value_top_level_key() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    store.set_value("debug", json!(true)).unwrap();
    assert!(store.get_config().debug);
}

#[test]
fn test_set_value_tuple_field() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    store.set_value("window.min_size", json!([320, 240])).unwrap();
    assert_eq!(store.get_config().window.min_size, (320, 240));
}

#[test]
fn test_set_value_empty_key() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    assert!(matches!(
        store.set_value("", json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_unknown_key() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    assert!(matches!(
        store.set_value("window.nope", json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
    assert!(matches!(
        store.set_value("nothing.here", json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_wrong_type_rejected() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    let result = store.set_value("window.width", json!("wide"));
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    // Config unchanged after the failed update
    assert_eq!(store.get_config().window.width, 800);
}

// ─── Reset ───

#[test]
fn test_reset_restores_defaults_and_persists() {
    let tmp = TempDir::new().unwrap();
    let mut store = store_in(&tmp);
    store.set_value("window.title", json!("Changed")).unwrap();
    store.reset().unwrap();
    assert_eq!(*store.get_config(), ShellConfig::default());

    let mut reopened = store_in(&tmp);
    assert_eq!(reopened.load().unwrap(), ShellConfig::default());
}

#[test]
fn test_config_path_reported() {
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);
    assert!(store.get_config_path().ends_with("config.json"));
}
