//! Configuration system tests
//!
//! Tests for config paths, editor config persistence, and keymap loading/merging.

use costgrid::config::{EditorConfig, DEFAULT_API_BASE_URL};
use costgrid::config_paths;
use costgrid::keymap::{
    default_bindings, load_keymap_file, merge_bindings, Command, KeyCode, Keymap, KeymapError,
    Keystroke, Modifiers,
};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("costgrid"));
}

#[test]
fn test_files_live_in_config_dir() {
    let dir = config_paths::config_dir().unwrap();
    assert_eq!(config_paths::config_file().unwrap(), dir.join("config.yaml"));
    assert_eq!(config_paths::keymap_file().unwrap(), dir.join("keymap.yaml"));
    assert_eq!(config_paths::logs_dir().unwrap(), dir.join("logs"));
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.status_message_ms, 3000);
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        api_base_url: "http://localhost:3000".into(),
        status_message_ms: 1500,
        request_timeout_secs: 10,
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "status_message_ms: [not, a, number]").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "api_base_url: http://example.test/\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.base_url(), "http://example.test");
    assert_eq!(config.status_message_ms, 3000);
    assert_eq!(config.request_timeout_secs, 30);
}

// ========================================================================
// Keymap File Tests
// ========================================================================

#[test]
fn test_user_keymap_file_merges_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        r#"
bindings:
  - key: "f2"
    command: Enter
  - key: "delete"
    command: Unbound
"#,
    )
    .unwrap();

    let user = load_keymap_file(&path).unwrap();
    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), user));

    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::F(2))),
        Some(Command::Enter)
    );
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Delete)), None);
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL)),
        Some(Command::Copy)
    );
}

#[test]
fn test_missing_keymap_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_keymap_file(&dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(KeymapError::Io(_))));
}
