//! Tests for config module

use prism_query::config::{default_config_path, expand_tilde, QueryConfig};
use prism_query::{QueryDescriptor, RequestTranslator};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = QueryConfig::default();

    assert_eq!(config.request.max_result_window, 10_000);
    assert_eq!(config.request.all_indices, "_all");
    assert!(config.request.track_total_hits.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_expand_tilde() {
    let home = dirs::home_dir().unwrap();

    let expanded = expand_tilde(&PathBuf::from("~/foo")).unwrap();
    assert_eq!(expanded, home.join("foo"));

    let expanded = expand_tilde(&PathBuf::from("~")).unwrap();
    assert_eq!(expanded, home);

    let expanded = expand_tilde(&PathBuf::from("/absolute/path")).unwrap();
    assert_eq!(expanded, PathBuf::from("/absolute/path"));

    let expanded = expand_tilde(&PathBuf::from("relative/path")).unwrap();
    assert_eq!(expanded, PathBuf::from("relative/path"));
}

#[test]
fn test_default_config_path() {
    let home = dirs::home_dir().unwrap();
    assert_eq!(
        default_config_path().unwrap(),
        home.join(".prism").join("query.toml")
    );
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = tempdir().unwrap();
    let config = QueryConfig::load_or_default(&temp.path().join("nope.toml")).unwrap();
    assert_eq!(config.request.max_result_window, 10_000);
}

#[test]
fn test_save_and_load() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("nested").join("query.toml");

    let mut config = QueryConfig::default();
    config.request.max_result_window = 500;
    config.request.all_indices = "*".to_string();
    config.request.track_total_hits = Some(true);
    config.logging.level = "debug".to_string();

    config.save(&config_path).unwrap();
    assert!(config_path.exists());

    let loaded = QueryConfig::load_or_default(&config_path).unwrap();
    assert_eq!(loaded.request.max_result_window, 500);
    assert_eq!(loaded.request.all_indices, "*");
    assert_eq!(loaded.request.track_total_hits, Some(true));
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_partial_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("query.toml");
    std::fs::write(&config_path, "[request]\nmax_result_window = 100\n").unwrap();

    let config = QueryConfig::load_or_default(&config_path).unwrap();
    assert_eq!(config.request.max_result_window, 100);
    assert_eq!(config.request.all_indices, "_all");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_config_rejected() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("query.toml");

    std::fs::write(&config_path, "[request]\nmax_result_window = 0\n").unwrap();
    assert!(QueryConfig::load_or_default(&config_path).is_err());

    std::fs::write(&config_path, "[request]\nall_indices = \" \"\n").unwrap();
    assert!(QueryConfig::load_or_default(&config_path).is_err());

    std::fs::write(&config_path, "not toml [").unwrap();
    assert!(QueryConfig::load_or_default(&config_path).is_err());
}

#[test]
fn test_loaded_config_drives_translation() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("query.toml");
    std::fs::write(
        &config_path,
        "[request]\nall_indices = \"docs-*\"\ntrack_total_hits = false\n",
    )
    .unwrap();

    let config = QueryConfig::load_or_default(&config_path).unwrap();
    let request = RequestTranslator::new(&config)
        .translate(&QueryDescriptor::new())
        .unwrap();
    assert_eq!(request.path, "/docs-*/_search");
    assert_eq!(request.body.track_total_hits, Some(false));
}
