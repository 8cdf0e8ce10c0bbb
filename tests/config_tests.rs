//! Configuration loading tests

use changas::config::{load_config_from_path, ColorMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("changas.toml");
    fs::write(
        &path,
        r#"
        [api]
        base_url = "https://api.changas.example"
        timeout_secs = 10

        [session]
        file = "/tmp/changas-test/session.json"

        [output]
        color = "never"
        "#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.base_url, "https://api.changas.example");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(
        config.session.file,
        std::path::PathBuf::from("/tmp/changas-test/session.json")
    );
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_env_interpolation_in_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("changas.toml");
    fs::write(
        &path,
        r#"
        [api]
        base_url = "${CHANGAS_TEST_API_URL:-http://fallback:8081}"
        "#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.base_url, "http://fallback:8081");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("changas.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    assert!(load_config_from_path(&path).is_err());
}
