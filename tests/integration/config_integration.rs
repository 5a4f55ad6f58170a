//! Integration tests for configuration layering

use pagewin::config::{ConfigLoader, PagewinConfig};
use tempfile::TempDir;

#[test]
fn test_workspace_without_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.paging, PagewinConfig::default().paging);
    assert_eq!(config.display.ellipsis, "...");
}

#[test]
fn test_workspace_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[display]
default_format = "table"

[logging]
level = "info"
output = "file"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.display.default_format, "table");
    assert!(config.display.highlight_current);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.output, "file");
}

#[test]
fn test_explicit_file_rejects_unknown_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(&config_file, "[display]\ndefault_format = \"csv\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(err.to_string().contains("csv"));
}
