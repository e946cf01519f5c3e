use super::data::Config;
use super::io::ConfigError;
use crate::core::constants::DEFAULT_API_BASE_URL;
use tempfile::TempDir;

#[test]
fn load_nonexistent_config_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        base_url: Some("https://counsel.example.com".to_string()),
        theme: Some("light".to_string()),
    };
    config.save_to_path(&config_path).expect("save failed");

    let loaded = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(loaded, config);

    let unset = Config {
        theme: None,
        ..loaded
    };
    unset.save_to_path(&config_path).expect("second save failed");
    let reloaded = Config::load_from_path(&config_path).expect("reload failed");
    assert_eq!(reloaded.theme, None);
    assert_eq!(
        reloaded.base_url.as_deref(),
        Some("https://counsel.example.com")
    );
}

#[test]
fn invalid_toml_reports_parse_error_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "base_url = [not toml").expect("write");

    let err = Config::load_from_path(&config_path).expect_err("parse should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config at"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn base_url_precedence() {
    let config = Config {
        base_url: Some("http://from-config:1/".to_string()),
        theme: None,
    };

    assert_eq!(
        config.resolve_base_url(Some("http://from-cli:3"), Some("http://from-env:2")),
        "http://from-cli:3"
    );
    assert_eq!(
        config.resolve_base_url(None, Some("http://from-env:2")),
        "http://from-env:2"
    );
    assert_eq!(config.resolve_base_url(Some("  "), Some("")), "http://from-config:1");
    assert_eq!(
        Config::default().resolve_base_url(None, None),
        DEFAULT_API_BASE_URL
    );
}

#[test]
fn unknown_theme_falls_back_to_dark() {
    let config = Config {
        base_url: None,
        theme: Some("solarized".to_string()),
    };
    assert_eq!(config.resolve_theme().name, "dark");

    let light = Config {
        base_url: None,
        theme: Some("light".to_string()),
    };
    assert_eq!(light.resolve_theme().name, "light");
}

#[test]
fn summary_lists_every_key() {
    let config = Config {
        base_url: Some("http://localhost:4000".to_string()),
        theme: None,
    };
    assert_eq!(
        config.summary_lines(),
        vec![
            "Current configuration:".to_string(),
            "  base-url: http://localhost:4000".to_string(),
            "  theme: (unset)".to_string(),
        ]
    );
}
