//! `set` / `unset` handling for the persisted configuration.

use std::fmt;

use crate::core::config::data::Config;
use crate::ui::theme::Theme;
use crate::utils::url::{is_http_url, normalize_base_url};

/// Keys accepted by `confidant set` and `confidant unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BaseUrl,
    Theme,
}

impl ConfigKey {
    pub fn parse(key: &str) -> Result<Self, SettingError> {
        match key {
            "base-url" => Ok(ConfigKey::BaseUrl),
            "theme" => Ok(ConfigKey::Theme),
            other => Err(SettingError::UnknownKey(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Theme => "theme",
        }
    }
}

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The provided theme is not a built-in theme.
    UnknownTheme(String),
    /// The provided base URL is not an http(s) URL.
    InvalidUrl(String),
    /// No value was given for a key that needs one.
    MissingValue(ConfigKey),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                eprintln!("   Available keys: base-url, theme");
            }
            SettingError::UnknownTheme(name) => {
                eprintln!("❌ Unknown theme: {name}");
                eprintln!("   Available themes: {}", Theme::BUILTIN_NAMES.join(", "));
            }
            SettingError::InvalidUrl(url) => {
                eprintln!("❌ Invalid base URL: {url}");
                eprintln!("Example: confidant set base-url http://localhost:4000");
            }
            SettingError::MissingValue(key) => {
                eprintln!("⚠️  Specify a value for {}", key.as_str());
                eprintln!("Example: confidant set {} <value>", key.as_str());
            }
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown config key: {key}"),
            SettingError::UnknownTheme(name) => write!(f, "Unknown theme: {name}"),
            SettingError::InvalidUrl(url) => write!(f, "Invalid base URL: {url}"),
            SettingError::MissingValue(key) => write!(f, "Missing value for {}", key.as_str()),
        }
    }
}

impl std::error::Error for SettingError {}

/// Validate `value` and store it under `key`. Returns the confirmation text.
pub fn apply_set(config: &mut Config, key: ConfigKey, value: &str) -> Result<String, SettingError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SettingError::MissingValue(key));
    }

    let stored = match key {
        ConfigKey::BaseUrl => {
            if !is_http_url(value) {
                return Err(SettingError::InvalidUrl(value.to_string()));
            }
            let url = normalize_base_url(value);
            config.base_url = Some(url.clone());
            url
        }
        ConfigKey::Theme => {
            let theme =
                Theme::from_name(value).ok_or_else(|| SettingError::UnknownTheme(value.to_string()))?;
            config.theme = Some(theme.name.to_string());
            theme.name.to_string()
        }
    };

    Ok(format!("✅ Set {} to: {stored}", key.as_str()))
}

pub fn apply_unset(config: &mut Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::BaseUrl => config.base_url = None,
        ConfigKey::Theme => config.theme = None,
    }
    format!("✅ Unset {}", key.as_str())
}
