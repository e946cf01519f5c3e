use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::constants::DEFAULT_API_BASE_URL;
use crate::ui::theme::Theme;
use crate::utils::url::normalize_base_url;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the chat backend (e.g., "http://localhost:4000")
    pub base_url: Option<String>,
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
}

impl Config {
    /// Pick the base URL: CLI flag, then environment, then config file, then
    /// the built-in default. Blank values are skipped.
    pub fn resolve_base_url(&self, cli_value: Option<&str>, env_value: Option<&str>) -> String {
        [cli_value, env_value, self.base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn resolve_theme(&self) -> Theme {
        match self.theme.as_deref() {
            None => Theme::dark_default(),
            Some(name) => Theme::from_name(name).unwrap_or_else(|| {
                warn!(theme = name, "Unknown theme in config; using dark");
                Theme::dark_default()
            }),
        }
    }
}

/// Get a user-friendly display string for a path, using `~` for the home
/// directory on Unix-like systems.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
