use crate::core::config::data::{path_display, Config};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Errors that can occur when loading or saving the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`].
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to serialize or write the configuration file.
    Write {
        path: PathBuf,
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The platform has no configuration directory for this user.
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path_display(path), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path_display(path), source)
            }
            ConfigError::Write { path, source } => {
                write!(f, "Failed to write config at {}: {}", path_display(path), source)
            }
            ConfigError::NoConfigDir => write!(f, "Could not determine a configuration directory"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Write { source, .. } => Some(source.as_ref()),
            ConfigError::NoConfigDir => None,
        }
    }
}

impl Config {
    /// Load from `config_path`; a missing file yields the defaults.
    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Write atomically: serialize into a temp file beside the target, then rename.
    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let write_error = |source: Box<dyn StdError + Send + Sync>| ConfigError::Write {
            path: config_path.to_path_buf(),
            source,
        };

        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            fs::create_dir_all(dir).map_err(|err| write_error(Box::new(err)))?;
        }

        let contents = toml::to_string_pretty(self).map_err(|err| write_error(Box::new(err)))?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(|err| write_error(Box::new(err)))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|err| write_error(Box::new(err)))?;
        temp_file
            .as_file_mut()
            .sync_all()
            .map_err(|err| write_error(Box::new(err)))?;
        temp_file
            .persist(config_path)
            .map_err(|err| write_error(Box::new(err)))?;
        Ok(())
    }

    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "confidant", "confidant")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Config, ConfigError> {
        match Self::get_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to_path(&path)
    }
}
