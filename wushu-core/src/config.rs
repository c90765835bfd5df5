//! Global wushu configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{WushuError, WushuResult};
use crate::storage::{FileStorage, STORAGE_KEY};

static DEFAULT_DATA_DIR: &str = "~/.local/share/wushu";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/wushu/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WushuConfig {
    /// Where the event file lives. May start with `~`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the stored event list (the file is `<storage_key>.json`).
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for WushuConfig {
    fn default() -> Self {
        WushuConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl WushuConfig {
    pub fn config_path() -> WushuResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WushuError::Config("Could not determine config directory".into()))?
            .join("wushu");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default file first if none exists.
    pub fn load() -> WushuResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> WushuResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| WushuError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WushuError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> WushuResult<()> {
        let contents = format!(
            "\
# wushu configuration

# Where your events are stored:
# data_dir = \"{}\"

# Name of the event list inside data_dir (stored as <storage_key>.json):
# storage_key = \"{}\"
",
            DEFAULT_DATA_DIR, STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WushuError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| WushuError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_path(), &self.storage_key)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage().path().to_path_buf()
    }
}
