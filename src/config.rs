use crate::error::{BookshelfError, Result};
use crate::storage::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// How new document IDs are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    #[default]
    Random,
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default)]
    pub id_mode: IdMode,

    /// Encoding used for newly written documents.
    #[serde(default)]
    pub format: DocumentFormat,
}

fn default_path() -> String {
    ".bookshelf".to_string()
}

fn default_id_length() -> usize {
    12
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            id_length: default_id_length(),
            id_mode: IdMode::default(),
            format: DocumentFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl BookshelfConfig {
    /// Find the nearest config file at or above `start_path` and load it.
    ///
    /// Returns the config together with the project root (the directory
    /// holding the config file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(BookshelfError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                BookshelfError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BookshelfError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.store.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
