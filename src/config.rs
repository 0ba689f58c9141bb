use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pagination::{DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_PAGE_URL_KEY};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Defaults applied when a request leaves the optional fields out.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: u32,
    #[serde(default = "default_page_url_key")]
    pub page_url_key: String,
    /// Largest `max_page_buttons` an HTTP client may ask for.
    #[serde(default = "default_max_page_buttons_limit")]
    pub max_page_buttons_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_page_buttons: default_max_page_buttons(),
            page_url_key: default_page_url_key(),
            max_page_buttons_limit: default_max_page_buttons_limit(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.pagination.max_page_buttons == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "pagination.max_page_buttons must be at least 1".to_string(),
            });
        }
        if self.pagination.max_page_buttons > self.pagination.max_page_buttons_limit {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "pagination.max_page_buttons must not exceed {}",
                    self.pagination.max_page_buttons_limit
                ),
            });
        }
        if self.pagination.page_url_key.is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "pagination.page_url_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

// Default value functions

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8085
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_page_buttons() -> u32 {
    DEFAULT_MAX_PAGE_BUTTONS
}

fn default_page_url_key() -> String {
    DEFAULT_PAGE_URL_KEY.to_string()
}

fn default_max_page_buttons_limit() -> u32 {
    100
}
