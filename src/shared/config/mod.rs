//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file in
//! the user's config directory, then environment overrides.
//!
//! ```toml
//! api_url = "http://localhost:8080"
//! search_debounce_ms = 300
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default backend URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default search debounce window in milliseconds
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

const API_URL_ENV: &str = "ADOPTION_API_URL";
const DEBOUNCE_ENV: &str = "ADOPTION_SEARCH_DEBOUNCE_MS";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL
    pub api_url: String,
    /// Quiet window of the incremental search
    pub search_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    search_debounce_ms: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url().map(|_| ())
    }

    /// Parsed base URL of the backend
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(self.api_url.clone()));
        }
        Ok(url)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut builder = Self::builder();
        if let Some(url) = file.api_url {
            builder = builder.api_url(url);
        }
        if let Some(ms) = file.search_debounce_ms {
            builder = builder.search_debounce_ms(ms);
        }
        builder.build()
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("adoption-center").join("config.toml"))
    }

    /// Defaults, then the config file if present, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("[CONFIG] Loading {}", path.display());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn with_env_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfigBuilder::from(self);
        if let Some(url) = lookup(API_URL_ENV) {
            builder = builder.api_url(url);
        }
        if let Some(raw) = lookup(DEBOUNCE_ENV) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { key: DEBOUNCE_ENV, value: raw })?;
            builder = builder.search_debounce_ms(ms);
        }
        builder.build()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    search_debounce_ms: Option<u64>,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            api_url: Some(config.api_url),
            search_debounce_ms: Some(config.search_debounce_ms),
        }
    }
}

impl AppConfigBuilder {
    /// Set the backend URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the search debounce window
    pub fn search_debounce_ms(mut self, ms: u64) -> Self {
        self.search_debounce_ms = Some(ms);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            api_url: self
                .api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            search_debounce_ms: self.search_debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("cannot read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    #[error("invalid config file: {0}")]
    Parse(String),
}
