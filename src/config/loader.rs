//! Loading and validating configuration files.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use super::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Default config file location: `<config dir>/tldw/config.toml`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tldw")
            .join("config.toml")
    }

    /// Load from the default location; a missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Reject values the rest of the crate would only trip over later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.client.base_url).map_err(|err| {
            ConfigError::ValidationError(format!(
                "client.base_url '{}' is not a URL: {err}",
                self.client.base_url
            ))
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ConfigError::ValidationError(format!(
                "client.base_url must be http or https, got '{}'",
                base.scheme()
            )));
        }

        self.server.bind_addr.parse::<SocketAddr>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "server.bind_addr '{}' is not a host:port address",
                self.server.bind_addr
            ))
        })?;

        if self.summarizer.language.is_empty() {
            return Err(ConfigError::ValidationError(
                "summarizer.language must not be empty".to_string(),
            ));
        }
        if self.summarizer.max_sentences == 0 {
            return Err(ConfigError::ValidationError(
                "summarizer.max_sentences must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
