//! Configuration file handling.
//!
//! Settings live in `<config dir>/snipr/config.toml`. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://snipr-iota.vercel.app";
pub const DEFAULT_INFOBOX_BASE: &str = "https://neopedia.kushs.dev";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Host serving search, currency, meaning, translate, tts and suggest.
    pub api_base: String,
    /// Host serving the infobox endpoint.
    pub infobox_base: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of search results to ask for.
    pub search_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            infobox_base: DEFAULT_INFOBOX_BASE.to_string(),
            timeout_secs: 30,
            search_limit: 10,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snipr").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used when there is no file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, api_base: Option<String>, infobox_base: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(infobox_base) = infobox_base {
            self.infobox_base = infobox_base;
        }
        self
    }
}
