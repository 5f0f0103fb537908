use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::i18n::Locale;
use crate::preferences::Theme;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; defaults were used.
    Defaults(PathBuf),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Artificial delay applied to every simulated API response.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Used until the user picks a language.
    #[serde(default)]
    pub language: Locale,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where UI preferences are kept. Defaults to `preferences.json` next to
    /// the config file.
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default value functions
fn default_latency_ms() -> u64 {
    700
}

fn default_buffer_size() -> usize {
    32
}

fn default_toast_timeout_ms() -> u64 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            theme: Theme::default(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl ApiConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl UiConfig {
    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }
}

impl Config {
    /// Get config directory path (e.g. ~/.config/training-admin/)
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not find config directory")?;
        Ok(base.join("training-admin"))
    }

    /// Get config file path (<config dir>/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location. A missing
    /// file yields the defaults. Runs before logging is set up, so the caller
    /// reports the returned source.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let config_file = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_file()?,
        };

        if !config_file.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(config_file)));
        }

        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok((config, ConfigSource::File(config_file)))
    }

    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.storage.preferences_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("preferences.json")),
        }
    }
}
