//! UI preferences that survive restarts: active view, theme and language.
//!
//! Values live in a flat string key-value store, one key per preference.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Trainers,
    Clients,
    Packages,
    Reports,
    Settings,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Trainers,
        View::Clients,
        View::Packages,
        View::Reports,
        View::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Trainers => "trainers",
            View::Clients => "clients",
            View::Packages => "packages",
            View::Reports => "reports",
            View::Settings => "settings",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            View::Dashboard => "sidebar_dashboard",
            View::Trainers => "sidebar_trainers",
            View::Clients => "sidebar_clients",
            View::Packages => "sidebar_packages",
            View::Reports => "sidebar_reports",
            View::Settings => "sidebar_settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for View {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.key() == s.trim())
            .ok_or_else(|| PreferenceError::UnknownValue(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferenceError::UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Unknown preference value: {0}")]
    UnknownValue(String),
    #[error("Preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Preference serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key-value store.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store. A missing file is an empty store; a corrupt one is
    /// discarded with a warning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| PreferenceError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable preferences");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "Opened preference store");
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub view: View,
    pub theme: Theme,
    pub language: Locale,
}

impl Preferences {
    pub const VIEW_KEY: &'static str = "currentView";
    pub const THEME_KEY: &'static str = "theme";
    pub const LANGUAGE_KEY: &'static str = "language";

    /// Restores saved preferences; absent or unrecognised values fall back to
    /// `defaults`.
    pub fn load(store: &dyn PreferenceStore, defaults: &UiConfig) -> Self {
        Self {
            view: read(store, Self::VIEW_KEY).unwrap_or_default(),
            theme: read(store, Self::THEME_KEY).unwrap_or(defaults.theme),
            language: read(store, Self::LANGUAGE_KEY).unwrap_or(defaults.language),
        }
    }
}

fn read<T: FromStr>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring invalid stored preference");
            None
        }
    }
}
