//! Persisted config file.
//!
//! The file is a single JSON object. It is created with [`defaults`] on first
//! load, and every save rewrites the whole object. There is no locking:
//! concurrent processes race and the last writer wins.

use crate::error::ConfigError;
use crate::{DEFAULT_BASE_URL, KEY_API_KEY, KEY_AUTH_TIMESTAMP, KEY_BASE_URL};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};

/// Directory under `$HOME` holding the config file.
pub const CONFIG_DIR: &str = ".maikers.sdk";

/// Config file name.
pub const CONFIG_FILE: &str = "config.json";

/// The object written when no config file exists yet.
pub fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(KEY_API_KEY.into(), json!(""));
    map.insert(KEY_BASE_URL.into(), json!(DEFAULT_BASE_URL));
    map.insert(KEY_AUTH_TIMESTAMP.into(), json!(0));
    map
}

/// Handle to the config file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.maikers.sdk/config.json`.
    pub fn default_location() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file. `Ok(None)` when it does not exist.
    pub fn read(&self) -> Result<Option<Map<String, Value>>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(other) => Err(ConfigError::Parse {
                path: self.path.clone(),
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(ConfigError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Persist the whole object, replacing the file.
    pub fn save(&self, config: &Map<String, Value>) -> Result<(), ConfigError> {
        crate::writer::write_pretty_json_atomic(&self.path, &Value::Object(config.clone()))
    }

    /// Load the config, never failing.
    ///
    /// A missing or malformed file is replaced by [`defaults`] (written back
    /// to disk when possible). A file that exists but cannot be read is left
    /// alone and the defaults are used in memory only. Failures are logged.
    pub fn load(&self) -> Map<String, Value> {
        match self.read() {
            Ok(Some(map)) => return map,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "config file missing; creating defaults");
            }
            Err(e @ ConfigError::Parse { .. }) => {
                tracing::error!("Error loading config: {e}");
            }
            Err(e) => {
                tracing::error!("Error loading config: {e}; leaving file untouched");
                return defaults();
            }
        }

        let config = defaults();
        if let Err(e) = self.save(&config) {
            tracing::warn!("Error saving config: {e}");
        }
        config
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
