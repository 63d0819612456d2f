//! Effective configuration: environment over persisted file over defaults.

use crate::{
    DEFAULT_BASE_URL, KEY_API_KEY, KEY_AUTH_TIMESTAMP, KEY_BASE_URL, env::Env, store::ConfigStore,
};
use serde_json::{Map, Value};
use std::cell::OnceCell;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result of a config write.
///
/// Writes never fail from the caller's point of view: the in-memory value is
/// always updated. This tells the caller whether it also reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The full config object was written to disk.
    Persisted,
    /// The write failed; the value only lives in this resolver until exit.
    InMemoryOnly { reason: String },
}

impl SetOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    /// Combine two sequential writes; the first failure wins.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Persisted => other,
            failed @ Self::InMemoryOnly { .. } => failed,
        }
    }
}

/// Resolves config keys with env > file > default precedence.
///
/// Construct one per process and pass it to whatever needs configuration.
/// The file is loaded lazily on first access, which also creates it with
/// defaults when missing.
#[derive(Debug)]
pub struct ConfigResolver {
    store: ConfigStore,
    env: Env,
    config: OnceCell<Map<String, Value>>,
}

impl ConfigResolver {
    pub fn new(store: ConfigStore, env: Env) -> Self {
        Self {
            store,
            env,
            config: OnceCell::new(),
        }
    }

    /// Location of the persisted config file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// The environment snapshot this resolver consults.
    pub fn env(&self) -> &Env {
        &self.env
    }

    fn config(&self) -> &Map<String, Value> {
        self.config.get_or_init(|| self.store.load())
    }

    /// Resolve a key: non-empty `MAIKERS_<KEY>` override, else the persisted
    /// value, else `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(v) = self.env.config_override(key) {
            return Some(Value::String(v.to_string()));
        }
        self.config().get(key).cloned()
    }

    /// Set a key in memory and persist the whole object.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> SetOutcome {
        let mut config = self.config.take().unwrap_or_else(|| self.store.load());
        config.insert(key.to_string(), value.into());

        let outcome = match self.store.save(&config) {
            Ok(()) => SetOutcome::Persisted,
            Err(e) => {
                tracing::warn!("Error saving config: {e}");
                SetOutcome::InMemoryOnly {
                    reason: e.to_string(),
                }
            }
        };

        self.config = OnceCell::from(config);
        outcome
    }

    /// The effective API key; `None` when unset or empty.
    pub fn api_key(&self) -> Option<String> {
        match self.get(KEY_API_KEY) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Store the API key and stamp `authTimestamp` with the current time.
    ///
    /// These are two sequential writes, not one transaction.
    pub fn set_api_key(&mut self, api_key: &str) -> SetOutcome {
        let first = self.set(KEY_API_KEY, api_key);
        let second = self.set(KEY_AUTH_TIMESTAMP, now_millis());
        first.and(second)
    }

    /// Epoch milliseconds of the last `set_api_key`, or 0.
    pub fn auth_timestamp(&self) -> i64 {
        match self.get(KEY_AUTH_TIMESTAMP) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| {
                tracing::debug!("ignoring non-numeric authTimestamp override: {s:?}");
                0
            }),
            _ => 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key().is_some()
    }

    /// The effective base URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> String {
        match self.get(KEY_BASE_URL) {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: &str) -> SetOutcome {
        self.set(KEY_BASE_URL, base_url)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}
