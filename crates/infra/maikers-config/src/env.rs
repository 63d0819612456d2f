//! Process environment snapshot.
//!
//! Business logic never calls `std::env::var` directly; it asks an [`Env`]
//! that was captured once at startup and handed down.

use crate::ENV_PREFIX;
use std::collections::BTreeMap;

/// Immutable snapshot of the `MAIKERS_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    /// Capture every `MAIKERS_*` variable from the current process.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// An empty snapshot; nothing is overridden.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the variable's value if it is set and non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the override for a config key: `MAIKERS_` + the key uppercased.
    ///
    /// `apiKey` maps to `MAIKERS_APIKEY`, `baseUrl` to `MAIKERS_BASEURL`.
    pub fn config_override(&self, key: &str) -> Option<&str> {
        self.get(&override_var_name(key))
    }
}

/// Environment variable name that overrides the given config key.
pub fn override_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.to_uppercase())
}
