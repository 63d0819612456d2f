//! Atomic file writing for the config file.
//!
//! The file is written to a temporary location and renamed into place, so a
//! reader never observes a partially written config.

use crate::error::ConfigError;
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Write a JSON value to `path` atomically with pretty formatting.
///
/// Missing parent directories are created.
pub fn write_pretty_json_atomic(path: &Path, value: &Value) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(json.as_bytes()))
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: match e {
                atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => err,
            },
        })
}
