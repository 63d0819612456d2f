use std::path::PathBuf;
use thiserror::Error;

/// Errors from locating, reading or writing the config file.
///
/// The resolver never returns these to its callers; they are logged and
/// surfaced as [`crate::SetOutcome::InMemoryOnly`] instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory could be determined for the default location.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Filesystem error on the config file or its directory.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON object.
    #[error("Invalid config file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}
