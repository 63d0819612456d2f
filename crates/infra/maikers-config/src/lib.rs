//! Layered configuration for the Maikers SDK.
//!
//! This crate provides:
//! - [`ConfigStore`]: the persisted JSON file at `~/.maikers.sdk/config.json`
//! - [`Env`]: a snapshot of the process environment, taken once per process
//! - [`ConfigResolver`]: effective values with env > file > default precedence
//!
//! # Configuration Precedence (lowest to highest)
//! 1. Default values (`baseUrl` only)
//! 2. Persisted config file
//! 3. Environment variables (`MAIKERS_<KEY>`, key uppercased)
//!
//! # Example
//! ```no_run
//! use maikers_config::{ConfigResolver, ConfigStore, Env};
//!
//! let store = ConfigStore::at(ConfigStore::default_location().unwrap());
//! let resolver = ConfigResolver::new(store, Env::from_process());
//! println!("Base URL: {}", resolver.base_url());
//! ```
//!
//! # Environment Variables
//! - `MAIKERS_APIKEY`: Override the stored API key
//! - `MAIKERS_BASEURL`: Override the stored base URL
//! - `MAIKERS_AUTHTIMESTAMP`: Override the stored auth timestamp

pub mod env;
pub mod error;
pub mod resolver;
pub mod store;
#[doc(hidden)]
pub mod test_support;
pub mod writer;

pub use env::Env;
pub use error::ConfigError;
pub use resolver::{ConfigResolver, SetOutcome};
pub use store::ConfigStore;

/// Default platform API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.maikers.com";

/// Prefix for all environment variables read by the SDK.
pub const ENV_PREFIX: &str = "MAIKERS_";

/// Config key holding the API key.
pub const KEY_API_KEY: &str = "apiKey";
/// Config key holding the API base URL.
pub const KEY_BASE_URL: &str = "baseUrl";
/// Config key holding the epoch-millisecond time of the last `set_api_key`.
pub const KEY_AUTH_TIMESTAMP: &str = "authTimestamp";
