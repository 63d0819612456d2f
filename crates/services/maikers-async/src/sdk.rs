use maikers_config::{ConfigResolver, Env, SetOutcome};
use std::path::Path;

use crate::{
    client::Client,
    config::PlatformConfig,
    resources::{Agents, Keys},
};

/// Environment variable read at construction for the API key
pub const ENV_API_KEY: &str = "MAIKERS_API_KEY";
/// Environment variable read at construction for the base URL
pub const ENV_BASE_URL: &str = "MAIKERS_BASE_URL";

/// Explicit construction options; set fields win over the resolver
#[derive(Debug, Clone, Default)]
pub struct SdkOptions {
    /// API key to authenticate with
    pub api_key: Option<String>,
    /// Base URL of the platform API
    pub base_url: Option<String>,
}

impl SdkOptions {
    /// Options taken from `MAIKERS_API_KEY` and `MAIKERS_BASE_URL`
    #[must_use]
    pub fn from_env(env: &Env) -> Self {
        Self {
            api_key: env.get(ENV_API_KEY).map(str::to_string),
            base_url: env.get(ENV_BASE_URL).map(str::to_string),
        }
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

/// Entry point to the platform: configuration, HTTP client and resources
///
/// Authentication is local only: [`Maikers::auth`] stores the key and uses it
/// for later requests without asking the server whether it is valid.
#[derive(Debug)]
pub struct Maikers {
    client: Client<PlatformConfig>,
    resolver: ConfigResolver,
}

impl Maikers {
    /// Builds the SDK from a resolver and explicit options
    #[must_use]
    pub fn new(resolver: ConfigResolver, options: SdkOptions) -> Self {
        let api_key = options.api_key.or_else(|| resolver.api_key());
        let base_url = options.base_url.unwrap_or_else(|| resolver.base_url());

        let mut config = PlatformConfig::new(base_url);
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        tracing::debug!(api_base = config.api_base(), "platform client configured");

        Self {
            client: Client::with_config(config),
            resolver,
        }
    }

    /// The underlying HTTP client
    #[must_use]
    pub const fn client(&self) -> &Client<PlatformConfig> {
        &self.client
    }

    /// The configuration resolver
    #[must_use]
    pub const fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// Mutable access to the configuration resolver
    pub fn resolver_mut(&mut self) -> &mut ConfigResolver {
        &mut self.resolver
    }

    /// Keys API resource
    #[must_use]
    pub const fn keys(&self) -> Keys<'_, PlatformConfig> {
        self.client.keys()
    }

    /// Agents API resource
    #[must_use]
    pub const fn agents(&self) -> Agents<'_, PlatformConfig> {
        self.client.agents()
    }

    /// Accepts `api_key` for this client and persists it with a fresh auth timestamp
    ///
    /// No request is made to validate the key.
    pub fn auth(&mut self, api_key: &str) -> SetOutcome {
        self.client.set_api_key(api_key);
        self.resolver.set_api_key(api_key)
    }

    /// Clears the stored API key and stops sending it
    pub fn logout(&mut self) -> SetOutcome {
        self.auth("")
    }

    /// Whether requests carry an API key, or one resolves from env or the config file
    ///
    /// An explicit [`SdkOptions::api_key`] counts even when nothing is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.config().has_api_key() || self.resolver.is_authenticated()
    }

    /// Epoch milliseconds of the last [`Maikers::auth`], or 0
    #[must_use]
    pub fn auth_timestamp(&self) -> i64 {
        self.resolver.auth_timestamp()
    }

    /// Where the API key is persisted
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.resolver.path()
    }
}
