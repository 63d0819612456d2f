use maikers_config::{ConfigResolver, DEFAULT_BASE_URL};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ApiError;

/// Header name for API key authentication
pub const HDR_X_API_KEY: &str = "x-api-key";

/// Connection settings for the platform client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct PlatformConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PlatformConfig {
    /// Creates a configuration for the given base URL with no API key
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: None,
        }
    }

    /// Creates a configuration from the resolver's effective `baseUrl` and `apiKey`
    #[must_use]
    pub fn from_resolver(resolver: &ConfigResolver) -> Self {
        let config = Self::new(resolver.base_url());
        match resolver.api_key() {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Whether a non-blank API key will be sent
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }
}

/// Configuration trait for the platform client
///
/// Implement this trait to provide custom authentication and URL layout.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in every request
    ///
    /// # Errors
    ///
    /// Returns a `REQUEST_SETUP_ERROR` if a header value contains invalid characters.
    fn headers(&self) -> Result<HeaderMap, ApiError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Replaces the API key used by later requests
    fn set_api_key(&mut self, key: &str);
}

impl Config for PlatformConfig {
    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                h.insert(
                    HDR_X_API_KEY,
                    HeaderValue::from_str(key)
                        .map_err(|_| ApiError::request_setup("Invalid X-API-Key header value"))?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn set_api_key(&mut self, key: &str) {
        self.api_key = Some(SecretString::from(key.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maikers_config::{ConfigStore, Env};

    #[test]
    fn headers_always_carry_json_content_type() {
        let h = PlatformConfig::new("http://x").headers().unwrap();
        assert_eq!(h.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(h.get(HDR_X_API_KEY).is_none());
    }

    #[test]
    fn api_key_header_is_trimmed() {
        let cfg = PlatformConfig::new("http://x").with_api_key("  my-key \n");
        let h = cfg.headers().unwrap();
        assert_eq!(h.get(HDR_X_API_KEY).unwrap().to_str().unwrap(), "my-key");
    }

    #[test]
    fn blank_api_key_is_not_sent() {
        let cfg = PlatformConfig::new("http://x").with_api_key("   ");
        assert!(!cfg.has_api_key());
        assert!(cfg.headers().unwrap().get(HDR_X_API_KEY).is_none());
    }

    #[test]
    fn invalid_api_key_is_a_setup_error() {
        let cfg = PlatformConfig::new("http://x").with_api_key("bad\u{7f}key");
        let err = cfg.headers().unwrap_err();
        assert_eq!(err.code, crate::error::REQUEST_SETUP_ERROR);
    }

    #[test]
    fn set_api_key_replaces_header() {
        let mut cfg = PlatformConfig::new("http://x").with_api_key("old");
        cfg.set_api_key("new");
        let h = cfg.headers().unwrap();
        assert_eq!(h.get(HDR_X_API_KEY).unwrap().to_str().unwrap(), "new");
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let cfg = PlatformConfig::new("http://x/api/");
        assert_eq!(cfg.url("/agents/terminal"), "http://x/api/agents/terminal");
        assert_eq!(cfg.url("key"), "http://x/api/key");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = PlatformConfig::new("http://x").with_api_key("super-secret-key-12345");
        let debug_str = format!("{cfg:?}");
        assert!(!debug_str.contains("super-secret-key-12345"));
        assert!(debug_str.contains("[REDACTED]"), "got: {debug_str}");
    }

    #[test]
    fn from_resolver_uses_effective_values() {
        let temp = tempfile::TempDir::new().unwrap();
        let resolver = ConfigResolver::new(
            ConfigStore::at(temp.path().join("config.json")),
            Env::from_pairs([("MAIKERS_APIKEY", "env-key"), ("MAIKERS_BASEURL", "http://env")]),
        );

        let cfg = PlatformConfig::from_resolver(&resolver);
        assert_eq!(cfg.api_base(), "http://env");
        assert_eq!(
            cfg.headers().unwrap().get(HDR_X_API_KEY).unwrap(),
            "env-key"
        );
    }
}
