use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ApiError};

/// Per-request overrides layered on top of the client's defaults
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a header for this request only
    ///
    /// Names and values are validated when the request is built; an invalid
    /// one fails the call with `REQUEST_SETUP_ERROR`.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Platform API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and URL layout. Every failure is returned as an
/// [`ApiError`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Changes the API key sent by every later request on this client
    pub fn set_api_key(&mut self, key: &str) {
        self.config.set_api_key(key);
    }

    /// Sends a `GET` request
    pub async fn get<O>(&self, path: &str, opts: &RequestOptions) -> Result<O, ApiError>
    where
        O: DeserializeOwned,
    {
        self.send::<(), O>(Method::GET, path, None, opts).await
    }

    /// Sends a `POST` request; pass `None::<&()>` for an empty body
    pub async fn post<I, O>(
        &self,
        path: &str,
        body: Option<&I>,
        opts: &RequestOptions,
    ) -> Result<O, ApiError>
    where
        I: Serialize + ?Sized + Sync,
        O: DeserializeOwned,
    {
        self.send(Method::POST, path, body, opts).await
    }

    /// Sends a `PUT` request
    pub async fn put<I, O>(
        &self,
        path: &str,
        body: Option<&I>,
        opts: &RequestOptions,
    ) -> Result<O, ApiError>
    where
        I: Serialize + ?Sized + Sync,
        O: DeserializeOwned,
    {
        self.send(Method::PUT, path, body, opts).await
    }

    /// Sends a `PATCH` request
    pub async fn patch<I, O>(
        &self,
        path: &str,
        body: Option<&I>,
        opts: &RequestOptions,
    ) -> Result<O, ApiError>
    where
        I: Serialize + ?Sized + Sync,
        O: DeserializeOwned,
    {
        self.send(Method::PATCH, path, body, opts).await
    }

    /// Sends a `DELETE` request
    pub async fn delete<O>(&self, path: &str, opts: &RequestOptions) -> Result<O, ApiError>
    where
        O: DeserializeOwned,
    {
        self.send::<(), O>(Method::DELETE, path, None, opts).await
    }

    fn build_request<I>(
        &self,
        method: Method,
        path: &str,
        body: Option<&I>,
        opts: &RequestOptions,
    ) -> Result<reqwest::Request, ApiError>
    where
        I: Serialize + ?Sized,
    {
        let mut headers = self.config.headers()?;
        for (name, value) in &opts.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::request_setup(format!("Invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::request_setup(format!("Invalid value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = self
            .http
            .request(method, self.config.url(path))
            .headers(headers);
        if !opts.query.is_empty() {
            builder = builder.query(&opts.query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|e| ApiError::request_setup(e.to_string()))
    }

    async fn send<I, O>(
        &self,
        method: Method,
        path: &str,
        body: Option<&I>,
        opts: &RequestOptions,
    ) -> Result<O, ApiError>
    where
        I: Serialize + ?Sized + Sync,
        O: DeserializeOwned,
    {
        let request = self.build_request(method.clone(), path, body, opts)?;
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "sending platform request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::from_transport(&method, &url, &e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(&method, &url, &e))?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &bytes);
            tracing::debug!(%status, code = %err.code, "platform request rejected");
            return Err(err);
        }

        let payload: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(payload).map_err(|e| ApiError::undecodable(status, &e, &bytes))
    }
}
