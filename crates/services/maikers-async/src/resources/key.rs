use crate::{
    client::{Client, RequestOptions},
    config::Config,
    error::ApiError,
    types::key::{KeyCreateParams, KeyCreateResponse},
};

/// API resource for the `/key` endpoint
pub struct Keys<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Keys<'c, C> {
    /// Creates a new Keys resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Provision a new API key
    pub async fn create(&self, params: &KeyCreateParams) -> Result<KeyCreateResponse, ApiError> {
        self.client
            .post("/key", Some(params), &RequestOptions::default())
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Keys API resource
    #[must_use]
    pub const fn keys(&self) -> Keys<'_, C> {
        Keys::new(self)
    }
}
