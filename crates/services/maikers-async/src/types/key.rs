//! Types for the `/key` endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for `POST /key`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyCreateParams {
    /// Label for the new key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl KeyCreateParams {
    /// Create a request with a label
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Response from `POST /key`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCreateResponse {
    /// The issued API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Key ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
