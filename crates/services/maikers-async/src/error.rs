use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Code for requests that were sent but got no response
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Code for requests that could not be built or sent
pub const REQUEST_SETUP_ERROR: &str = "REQUEST_SETUP_ERROR";
/// Message attached to every [`NETWORK_ERROR`]
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server";

/// Longest response body excerpt kept in error details
const BODY_SNIPPET_LIMIT: usize = 400;

/// Normalized error returned by every failed platform call
///
/// Exactly one of three origins produces it:
/// - the server answered with a non-2xx status (`code` from the body, or `HTTP_<status>`)
/// - no response arrived ([`NETWORK_ERROR`])
/// - the request could not be built ([`REQUEST_SETUP_ERROR`])
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Stable machine-checkable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Extra context supplied by the server or the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Builds the error for a non-2xx response
    ///
    /// Uses the body's `code`, `message` and `details` fields when present.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body).ok();
        let field = |name: &str| parsed.as_ref().and_then(|v| v.get(name));

        let code = field("code")
            .and_then(non_empty_text)
            .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
        let message = field("message")
            .and_then(non_empty_text)
            .unwrap_or_else(|| generic_status_message(status));
        let details = field("details").filter(|v| !v.is_null()).cloned();

        Self {
            code,
            message,
            details,
        }
    }

    /// Builds a [`NETWORK_ERROR`] carrying the request that went unanswered
    #[must_use]
    pub fn network(method: &Method, url: &str, cause: &reqwest::Error) -> Self {
        Self {
            code: NETWORK_ERROR.to_string(),
            message: NO_RESPONSE_MESSAGE.to_string(),
            details: Some(json!({
                "request": { "method": method.as_str(), "url": url },
                "cause": cause.to_string(),
            })),
        }
    }

    /// Builds a [`REQUEST_SETUP_ERROR`] with the underlying message
    #[must_use]
    pub fn request_setup(message: impl Into<String>) -> Self {
        Self {
            code: REQUEST_SETUP_ERROR.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds the error for a 2xx response whose body did not decode
    ///
    /// The server did respond, so this is reported under `HTTP_<status>`.
    #[must_use]
    pub fn undecodable(status: StatusCode, err: &serde_json::Error, body: &[u8]) -> Self {
        Self {
            code: format!("HTTP_{}", status.as_u16()),
            message: format!("Failed to decode response body: {err}"),
            details: Some(json!({ "body": body_snippet(body) })),
        }
    }

    /// Maps a transport error, classifying it as setup or network failure
    #[must_use]
    pub fn from_transport(method: &Method, url: &str, err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::request_setup(err.to_string())
        } else {
            Self::network(method, url, err)
        }
    }

    /// True when no response was received
    #[must_use]
    pub fn is_network(&self) -> bool {
        self.code == NETWORK_ERROR
    }

    /// True when the request never left the client
    #[must_use]
    pub fn is_request_setup(&self) -> bool {
        self.code == REQUEST_SETUP_ERROR
    }
}

fn non_empty_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn generic_status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

fn body_snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(BODY_SNIPPET_LIMIT)]).into_owned()
}
