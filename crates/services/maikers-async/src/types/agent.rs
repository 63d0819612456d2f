//! Types for the `/agents` endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Patch;

/// An AI agent as returned by the platform
///
/// Fields the SDK does not model are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Behavioural instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Model backing the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A job run by an agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Job status as reported by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /agents`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentParams {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Behavioural instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Model backing the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Request body for `PUT /agents/{id}`
///
/// Only fields that are not [`Patch::Unset`] are sent; the platform treats a
/// present key as "update this field".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentSettingsParams {
    /// Display name
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    /// Behavioural instructions
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub instructions: Patch<String>,
    /// Model backing the agent
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub model: Patch<String>,
}

impl UpdateAgentSettingsParams {
    /// True when no field would be sent
    pub const fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.description.is_unset()
            && self.instructions.is_unset()
            && self.model.is_unset()
    }
}

/// Request body for `POST /agents/terminal`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentQueryParams {
    /// Agents that should receive the message
    pub recipients: Vec<String>,
    /// The message text
    pub message: String,
    /// Request a streamed response (forwarded as-is; responses are always read whole)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl AgentQueryParams {
    /// Query a single agent
    #[must_use]
    pub fn new(agent_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipients: vec![agent_id.into()],
            message: message.into(),
            stream: None,
        }
    }

    /// Set the `stream` flag
    #[must_use]
    pub const fn with_stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }
}

/// Response from `POST /agents/terminal`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentQueryResponse {
    /// The agent's reply, when the platform returns one as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
