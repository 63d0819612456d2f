//! Request and response types for the platform API

/// Agent endpoint types
pub mod agent;
/// Key endpoint types
pub mod key;
/// Partial-update field state
pub mod patch;

pub use agent::{
    Agent, AgentQueryParams, AgentQueryResponse, CreateAgentParams, Job,
    UpdateAgentSettingsParams,
};
pub use key::{KeyCreateParams, KeyCreateResponse};
pub use patch::Patch;
