//! API resource implementations for the platform client

/// Agents API resource
pub mod agent;
/// Keys API resource
pub mod key;

pub use agent::Agents;
pub use key::Keys;
