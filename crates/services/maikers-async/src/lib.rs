#![warn(missing_docs)]

//! Async Maikers platform client with typed requests/responses and a single
//! normalized error shape.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// SDK facade tying configuration, client and resources together
pub mod sdk;
/// Request and response types
pub mod types;

pub use crate::client::{Client, RequestOptions};
pub use crate::config::PlatformConfig;
pub use crate::error::ApiError;
pub use crate::sdk::{Maikers, SdkOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{ApiError, Client, Maikers, PlatformConfig, SdkOptions};
}
