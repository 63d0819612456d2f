use crate::{
    client::{Client, RequestOptions},
    config::Config,
    error::ApiError,
    types::agent::{
        Agent, AgentQueryParams, AgentQueryResponse, CreateAgentParams, Job,
        UpdateAgentSettingsParams,
    },
};

/// Shared endpoint for agent queries; recipients travel in the body
pub const TERMINAL_PATH: &str = "/agents/terminal";

/// API resource for the `/agents` endpoints
pub struct Agents<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Agents<'c, C> {
    /// Creates a new Agents resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// List the jobs of an agent (`GET /agents/{id}/jobs`)
    pub async fn get_jobs(&self, agent_id: &str) -> Result<Vec<Job>, ApiError> {
        self.client
            .get(&format!("/agents/{agent_id}/jobs"), &RequestOptions::default())
            .await
    }

    /// Update an agent's settings (`PUT /agents/{id}`)
    pub async fn update_settings(
        &self,
        agent_id: &str,
        params: &UpdateAgentSettingsParams,
    ) -> Result<Agent, ApiError> {
        self.client
            .put(
                &format!("/agents/{agent_id}"),
                Some(params),
                &RequestOptions::default(),
            )
            .await
    }

    /// Create an agent (`POST /agents`)
    pub async fn create(&self, params: &CreateAgentParams) -> Result<Agent, ApiError> {
        self.client
            .post("/agents", Some(params), &RequestOptions::default())
            .await
    }

    /// Send a message to agents and read the reply
    ///
    /// Always targets [`TERMINAL_PATH`], whichever agents are listed in
    /// `params.recipients`.
    pub async fn query(&self, params: &AgentQueryParams) -> Result<AgentQueryResponse, ApiError> {
        self.client
            .post(TERMINAL_PATH, Some(params), &RequestOptions::default())
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Agents API resource
    #[must_use]
    pub const fn agents(&self) -> Agents<'_, C> {
        Agents::new(self)
    }
}
