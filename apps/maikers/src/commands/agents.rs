//! `maikers agents` subcommands.

use anyhow::Result;
use clap::{Args, Subcommand};
use maikers_async::Maikers;
use maikers_async::types::{AgentQueryParams, CreateAgentParams, UpdateAgentSettingsParams};

use super::render;

/// Agent settings flags shared by `create` and `update`.
///
/// Omitted flags stay out of the request body entirely.
#[derive(Args, Debug, Default, Clone)]
pub struct AgentFields {
    /// Agent display name
    #[arg(long)]
    pub name: Option<String>,

    /// Agent description
    #[arg(long)]
    pub description: Option<String>,

    /// Behavioural instructions for the agent
    #[arg(long)]
    pub instructions: Option<String>,

    /// Model backing the agent
    #[arg(long)]
    pub model: Option<String>,
}

impl AgentFields {
    pub fn into_update(self) -> UpdateAgentSettingsParams {
        UpdateAgentSettingsParams {
            name: self.name.into(),
            description: self.description.into(),
            instructions: self.instructions.into(),
            model: self.model.into(),
        }
    }

    pub fn into_create(self) -> CreateAgentParams {
        CreateAgentParams {
            name: self.name,
            description: self.description,
            instructions: self.instructions,
            model: self.model,
        }
    }
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List the jobs of an agent
    GetJobs {
        /// Agent ID
        agent_id: String,
    },

    /// Update agent settings
    Update {
        /// Agent ID
        agent_id: String,

        #[command(flatten)]
        fields: AgentFields,
    },

    /// Create a new agent
    Create {
        #[command(flatten)]
        fields: AgentFields,
    },

    /// Send a message to an agent
    Query {
        /// Agent ID
        agent_id: String,

        /// Message to send
        #[arg(short, long)]
        message: String,

        /// Ask the platform for a streamed reply (the reply is still printed whole)
        #[arg(long)]
        stream: bool,
    },
}

pub async fn execute(sdk: &Maikers, cmd: AgentCommands) -> Result<()> {
    match cmd {
        AgentCommands::GetJobs { agent_id } => render(sdk.agents().get_jobs(&agent_id).await),
        AgentCommands::Update { agent_id, fields } => {
            let params = fields.into_update();
            if params.is_empty() {
                tracing::warn!("no settings given; sending an empty update");
            }
            render(sdk.agents().update_settings(&agent_id, &params).await)
        }
        AgentCommands::Create { fields } => render(sdk.agents().create(&fields.into_create()).await),
        AgentCommands::Query {
            agent_id,
            message,
            stream,
        } => {
            let params = query_params(agent_id, message, stream);
            render(sdk.agents().query(&params).await)
        }
    }
}

fn query_params(agent_id: String, message: String, stream: bool) -> AgentQueryParams {
    let params = AgentQueryParams::new(agent_id, message);
    if stream {
        tracing::info!("streamed replies are not supported; waiting for the full response");
        params.with_stream(true)
    } else {
        params
    }
}
