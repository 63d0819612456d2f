//! `maikers key` subcommands.

use anyhow::Result;
use clap::Subcommand;
use maikers_async::Maikers;
use maikers_async::types::KeyCreateParams;

use super::render;

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Provision a new API key
    Create {
        /// Label for the new key
        #[arg(long)]
        name: Option<String>,
    },
}

pub async fn execute(sdk: &Maikers, cmd: KeyCommands) -> Result<()> {
    match cmd {
        KeyCommands::Create { name } => {
            let params = KeyCreateParams { name };
            render(sdk.keys().create(&params).await)
        }
    }
}
