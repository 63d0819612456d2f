//! Maikers platform CLI.
//!
//! The `maikers` command stores credentials locally and maps subcommands onto
//! the platform SDK, printing JSON results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maikers_async::{Maikers, SdkOptions};
use maikers_config::{ConfigResolver, ConfigStore, Env};

mod commands;

#[derive(Parser)]
#[command(name = "maikers")]
#[command(about = "Maikers platform CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with the Maikers API
    Auth {
        #[command(subcommand)]
        command: commands::auth::AuthCommands,
    },
    /// Manage AI agents
    Agents {
        #[command(subcommand)]
        command: commands::agents::AgentCommands,
    },
    /// Provision API keys
    Key {
        #[command(subcommand)]
        command: commands::key::KeyCommands,
    },
    /// Inspect or change local configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable JSON
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    // MAIKERS_* from ./.env, without overriding variables already set
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {e}"),
    }

    let env = Env::from_process();
    let path = ConfigStore::default_location().context("Failed to locate config file")?;
    let options = SdkOptions::from_env(&env);
    let mut sdk = Maikers::new(ConfigResolver::new(ConfigStore::at(path), env), options);

    match cli.command {
        Commands::Auth { command } => commands::auth::execute(&mut sdk, command),
        Commands::Agents { command } => commands::agents::execute(&sdk, command).await,
        Commands::Key { command } => commands::key::execute(&sdk, command).await,
        Commands::Config { command } => commands::config::execute(&mut sdk, command),
    }
}
