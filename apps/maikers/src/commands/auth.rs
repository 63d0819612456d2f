//! `maikers auth` subcommands.

use anyhow::Result;
use chrono::{Local, TimeZone};
use clap::Subcommand;
use maikers_async::Maikers;

use super::report_unsaved;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Authenticate with an API key
    Login {
        /// API key to authenticate with
        api_key: String,
    },

    /// Check authentication status
    Status,

    /// Clear authentication
    Logout,
}

pub fn execute(sdk: &mut Maikers, cmd: AuthCommands) -> Result<()> {
    match cmd {
        AuthCommands::Login { api_key } => cmd_login(sdk, &api_key),
        AuthCommands::Status => cmd_status(sdk),
        AuthCommands::Logout => cmd_logout(sdk),
    }
}

fn cmd_login(sdk: &mut Maikers, api_key: &str) -> Result<()> {
    let outcome = sdk.auth(api_key);
    println!("Authentication successful");
    if outcome.is_persisted() {
        println!("API key stored in {}", sdk.config_path().display());
    } else {
        report_unsaved(&outcome);
    }
    Ok(())
}

fn cmd_status(sdk: &Maikers) -> Result<()> {
    if sdk.is_authenticated() {
        println!("Authenticated");
        println!(
            "Last authenticated: {}",
            format_timestamp(sdk.auth_timestamp())
        );
    } else {
        println!("Not authenticated");
    }
    Ok(())
}

fn cmd_logout(sdk: &mut Maikers) -> Result<()> {
    let outcome = sdk.logout();
    report_unsaved(&outcome);
    println!("Logged out successfully");
    Ok(())
}

/// Render epoch milliseconds in the local timezone.
fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "unknown".to_string(),
    }
}
