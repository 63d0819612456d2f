//! Subcommand handlers.
//!
//! Platform errors are reported here and nowhere else; handlers then return
//! `Ok(())` so the process exits normally.

pub mod agents;
pub mod auth;
pub mod config;
pub mod key;

use anyhow::Result;
use colored::Colorize;
use maikers_async::ApiError;
use maikers_config::SetOutcome;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn report_api_error(err: &ApiError) {
    tracing::debug!(details = ?err.details, "platform call failed");
    eprintln!("{} {}: {}", "Error:".red(), err.code, err.message);
}

/// Print a successful result as JSON, or report the error.
pub fn render<T: Serialize>(result: Result<T, ApiError>) -> Result<()> {
    match result {
        Ok(value) => print_json(&value),
        Err(err) => {
            report_api_error(&err);
            Ok(())
        }
    }
}

/// Warn when a config write only reached memory.
pub fn report_unsaved(outcome: &SetOutcome) {
    if let SetOutcome::InMemoryOnly { reason } = outcome {
        eprintln!(
            "{} Configuration not saved ({reason}); change applies to this run only",
            "WARN".yellow()
        );
    }
}
