//! `maikers config` subcommands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use maikers_async::Maikers;
use maikers_config::ConfigResolver;
use serde_json::{Value, json};

use super::{print_json, report_unsaved};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (API key redacted)
    Show,

    /// Persist a new API base URL
    SetBaseUrl {
        /// Base URL, e.g. https://api.maikers.com
        url: String,
    },
}

pub fn execute(sdk: &mut Maikers, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => print_json(&effective_view(sdk.resolver())),
        ConfigCommands::SetBaseUrl { url } => {
            let outcome = sdk.resolver_mut().set_base_url(&url);
            if outcome.is_persisted() {
                println!("{} Base URL set to {}", "OK".green(), url.cyan());
            } else {
                report_unsaved(&outcome);
            }
            Ok(())
        }
    }
}

fn effective_view(resolver: &ConfigResolver) -> Value {
    json!({
        "path": resolver.path().display().to_string(),
        "apiKey": resolver.api_key().map(|_| "<redacted>"),
        "baseUrl": resolver.base_url(),
        "authTimestamp": resolver.auth_timestamp(),
        "authenticated": resolver.is_authenticated(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maikers_config::{ConfigStore, Env};

    #[test]
    fn view_never_contains_the_key() {
        let temp = tempfile::TempDir::new().unwrap();
        let resolver = ConfigResolver::new(
            ConfigStore::at(temp.path().join("config.json")),
            Env::from_pairs([("MAIKERS_APIKEY", "mk_secret")]),
        );

        let view = effective_view(&resolver);
        assert_eq!(view["apiKey"], "<redacted>");
        assert_eq!(view["authenticated"], true);
        assert!(!view.to_string().contains("mk_secret"));
    }
}
