//! DYK Tools CLI
//!
//! Fetches Did You Know pages and prints parsed data or draft notices.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dyk_tools::{
    error::Result,
    models::{Config, HookSetKey},
    pipeline,
    services::{HookSetExtractor, UpdateTimesParser, WikiClient, roles},
};
use serde::Serialize;

/// dyk-tools - Did You Know review helpers
#[derive(Parser, Debug)]
#[command(
    name = "dyk-tools",
    version,
    about = "Parsers and notice drafts for the Did You Know review workflow"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "dyk-tools.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the update time of every queue and prep
    UpdateTimes {
        /// Parse a saved copy of the update-time page instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print the hooks and credited nominations of a queue or prep
    Hooks {
        /// e.g. "Template:Did you know/Queue/6"
        title: String,

        /// Parse saved wikitext instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Find the queue or prep a nomination was promoted to
    FindHookSet {
        /// e.g. "Template:Did you know nominations/Aliko Dangote"
        nomination: String,
    },

    /// Print the role of each user linked from a nomination page
    Roles {
        nomination: String,

        /// Parse a saved copy of the rendered page instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Draft a ping notice for a nomination
    Ping { nomination: String },

    /// Draft a review notice for a queue or prep
    Review { title: String },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct HookSetOutput<'a> {
    title: &'a str,
    key: Option<String>,
    hooks: &'a [dyk_tools::models::Hook],
    nominations: &'a std::collections::HashMap<String, String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct FoundHookSet {
    title: String,
    key: String,
}

impl FoundHookSet {
    fn new(title: String, key: HookSetKey) -> Self {
        Self {
            title,
            key: key.to_string(),
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    init_logging(cli.verbose, &config.logging.level);
    config.validate()?;

    log::debug!("Using wiki at {}", config.api.base_url);
    let client = WikiClient::new(&config.api)?;

    match cli.command {
        Command::UpdateTimes { file } => {
            let times = match file {
                Some(path) => {
                    let html = std::fs::read_to_string(&path)?;
                    UpdateTimesParser::from_config(&config.parser).parse(&html)
                }
                None => pipeline::fetch_update_times(&client, &config).await?,
            };
            print_json(&times)?;
        }

        Command::Hooks { title, file } => {
            let hook_set = match file {
                Some(path) => {
                    let wikitext = std::fs::read_to_string(&path)?;
                    HookSetExtractor::from_config(&config.parser)?.build(title, wikitext)?
                }
                None => pipeline::fetch_hook_set(&client, &config, &title).await?,
            };
            print_json(&HookSetOutput {
                title: &hook_set.title,
                key: hook_set.key().map(|k| k.to_string()),
                hooks: &hook_set.hooks,
                nominations: &hook_set.nomination_map,
            })?;
        }

        Command::FindHookSet { nomination } => {
            let found = pipeline::find_hook_set(&client, &nomination)
                .await?
                .map(|(title, key)| FoundHookSet::new(title, key));
            if found.is_none() {
                log::warn!("No queue or prep links to {nomination}");
            }
            print_json(&found)?;
        }

        Command::Roles { nomination, file } => {
            let user_roles = match file {
                Some(path) => roles::classify_document(&std::fs::read_to_string(&path)?),
                None => pipeline::fetch_roles(&client, &nomination).await?,
            };
            print_json(&user_roles)?;
        }

        Command::Ping { nomination } => {
            let draft = pipeline::run_ping(&client, &config, &nomination).await?;
            print!("{draft}");
        }

        Command::Review { title } => {
            let draft = pipeline::run_review(&client, &config, &title).await?;
            print!("{draft}");
        }

        Command::Validate => {
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_hook_set_json() {
        let found = Some(FoundHookSet::new(
            "Template:Did you know/Queue/6".to_string(),
            HookSetKey::queue(6),
        ));
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::json!({"title": "Template:Did you know/Queue/6", "key": "Queue 6"})
        );
        let none: Option<FoundHookSet> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }

    #[test]
    fn test_cli_parses_find_hook_set() {
        let cli = Cli::try_parse_from([
            "dyk-tools",
            "find-hook-set",
            "Template:Did you know nominations/Aliko Dangote",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::FindHookSet { .. }));
    }
}
