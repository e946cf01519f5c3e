//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::say::run_say;
use crate::cli::settings::{apply_set, apply_unset, ConfigKey};
use crate::core::chat_client::HttpChatClient;
use crate::core::config::data::Config;
use crate::core::constants::API_BASE_URL_ENV;
use crate::ui::chat_loop::run_chat;
use crate::utils::diagnostics::init_tracing;

#[derive(Parser)]
#[command(name = "confidant")]
#[command(version)]
#[command(about = "A terminal front-end for an emotional support chat assistant")]
#[command(
    long_about = "Confidant is a full-screen terminal chat interface for an emotional support \
assistant. Every message you send is forwarded, together with the conversation so far, \
to a chat backend at {base-url}/api/chat.\n\n\
Environment Variables:\n\
  CONFIDANT_API_BASE_URL   Base URL of the chat backend (default http://localhost:4000)\n\
  RUST_LOG                 Filter for --debug-log output (default info)\n\n\
Controls:\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a new line\n\
  Ctrl+N            Start a new conversation\n\
  PageUp/PageDown   Scroll through the conversation\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat backend (overrides environment and config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write diagnostic logs to the specified file
    #[arg(long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send one message and print the reply without starting the interface
    Say {
        /// Message to send
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set configuration values (prints the configuration when no key is given)
    Set {
        /// Configuration key to set (base-url, theme)
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset (base-url, theme)
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.debug_log.as_deref())?;

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = load_config_or_exit();
            let client = build_client(&config, args.base_url.as_deref());
            run_chat(client, config.resolve_theme()).await
        }
        Commands::Say { prompt } => {
            let config = load_config_or_exit();
            let client = build_client(&config, args.base_url.as_deref());
            run_say(prompt, &client).await
        }
        Commands::Set { key, value } => {
            let mut config = load_config_or_exit();
            let Some(key) = key else {
                config.print_all();
                return Ok(());
            };
            let key = parse_key_or_exit(&key);
            let value = value.unwrap_or_default().join(" ");
            match apply_set(&mut config, key, &value) {
                Ok(message) => {
                    config.save()?;
                    println!("{message}");
                    Ok(())
                }
                Err(err) => {
                    err.print();
                    std::process::exit(1);
                }
            }
        }
        Commands::Unset { key } => {
            let mut config = load_config_or_exit();
            let key = parse_key_or_exit(&key);
            let message = apply_unset(&mut config, key);
            config.save()?;
            println!("{message}");
            Ok(())
        }
    }
}

fn load_config_or_exit() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    }
}

fn parse_key_or_exit(key: &str) -> ConfigKey {
    match ConfigKey::parse(key) {
        Ok(key) => key,
        Err(err) => {
            err.print();
            std::process::exit(1);
        }
    }
}

fn build_client(config: &Config, cli_base_url: Option<&str>) -> HttpChatClient {
    let env_base_url = std::env::var(API_BASE_URL_ENV).ok();
    let base_url = config.resolve_base_url(cli_base_url, env_base_url.as_deref());
    HttpChatClient::new(&base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_chat() {
        let args = Args::try_parse_from(["confidant"]).expect("parse");
        assert!(args.command.is_none());
        assert!(args.base_url.is_none());
    }

    #[test]
    fn say_collects_words_and_global_flags() {
        let args = Args::try_parse_from([
            "confidant",
            "--base-url",
            "http://127.0.0.1:9000",
            "say",
            "I",
            "feel",
            "anxious",
        ])
        .expect("parse");
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        match args.command {
            Some(Commands::Say { prompt }) => assert_eq!(prompt.join(" "), "I feel anxious"),
            _ => panic!("expected say command"),
        }
    }

    #[test]
    fn say_requires_a_prompt() {
        assert!(Args::try_parse_from(["confidant", "say"]).is_err());
    }

    #[test]
    fn set_without_value_parses() {
        let args = Args::try_parse_from(["confidant", "set"]).expect("parse");
        assert!(matches!(
            args.command,
            Some(Commands::Set {
                key: None,
                value: None
            })
        ));
    }

    #[test]
    fn build_client_prefers_cli_flag() {
        let config = Config {
            base_url: Some("http://from-config:1".to_string()),
            theme: None,
        };
        let client = build_client(&config, Some("http://from-cli:2/"));
        assert_eq!(client.base_url(), "http://from-cli:2");
    }
}
