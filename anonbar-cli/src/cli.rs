//! CLI parser, config loading and command execution.

use std::sync::Arc;

use anonbar_core::{ApiResponse, Dispatcher};
use anonbar_telegram::{TelegramBotApi, TelegramConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "anonbar")]
#[command(about = "Menu bot: sends the welcome menu and canned replies via the Telegram Bot API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token; overrides BOT_TOKEN.
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Target chat id; overrides CHAT_ID.
    #[arg(short, long, global = true)]
    pub chat_id: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Send the welcome message with the menu keyboard.
    Start,
    /// Handle a button callback (start, contact_admin, join_channel).
    Callback {
        /// Callback data of the pressed button.
        data: String,
    },
}

/// Load TelegramConfig from environment; CLI options take precedence.
pub fn load_config(cli: &Cli) -> Result<TelegramConfig> {
    TelegramConfig::load(cli.token.clone(), cli.chat_id.clone())
}

/// Builds the dispatcher over the HTTP transport.
pub fn build_dispatcher(config: &TelegramConfig) -> Result<Dispatcher> {
    let api = TelegramBotApi::new(config).context("Build Telegram Bot API client")?;
    Ok(Dispatcher::new(Arc::new(api), config.chat_id.clone()))
}

/// Runs one command. Returns the decoded response, or `None` for an unrecognized callback.
pub async fn execute(dispatcher: &Dispatcher, command: &Commands) -> Result<Option<ApiResponse>> {
    match command {
        Commands::Start => {
            let resp = dispatcher
                .send_start_message()
                .await
                .context("Send start message")?;
            Ok(Some(resp))
        }
        Commands::Callback { data } => {
            let resp = dispatcher
                .dispatch(data)
                .await
                .with_context(|| format!("Handle callback {:?}", data))?;
            match &resp {
                Some(_) => info!(callback_data = %data, "Callback handled"),
                None => warn!(callback_data = %data, "Callback not recognized; nothing sent"),
            }
            Ok(resp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        let cli = Cli::try_parse_from(["anonbar", "start"]).unwrap();
        assert_eq!(cli.command, Commands::Start);
        assert!(cli.token.is_none());
        assert!(cli.chat_id.is_none());
    }

    #[test]
    fn test_parse_callback_with_overrides() {
        let cli = Cli::try_parse_from([
            "anonbar",
            "callback",
            "contact_admin",
            "--token",
            "123:abc",
            "--chat-id",
            "-1001",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Callback {
                data: "contact_admin".to_string()
            }
        );
        assert_eq!(cli.token.as_deref(), Some("123:abc"));
        assert_eq!(cli.chat_id.as_deref(), Some("-1001"));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["anonbar"]).is_err());
        assert!(Cli::try_parse_from(["anonbar", "callback"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
