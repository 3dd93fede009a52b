//! anonbar: send the welcome menu or answer a button callback. Config from env (.env supported) and CLI args.

use anonbar_cli::{build_dispatcher, execute, load_config, Cli};
use anonbar_core::init_tracing;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(config.log_file.as_deref())?;
    info!(config = ?config, "anonbar started");

    let dispatcher = build_dispatcher(&config)?;
    if let Some(resp) = execute(&dispatcher, &cli.command).await? {
        let pretty = serde_json::to_string_pretty(&resp).context("Serialize response")?;
        println!("{}", pretty);
    }
    Ok(())
}
