//! Partsfinder CLI
//!
//! LLM-refined DigiKey part search from the shell, plus the MCP server.

use anyhow::Result;
use clap::Parser;
use partsfinder_core::{Config, PartsFinder, PartsFinderError};

mod app;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<PartsFinderError>()
            .map(|err| err.exit_code())
            .unwrap_or(partsfinder_core::error::exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let finder = PartsFinder::new(config)?;

    match cli.command {
        Commands::Search { query } => {
            let response = finder.query(&query).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Mcp => partsfinder_mcp::start_server(&finder).await,
    }
}
