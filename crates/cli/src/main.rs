//! Lendpool CLI - Index lending pool events and evaluate borrow rates.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_rate, run_replay, run_sync};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable with --format json
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync(args) => {
            run_sync(&args, cli.format).await?;
        }
        Commands::Replay(args) => {
            run_replay(&args, cli.format)?;
        }
        Commands::Rate(args) => {
            run_rate(&args, cli.format)?;
        }
    }

    Ok(())
}
