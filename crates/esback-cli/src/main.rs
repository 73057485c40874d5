mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use esback_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Run {
            prefix,
            retain,
            cluster_url,
        } => commands::run::handle(&config, prefix, retain, cluster_url).await,
        cli::Commands::Snapshots => commands::snapshots::handle(&config).await,
        cli::Commands::Prune { retain } => commands::prune::handle(&config, retain).await,
    }
}
