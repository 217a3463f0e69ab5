//! droidship entry point.

mod actions;
mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let root = cli
        .project_root()
        .context("failed to determine project root")?;

    let config = config::Config::load(&root, cli.config.as_deref())?;
    tracing::info!(
        action = ?cli.action,
        root = %root.display(),
        "starting droidship"
    );

    // Commands are awaited one at a time; a single thread is enough.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(actions::dispatch(cli.action, &root, &config))?;

    Ok(())
}
