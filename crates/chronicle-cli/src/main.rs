//! Chronicle CLI - build event timelines from news articles.

use anyhow::Context;
use chronicle_cli::commands;
use chronicle_cli::{Cli, Command, Config, Formatter};
use chronicle_domain::ProviderKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    if cli.offline {
        config.analysis.provider = ProviderKind::FallbackOnly;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await?,
        Command::Timeline(args) => commands::execute_timeline(args, &config, &formatter).await?,
        Command::Score(args) => commands::execute_score(args, &config, &formatter)?,
        Command::CacheKey { query } => commands::execute_cache_key(&query, &config, &formatter)?,
        Command::Config => commands::execute_config(&config)?,
    }

    Ok(())
}
