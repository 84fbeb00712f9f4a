use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quakereport::app::AppContext;
use quakereport::cli::{commands, Cli, Commands};
use quakereport::config::Config;
use quakereport::presenter::DisplayTimezone;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the list output and the TUI.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.feed.url = url;
    }
    if cli.utc {
        config.display.timezone = DisplayTimezone::Utc;
    }

    let ctx = AppContext::new(&config.feed)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::List { json } => {
            commands::list_earthquakes(&ctx, config.display.timezone, json).await?;
        }
        Commands::Tui => {
            quakereport::tui::run(Arc::new(ctx), Arc::new(config)).await?;
        }
    }

    Ok(())
}
