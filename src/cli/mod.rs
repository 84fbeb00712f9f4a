pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quakereport")]
#[command(about = "Recent earthquakes from the USGS feed", long_about = None)]
pub struct Cli {
    /// Feed URL to query instead of the configured one
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Show dates and times in UTC
    #[arg(long, global = true)]
    pub utc: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch once and print the earthquake list
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Launch the TUI (default)
    Tui,
}
