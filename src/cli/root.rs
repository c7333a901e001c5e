use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use super::show::ShowCommand;
use crate::config::Config;
use crate::tui;

/// Rustdex - browse the Pokédex from your terminal
#[derive(Parser)]
#[command(
    name = "rustdex",
    version,
    about = "Browse the Pokédex from your terminal",
    long_about = r#"Rustdex is a terminal browser for the public PokéAPI. It pages through
the catalog ten entries at a time, renders them into a table, and shows a
detail panel for the selected entry.

Examples:
  rustdex                         # Start the interactive browser
  rustdex show pikachu            # Print one entry's details and exit
  rustdex --page-size 20          # Override the page size"#
)]
pub struct Cli {
    /// Base URL of the catalog API
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Number of entries per page
    #[arg(short = 'n', long = "page-size", global = true)]
    pub page_size: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one entry's details without starting the browser
    Show(ShowCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled (rustdex {})", crate::version::short_version());
        }

        // Initialize configuration, then apply CLI overrides on top
        let mut config = Config::init().await?;
        if let Some(base_url) = &self.base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        config.validate()?;
        debug!("Configuration initialized");

        match self.command {
            Some(Commands::Show(show_cmd)) => show_cmd.execute(&config).await,
            None => self.start_interactive_mode(&config).await,
        }
    }

    async fn start_interactive_mode(&self, config: &Config) -> Result<()> {
        info!("Starting interactive browser");

        tui::run(config.clone()).await?;

        info!("Application finished");
        Ok(())
    }
}
