//! CLI module for Wayfare.
//!
//! Subcommands:
//! - `one`: Print the advisory currently linked to a city
//! - `replace`: Replace a city's advisory with one read from a JSON file

mod one;
mod replace;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::graph::backends::http::HttpClient;
use crate::repositories::AdvisoryRepository;

/// Wayfare - Travel Advisory Data Layer
#[derive(Parser)]
#[command(name = "wayfare")]
#[command(about = "Travel advisory data layer over a GraphQL graph database")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the advisory currently linked to a city
    One {
        /// City identifier
        city_id: String,
    },

    /// Replace a city's advisory with one read from a JSON file
    Replace {
        /// City identifier
        city_id: String,

        /// Path to a JSON file holding the new advisory
        #[arg(long)]
        file: std::path::PathBuf,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::One { ref city_id } => self.run_one(city_id).await,
            Command::Replace {
                ref city_id,
                ref file,
            } => self.run_replace(city_id, file).await,
        }
    }
}

/// Builds a repository from the loaded configuration.
fn repository() -> color_eyre::Result<AdvisoryRepository> {
    let config = Config::load()?;
    tracing::info!("Using GraphQL endpoint at {}", config.graphql.url);

    let mut client = HttpClient::new(&config.graphql.url);
    if let Some(token) = &config.graphql.token {
        client = client.with_token(token);
    }

    Ok(AdvisoryRepository::new(Arc::new(client)))
}
