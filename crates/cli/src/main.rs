//! AI Energy Optimizer CLI
//!
//! A command-line tool for inspecting simulated telemetry, listing
//! optimization suggestions, estimating savings, and playing the
//! scripted analysis feed.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::{advisor, roi, suggestions, telemetry};

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// AI Energy Optimizer CLI
#[derive(Parser)]
#[command(name = "aeo")]
#[command(author, version, about = "CLI for the AI Energy Optimizer dashboard", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via AEO_API_URL env var)
    #[arg(long, env = "AEO_API_URL")]
    pub api_url: Option<String>,

    /// Output format (falls back to the config file, then table)
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect simulated telemetry
    #[command(subcommand)]
    Telemetry(TelemetryCommands),

    /// List the optimization suggestions
    Suggestions,

    /// Estimate savings and break-even timeline
    Roi {
        /// Number of servers in the fleet
        #[arg(long)]
        servers: u32,

        /// Average monthly infrastructure cost in dollars
        #[arg(long)]
        monthly_cost: f64,

        /// Current efficiency percentage (30-90)
        #[arg(long)]
        efficiency: f64,
    },

    /// Play the scripted analysis feed
    Analyze {
        /// Simulation speed (1-10)
        #[arg(long, default_value_t = 5)]
        speed: u8,
    },
}

#[derive(Subcommand)]
pub enum TelemetryCommands {
    /// Show raw hourly samples
    Show {
        /// Limit output to the trailing hours of the window
        #[arg(long, default_value_t = 24)]
        last_hours: usize,
    },

    /// Show the trailing-window summary
    Summary {
        /// Window size in hours
        #[arg(long, default_value_t = 24)]
        hours: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flags and env vars win over the config file
    let file_config = config::Config::load().unwrap_or_default();
    let api_url = cli
        .api_url
        .or(file_config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let format = cli
        .format
        .or_else(|| {
            file_config
                .default_format
                .as_deref()
                .and_then(|f| output::OutputFormat::from_str(f, true).ok())
        })
        .unwrap_or_default();

    // Initialize client
    let client = client::ApiClient::new(&api_url)?;

    // Execute command
    match cli.command {
        Commands::Telemetry(telemetry_cmd) => match telemetry_cmd {
            TelemetryCommands::Show { last_hours } => {
                telemetry::show_samples(&client, last_hours, format).await?;
            }
            TelemetryCommands::Summary { hours } => {
                telemetry::show_summary(&client, hours, format).await?;
            }
        },
        Commands::Suggestions => {
            suggestions::list_suggestions(&client, format).await?;
        }
        Commands::Roi {
            servers,
            monthly_cost,
            efficiency,
        } => {
            roi::estimate(&client, servers, monthly_cost, efficiency, format).await?;
        }
        Commands::Analyze { speed } => {
            advisor::analyze(&client, speed, format).await?;
        }
    }

    Ok(())
}
