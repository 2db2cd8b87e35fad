//! Bearing Temperature Monitor CLI
//!
//! A command-line tool for running predictions, inspecting the
//! prediction log, and checking the monitor service.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{log, predict, status};

/// Bearing Temperature Monitor CLI
#[derive(Parser)]
#[command(name = "btm")]
#[command(author, version, about = "CLI for the Bearing Temperature Monitor", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via BTM_API_URL env var)
    #[arg(long, env = "BTM_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one prediction from sensor readings
    Predict {
        /// Active power in MW (valid range 100-300)
        #[arg(long, default_value_t = 277.0, value_parser = parse_mw)]
        mw: f32,

        /// Reactive power in MVAR (valid range -120-40)
        #[arg(long, default_value_t = -20.0, allow_negative_numbers = true, value_parser = parse_mvar)]
        mvar: f32,

        /// Oil pressure in kPa (valid range 270-320)
        #[arg(long, default_value_t = 295.0, value_parser = parse_oil_pressure)]
        oil_pressure: f32,
    },

    /// Inspect or manage the prediction log
    #[command(subcommand)]
    Log(LogCommands),

    /// Show model metadata
    Model,

    /// Show monitor health and readiness
    Status,
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Show all logged predictions
    Show,

    /// Download the log as CSV
    Export {
        /// Output file path (stdout if not specified)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Irreversibly clear the log
    Clear,
}

// Input ranges are enforced here, at the boundary, matching the bounds
// the service applies on its side.

fn parse_reading(s: &str, min: f32, max: f32, unit: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be within {min}-{max} {unit}, got {value}"))
    }
}

fn parse_mw(s: &str) -> Result<f32, String> {
    parse_reading(s, 100.0, 300.0, "MW")
}

fn parse_mvar(s: &str) -> Result<f32, String> {
    parse_reading(s, -120.0, 40.0, "MVAR")
}

fn parse_oil_pressure(s: &str) -> Result<f32, String> {
    parse_reading(s, 270.0, 320.0, "kPa")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    match cli.command {
        Commands::Predict {
            mw,
            mvar,
            oil_pressure,
        } => {
            predict::run_prediction(&client, mw, mvar, oil_pressure, cli.format).await?;
        }
        Commands::Log(log_cmd) => match log_cmd {
            LogCommands::Show => {
                log::show_log(&client, cli.format).await?;
            }
            LogCommands::Export { output } => {
                log::export_log(&client, output).await?;
            }
            LogCommands::Clear => {
                log::clear_log(&client).await?;
            }
        },
        Commands::Model => {
            status::show_model(&client, cli.format).await?;
        }
        Commands::Status => {
            status::show_status(&client, cli.format).await?;
        }
    }

    Ok(())
}
