//! Run one prediction against the monitor service

use crate::client::{ApiClient, PredictRequest, PredictResponse};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;

pub async fn run_prediction(
    client: &ApiClient,
    mw: f32,
    mvar: f32,
    oil_pressure: f32,
    format: OutputFormat,
) -> Result<()> {
    let report: PredictResponse = client
        .post(
            "/predict",
            &PredictRequest {
                mw,
                mvar,
                oil_pressure,
            },
        )
        .await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}: {:.2} °C", "Temperature".bold(), report.temperature_c);
            println!("{}: {} mm/s", "Vibration".bold(), report.vibration_mm_s);
            println!(
                "{}: {} mm",
                "Shaft Displacement".bold(),
                report.shaft_displacement_mm
            );
            println!(
                "{}: {}",
                "Status".bold(),
                output::color_tier(&report.status_label)
            );
        }
    }

    Ok(())
}
