//! Monitor health and model metadata commands

use crate::client::{ApiClient, ModelInfo};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;

pub async fn show_model(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let info: ModelInfo = client.get("/model").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Table => {
            println!("{}: {}", "Trained Date".bold(), info.trained_date);
            println!("{}: {}", "Algorithm".bold(), info.algorithm);
            println!("{}:", "Input Importance".bold());
            for entry in &info.input_importance {
                let bar = "█".repeat((entry.weight * 20.0) as usize);
                println!(
                    "  {:<14} {} {}%",
                    entry.input,
                    bar,
                    (entry.weight * 100.0) as u32
                );
            }
        }
    }

    Ok(())
}

pub async fn show_status(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let (health_code, health_body) = client.get_raw("/healthz").await?;
    let (ready_code, ready_body) = client.get_raw("/readyz").await?;

    match format {
        OutputFormat::Json => {
            let health: serde_json::Value = serde_json::from_str(&health_body)?;
            let readiness: serde_json::Value = serde_json::from_str(&ready_body)?;
            let combined = serde_json::json!({
                "health": health,
                "readiness": readiness,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        OutputFormat::Table => {
            let health: serde_json::Value = serde_json::from_str(&health_body)?;
            let status = health["status"].as_str().unwrap_or("unknown");
            println!(
                "{}: {} (HTTP {})",
                "Health".bold(),
                output::color_health(status),
                health_code.as_u16()
            );

            if let Some(components) = health["components"].as_object() {
                for (name, component) in components {
                    let status = component["status"].as_str().unwrap_or("unknown");
                    println!("  {:<12} {}", name, output::color_health(status));
                }
            }

            let readiness: serde_json::Value = serde_json::from_str(&ready_body)?;
            let ready = readiness["ready"].as_bool().unwrap_or(false);
            if ready {
                output::print_success(&format!("Ready (HTTP {})", ready_code.as_u16()));
            } else {
                let reason = readiness["reason"].as_str().unwrap_or("unknown");
                output::print_info(&format!(
                    "Not ready (HTTP {}): {}",
                    ready_code.as_u16(),
                    reason
                ));
            }
        }
    }

    Ok(())
}
