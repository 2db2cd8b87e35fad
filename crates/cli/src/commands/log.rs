//! Prediction log commands

use crate::client::{ApiClient, LogEntry};
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};

pub async fn show_log(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let records: Vec<LogEntry> = client.get("/log").await?;
    output::print_table(&records, format);
    Ok(())
}

pub async fn export_log(client: &ApiClient, output_path: Option<String>) -> Result<()> {
    let content = client.get_text("/log/export").await?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, &content)
                .with_context(|| format!("failed to write {}", path))?;
            output::print_success(&format!("Log exported to {}", path));
        }
        None => print!("{}", content),
    }

    Ok(())
}

pub async fn clear_log(client: &ApiClient) -> Result<()> {
    client.delete("/log").await?;
    output::print_success("Log cleared successfully");
    Ok(())
}
