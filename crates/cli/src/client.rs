//! API client for communicating with the monitor service

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tabled::Tabled;
use url::Url;

/// API client for the monitor service
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a GET request and return the raw body
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.text().await.context("Failed to read response")
    }

    /// Make a GET request without treating non-2xx as an error
    pub async fn get_raw(&self, path: &str) -> Result<(reqwest::StatusCode, String)> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }
}

// API request/response types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub mw: f32,
    pub mvar: f32,
    pub oil_pressure: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub time: String,
    pub temperature_c: f32,
    pub vibration_mm_s: f32,
    pub shaft_displacement_mm: f32,
    pub status: String,
    pub status_label: String,
}

/// One prediction log row; serde renames match the log's CSV columns
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct LogEntry {
    #[serde(rename = "Time")]
    #[tabled(rename = "Time")]
    pub time: String,
    #[serde(rename = "MW")]
    #[tabled(rename = "MW")]
    pub active_power_mw: f32,
    #[serde(rename = "MVAR")]
    #[tabled(rename = "MVAR")]
    pub reactive_power_mvar: f32,
    #[serde(rename = "Oil Pressure")]
    #[tabled(rename = "Oil Pressure")]
    pub oil_pressure_kpa: f32,
    #[serde(rename = "Temperature")]
    #[tabled(rename = "Temperature")]
    pub temperature_c: f32,
    #[serde(rename = "Vibration")]
    #[tabled(rename = "Vibration")]
    pub vibration_mm_s: f32,
    #[serde(rename = "Shaft")]
    #[tabled(rename = "Shaft")]
    pub shaft_displacement_mm: f32,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub trained_date: String,
    pub algorithm: String,
    pub input_importance: Vec<ImportanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub input: String,
    pub weight: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_parses_model_info() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/model")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"trained_date":"2025-06-04","algorithm":"Gradient Boosting",
                   "input_importance":[{"input":"MVAR","weight":0.45}]}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let info: ModelInfo = client.get("/model").await.unwrap();

        assert_eq!(info.trained_date, "2025-06-04");
        assert_eq!(info.input_importance.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_readings_and_parses_report() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"mw":277.0,"mvar":-20.0,"oil_pressure":295.0}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"time":"2025-06-04 12:00:00","temperature_c":92.5,
                   "vibration_mm_s":1.3,"shaft_displacement_mm":20.2,
                   "status":"normal","status_label":"Normal"}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let report: PredictResponse = client
            .post(
                "/predict",
                &PredictRequest {
                    mw: 277.0,
                    mvar: -20.0,
                    oil_pressure: 295.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.temperature_c, 92.5);
        assert_eq!(report.status_label, "Normal");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/log")
            .with_status(500)
            .with_body(r#"{"error":"model artifact unavailable"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let err = client.get::<Vec<LogEntry>>("/log").await.unwrap_err();
        assert!(err.to_string().contains("API error"));
    }
}
