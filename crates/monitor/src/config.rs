//! Service configuration

use anyhow::Result;
use monitor_lib::classifier::ClassifyPolicy;
use monitor_lib::labels::Locale;
use serde::Deserialize;

/// Monitor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Generator unit this monitor is attached to
    #[serde(default = "default_unit_name")]
    pub unit_name: String,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Path to the ONNX model artifact
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Path to the CSV prediction log
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Classification policy
    #[serde(default)]
    pub policy: ClassifyPolicy,

    /// Display locale for status labels
    #[serde(default)]
    pub locale: Locale,
}

fn default_unit_name() -> String {
    "U1".to_string()
}

fn default_api_port() -> u16 {
    8080
}

fn default_model_path() -> String {
    "bearing_temperature_model.onnx".to_string()
}

fn default_log_path() -> String {
    "prediction_log.csv".to_string()
}

impl MonitorConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("MONITOR"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| MonitorConfig {
            unit_name: default_unit_name(),
            api_port: default_api_port(),
            model_path: default_model_path(),
            log_path: default_log_path(),
            policy: ClassifyPolicy::default(),
            locale: Locale::default(),
        }))
    }
}
