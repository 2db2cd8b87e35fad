//! Bearing Temperature Monitor - operator dashboard service
//!
//! Loads the pre-trained bearing temperature model, serves the
//! prediction pipeline and the prediction log over HTTP.

use anyhow::{Context, Result};
use monitor_lib::{
    health::{components, HealthRegistry},
    logstore::{CsvLogStore, LogStore},
    observability::{MonitorMetrics, StructuredLogger},
    pipeline::PredictionPipeline,
    predictor::{OnnxScorer, Scorer, TempPredictor},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const MONITOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting bearing-monitor");

    // Load configuration
    let config = config::MonitorConfig::load()?;
    info!(unit_name = %config.unit_name, policy = ?config.policy, "Monitor configured");

    // Initialize health registry
    let health_registry = HealthRegistry::new();
    health_registry.register(components::SCORER).await;
    health_registry.register(components::LOG_STORE).await;

    // Initialize metrics
    let metrics = MonitorMetrics::new();

    // Initialize structured logger
    let logger = StructuredLogger::new(&config.unit_name);

    // A missing or malformed model artifact is fatal; no fallback
    // temperature is fabricated.
    let scorer = OnnxScorer::from_path(&config.model_path)
        .with_context(|| format!("failed to load model artifact {}", config.model_path))?;
    let model_version = scorer.model_version().to_string();
    metrics.set_model_version(&model_version);
    logger.log_startup(MONITOR_VERSION, &model_version);

    let store = Arc::new(CsvLogStore::new(&config.log_path));
    metrics.set_log_records(store.read_all()?.len() as i64);

    let pipeline = Arc::new(PredictionPipeline::new(
        TempPredictor::new(Arc::new(scorer)),
        config.policy,
        store.clone(),
        logger.clone(),
        metrics.clone(),
    ));

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(
        pipeline,
        store,
        health_registry.clone(),
        metrics.clone(),
        logger.clone(),
        config.locale,
    ));

    // Mark monitor as ready after initialization
    health_registry.set_ready(true).await;

    // Start the API server
    let _api_handle = tokio::spawn(api::serve(config.api_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");

    Ok(())
}
