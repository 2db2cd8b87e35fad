//! Observability infrastructure for the bearing monitor
//!
//! Provides:
//! - Prometheus metrics (inference latency, prediction/error counts, tier counts)
//! - Structured JSON logging with tracing

use prometheus::{
    register_gauge_vec, register_histogram, register_int_gauge, register_int_gauge_vec,
    GaugeVec, Histogram, IntGauge, IntGaugeVec,
};
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::classifier::StatusTier;
use crate::models::{Observation, Prediction};
use crate::predictor::ScoreError;

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<MonitorMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct MonitorMetricsInner {
    inference_latency_seconds: Histogram,
    predictions_generated: IntGauge,
    scoring_errors: IntGauge,
    log_append_errors: IntGauge,
    log_records: IntGauge,
    status_tiers: IntGaugeVec,
    model_version_info: GaugeVec,
}

impl MonitorMetricsInner {
    fn new() -> Self {
        Self {
            inference_latency_seconds: register_histogram!(
                "bearing_monitor_inference_latency_seconds",
                "Time spent running model inference for one prediction",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register inference_latency_seconds"),

            predictions_generated: register_int_gauge!(
                "bearing_monitor_predictions_generated_total",
                "Total number of predictions generated"
            )
            .expect("Failed to register predictions_generated"),

            scoring_errors: register_int_gauge!(
                "bearing_monitor_scoring_errors_total",
                "Total number of scoring function failures"
            )
            .expect("Failed to register scoring_errors"),

            log_append_errors: register_int_gauge!(
                "bearing_monitor_log_append_errors_total",
                "Total number of failed prediction log appends"
            )
            .expect("Failed to register log_append_errors"),

            log_records: register_int_gauge!(
                "bearing_monitor_log_records",
                "Number of records currently in the prediction log"
            )
            .expect("Failed to register log_records"),

            status_tiers: register_int_gauge_vec!(
                "bearing_monitor_status_total",
                "Predictions classified per status tier",
                &["tier"]
            )
            .expect("Failed to register status_tiers"),

            model_version_info: register_gauge_vec!(
                "bearing_monitor_model_version_info",
                "Information about the currently loaded model artifact",
                &["version"]
            )
            .expect("Failed to register model_version_info"),
        }
    }
}

/// Monitor metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct MonitorMetrics {
    _private: (),
}

impl Default for MonitorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(MonitorMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &MonitorMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record an inference latency observation
    pub fn observe_inference_latency(&self, duration_secs: f64) {
        self.inner().inference_latency_seconds.observe(duration_secs);
    }

    /// Increment predictions generated counter
    pub fn inc_predictions_generated(&self) {
        self.inner().predictions_generated.inc();
    }

    /// Increment scoring errors counter
    pub fn inc_scoring_errors(&self) {
        self.inner().scoring_errors.inc();
    }

    /// Increment log append errors counter
    pub fn inc_log_append_errors(&self) {
        self.inner().log_append_errors.inc();
    }

    /// Update the prediction log record count
    pub fn set_log_records(&self, count: i64) {
        self.inner().log_records.set(count);
    }

    /// Increment the prediction log record count
    pub fn inc_log_records(&self) {
        self.inner().log_records.inc();
    }

    /// Increment the counter for a classified tier
    pub fn inc_status_tier(&self, tier: StatusTier) {
        self.inner()
            .status_tiers
            .with_label_values(&[tier.label()])
            .inc();
    }

    /// Update model version info
    pub fn set_model_version(&self, version: &str) {
        self.inner().model_version_info.reset();
        self.inner()
            .model_version_info
            .with_label_values(&[version])
            .set(1.0);
    }
}

/// Structured logger for monitor events
///
/// Provides consistent JSON-formatted logging for predictions, scoring
/// failures, and other significant events.
#[derive(Clone)]
pub struct StructuredLogger {
    unit_name: String,
}

impl StructuredLogger {
    pub fn new(unit_name: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
        }
    }

    /// Log a completed prediction
    pub fn log_prediction(
        &self,
        observation: &Observation,
        prediction: &Prediction,
        status: StatusTier,
    ) {
        info!(
            event = "prediction_generated",
            unit = %self.unit_name,
            active_power_mw = observation.active_power_mw,
            reactive_power_mvar = observation.reactive_power_mvar,
            oil_pressure_kpa = observation.oil_pressure_kpa,
            temperature_c = prediction.temperature_c,
            vibration_mm_s = prediction.vibration_mm_s,
            shaft_displacement_mm = prediction.shaft_displacement_mm,
            status = %status,
            "Generated bearing temperature prediction"
        );
    }

    /// Log a scoring function failure
    pub fn log_scoring_failure(&self, error: &ScoreError) {
        warn!(
            event = "scoring_failure",
            unit = %self.unit_name,
            error = %error,
            "Scoring function failed"
        );
    }

    /// Log a prediction log clear
    pub fn log_cleared(&self) {
        info!(
            event = "log_cleared",
            unit = %self.unit_name,
            "Prediction log cleared"
        );
    }

    /// Log service startup
    pub fn log_startup(&self, version: &str, model_version: &str) {
        info!(
            event = "monitor_started",
            unit = %self.unit_name,
            monitor_version = %version,
            model_version = %model_version,
            "Bearing monitor started"
        );
    }

    /// Log service shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "monitor_shutdown",
            unit = %self.unit_name,
            reason = %reason,
            "Bearing monitor shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_metrics_creation() {
        // Metrics are registered against the process-global Prometheus
        // registry, so creation must be idempotent across handles.
        let metrics = MonitorMetrics::new();

        metrics.observe_inference_latency(0.001);
        metrics.inc_predictions_generated();
        metrics.inc_scoring_errors();
        metrics.set_log_records(3);
        metrics.inc_status_tier(StatusTier::Normal);
        metrics.set_model_version("v1.0.0");

        let _again = MonitorMetrics::new();
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("U1");
        assert_eq!(logger.unit_name, "U1");
    }
}
