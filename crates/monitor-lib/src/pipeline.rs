//! Synchronous prediction pipeline
//!
//! One observation in, one classified prediction out, one record
//! appended to the log. Requests are independent and stateless; the
//! append-only log is the only shared state.

use crate::classifier::{ClassifyPolicy, StatusTier};
use crate::logstore::LogStore;
use crate::models::{LogRecord, Observation, Prediction};
use crate::observability::{MonitorMetrics, StructuredLogger};
use crate::predictor::{ScoreError, TempPredictor};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Timestamp format used in log records
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors surfaced from one prediction request
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scoring(#[from] ScoreError),
    #[error("failed to append log record: {0}")]
    Log(#[source] anyhow::Error),
}

/// Outcome of one prediction request
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub time: String,
    pub observation: Observation,
    pub prediction: Prediction,
    pub status: StatusTier,
}

/// Runs the score → classify → log cycle for each request
pub struct PredictionPipeline {
    predictor: TempPredictor,
    policy: ClassifyPolicy,
    store: Arc<dyn LogStore>,
    logger: StructuredLogger,
    metrics: MonitorMetrics,
}

impl PredictionPipeline {
    pub fn new(
        predictor: TempPredictor,
        policy: ClassifyPolicy,
        store: Arc<dyn LogStore>,
        logger: StructuredLogger,
        metrics: MonitorMetrics,
    ) -> Self {
        Self {
            predictor,
            policy,
            store,
            logger,
            metrics,
        }
    }

    /// Run one prediction request end to end.
    ///
    /// A scoring failure aborts the request before anything is logged.
    pub fn run(&self, observation: Observation) -> Result<PredictionReport, PipelineError> {
        let start = Instant::now();
        let prediction = self.predictor.predict(&observation).map_err(|e| {
            self.metrics.inc_scoring_errors();
            self.logger.log_scoring_failure(&e);
            e
        })?;
        self.metrics
            .observe_inference_latency(start.elapsed().as_secs_f64());

        let status = self.policy.classify(&prediction);
        let time = chrono::Local::now().format(TIME_FORMAT).to_string();

        let record = build_record(&time, &observation, &prediction, status);
        self.store.append(&record).map_err(|e| {
            self.metrics.inc_log_append_errors();
            PipelineError::Log(e)
        })?;

        self.metrics.inc_predictions_generated();
        self.metrics.inc_log_records();
        self.metrics.inc_status_tier(status);
        self.logger.log_prediction(&observation, &prediction, status);

        Ok(PredictionReport {
            time,
            observation,
            prediction,
            status,
        })
    }
}

fn build_record(
    time: &str,
    observation: &Observation,
    prediction: &Prediction,
    status: StatusTier,
) -> LogRecord {
    LogRecord {
        time: time.to_string(),
        active_power_mw: observation.active_power_mw,
        reactive_power_mvar: observation.reactive_power_mvar,
        oil_pressure_kpa: observation.oil_pressure_kpa,
        temperature_c: prediction.temperature_c,
        vibration_mm_s: prediction.vibration_mm_s,
        shaft_displacement_mm: prediction.shaft_displacement_mm,
        status: status.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logstore::CsvLogStore;
    use crate::predictor::test_support::{FailingScorer, StubScorer};
    use tempfile::tempdir;

    fn pipeline_with(
        scorer: Arc<dyn crate::predictor::Scorer>,
        store: Arc<dyn LogStore>,
        policy: ClassifyPolicy,
    ) -> PredictionPipeline {
        PredictionPipeline::new(
            TempPredictor::new(scorer),
            policy,
            store,
            StructuredLogger::new("U1"),
            MonitorMetrics::new(),
        )
    }

    fn observation() -> Observation {
        Observation {
            active_power_mw: 277.0,
            reactive_power_mvar: -20.0,
            oil_pressure_kpa: 295.0,
        }
    }

    #[test]
    fn test_run_reports_and_appends() {
        let dir = tempdir().unwrap();
        let store = Arc::new(CsvLogStore::new(dir.path().join("prediction_log.csv")));
        let pipeline = pipeline_with(
            Arc::new(StubScorer::returning(92.5)),
            store.clone(),
            ClassifyPolicy::MultiSignal,
        );

        let report = pipeline.run(observation()).unwrap();
        assert_eq!(report.prediction.temperature_c, 92.5);
        assert_eq!(report.status, StatusTier::Normal);

        let records = store.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].temperature_c, 92.5);
        assert_eq!(records[0].status, "Normal");
        assert_eq!(records[0].time, report.time);
    }

    #[test]
    fn test_run_uses_configured_policy() {
        let dir = tempdir().unwrap();
        let store = Arc::new(CsvLogStore::new(dir.path().join("prediction_log.csv")));
        // 96 °C is Warning under either policy; vibration 1.3 stays Normal,
        // so the tier must come from the temperature clause.
        let pipeline = pipeline_with(
            Arc::new(StubScorer::returning(96.0)),
            store,
            ClassifyPolicy::TemperatureOnly,
        );

        let report = pipeline.run(observation()).unwrap();
        assert_eq!(report.status, StatusTier::Warning);
    }

    #[test]
    fn test_scoring_failure_appends_nothing() {
        let dir = tempdir().unwrap();
        let store = Arc::new(CsvLogStore::new(dir.path().join("prediction_log.csv")));
        let pipeline = pipeline_with(
            Arc::new(FailingScorer),
            store.clone(),
            ClassifyPolicy::MultiSignal,
        );

        let err = pipeline.run(observation()).unwrap_err();
        assert!(matches!(err, PipelineError::Scoring(_)));
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_record_timestamp_format() {
        let dir = tempdir().unwrap();
        let store = Arc::new(CsvLogStore::new(dir.path().join("prediction_log.csv")));
        let pipeline = pipeline_with(
            Arc::new(StubScorer::returning(92.5)),
            store,
            ClassifyPolicy::MultiSignal,
        );

        let report = pipeline.run(observation()).unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&report.time, TIME_FORMAT).is_ok(),
            "timestamp {} does not match {}",
            report.time,
            TIME_FORMAT
        );
    }
}
