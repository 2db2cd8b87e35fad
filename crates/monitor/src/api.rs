//! HTTP API for predictions, the prediction log, health checks and metrics

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use monitor_lib::{
    classifier::StatusTier,
    health::{ComponentStatus, HealthRegistry},
    labels::{self, Locale},
    logstore::LogStore,
    model_info::ModelInfo,
    models::Observation,
    observability::{MonitorMetrics, StructuredLogger},
    pipeline::PredictionPipeline,
};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
    pub store: Arc<dyn LogStore>,
    pub health_registry: HealthRegistry,
    pub metrics: MonitorMetrics,
    pub logger: StructuredLogger,
    pub locale: Locale,
}

impl AppState {
    pub fn new(
        pipeline: Arc<PredictionPipeline>,
        store: Arc<dyn LogStore>,
        health_registry: HealthRegistry,
        metrics: MonitorMetrics,
        logger: StructuredLogger,
        locale: Locale,
    ) -> Self {
        Self {
            pipeline,
            store,
            health_registry,
            metrics,
            logger,
            locale,
        }
    }
}

/// One prediction request, readings as entered by the operator
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub mw: f32,
    pub mvar: f32,
    pub oil_pressure: f32,
}

/// Prediction response body
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub time: String,
    pub temperature_c: f32,
    pub vibration_mm_s: f32,
    pub shaft_displacement_mm: f32,
    pub status: StatusTier,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Run the full prediction pipeline for one set of readings.
///
/// Input ranges are enforced here, at the boundary; the pipeline itself
/// assumes pre-validated readings.
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> impl IntoResponse {
    let observation = match Observation::validated(req.mw, req.mvar, req.oil_pressure) {
        Ok(observation) => observation,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    match state.pipeline.run(observation) {
        Ok(report) => Json(PredictResponse {
            time: report.time,
            temperature_c: report.prediction.temperature_c,
            vibration_mm_s: report.prediction.vibration_mm_s,
            shaft_displacement_mm: report.prediction.shaft_displacement_mm,
            status: report.status,
            status_label: labels::status_label(state.locale, report.status),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "Prediction request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// All log records in insertion order
async fn get_log(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.read_all() {
        Ok(records) => {
            state.metrics.set_log_records(records.len() as i64);
            Json(records).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to read prediction log");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Raw CSV download of the prediction log
async fn export_log(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.export_csv() {
        Ok(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"prediction_log.csv\"",
                ),
            ],
            content,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to export prediction log");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Irreversibly clear the prediction log; idempotent
async fn clear_log(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.clear() {
        Ok(()) => {
            state.metrics.set_log_records(0);
            state.logger.log_cleared();
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to clear prediction log");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Static model metadata
async fn model_info() -> impl IntoResponse {
    Json(ModelInfo::current())
}

#[derive(Debug, Deserialize)]
struct LabelsQuery {
    locale: Option<String>,
}

/// Display string table for a locale
async fn get_labels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LabelsQuery>,
) -> impl IntoResponse {
    let locale = match query.locale {
        None => state.locale,
        Some(raw) => match raw.parse::<Locale>() {
            Ok(locale) => locale,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorBody { error: e })).into_response()
            }
        },
    };
    Json(labels::labels(locale)).into_response()
}

/// Health check response - returns 200 if healthy, 503 if unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/log", get(get_log).delete(clear_log))
        .route("/log/export", get(export_log))
        .route("/model", get(model_info))
        .route("/labels", get(get_labels))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
