//! Core library for the generator bearing temperature monitor
//!
//! This crate provides:
//! - ONNX-based temperature scoring behind an injectable trait
//! - Threshold classification into status tiers
//! - An append-only CSV prediction log
//! - Locale label tables and model metadata
//! - Health checks and observability

pub mod classifier;
pub mod health;
pub mod labels;
pub mod logstore;
pub mod model_info;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod predictor;

pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{MonitorMetrics, StructuredLogger};
