//! ONNX inference using tract
//!
//! Loads the pre-trained bearing temperature regression model via
//! tract-onnx and exposes it behind the [`Scorer`] trait.

use super::{ScoreError, Scorer};
use crate::models::FeatureVector;
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::debug;

/// Number of input features expected by the model
const NUM_FEATURES: usize = 3;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// tract-backed scorer over the ONNX model artifact
pub struct OnnxScorer {
    model: TractModel,
    model_version: String,
}

impl std::fmt::Debug for OnnxScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxScorer")
            .field("model_version", &self.model_version)
            .finish_non_exhaustive()
    }
}

impl OnnxScorer {
    /// Load and optimize the ONNX artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ScoreError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&bytes)
    }

    /// Load and optimize an ONNX model from bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, ScoreError> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .map_err(|e| {
                ScoreError::ModelUnavailable(format!("failed to parse ONNX model: {e}"))
            })?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .map_err(|e| ScoreError::Rejected(format!("failed to set input shape: {e}")))?
            .into_optimized()
            .map_err(|e| {
                ScoreError::ModelUnavailable(format!("failed to optimize model: {e}"))
            })?
            .into_runnable()
            .map_err(|e| {
                ScoreError::ModelUnavailable(format!("failed to create runnable model: {e}"))
            })?;
        Ok(Self {
            model,
            model_version: "v1.0.0".to_string(),
        })
    }
}

impl Scorer for OnnxScorer {
    fn score(&self, features: &FeatureVector) -> Result<f32, ScoreError> {
        let input: Tensor =
            tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), features.as_array().to_vec())
                .map_err(|e| ScoreError::Rejected(e.to_string()))?
                .into();

        let result = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| ScoreError::Rejected(e.to_string()))?;

        // The temperature is the first value of the first output tensor
        let output = result
            .first()
            .ok_or_else(|| ScoreError::BadOutput("no output tensor".to_string()))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| ScoreError::BadOutput(e.to_string()))?;
        let temperature_c = view
            .iter()
            .next()
            .copied()
            .ok_or_else(|| ScoreError::BadOutput("empty output tensor".to_string()))?;

        debug!(temperature_c, "Inference completed");
        Ok(temperature_c)
    }

    fn model_version(&self) -> &str {
        &self.model_version
    }
}
