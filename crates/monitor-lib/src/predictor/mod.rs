//! Bearing temperature prediction

mod derived;
mod inference;

pub use derived::{shaft_displacement_mm, vibration_mm_s};
pub use inference::OnnxScorer;

use crate::models::{FeatureVector, Observation, Prediction};
use std::sync::Arc;
use thiserror::Error;

/// Errors from the scoring function boundary.
///
/// A scoring failure is fatal to the current request and is surfaced to
/// the caller; no fallback temperature is fabricated.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("model artifact unavailable: {0}")]
    ModelUnavailable(String),
    #[error("scoring function rejected input: {0}")]
    Rejected(String),
    #[error("unexpected model output: {0}")]
    BadOutput(String),
}

/// Trait for scoring implementations (the pre-trained model as a black box)
pub trait Scorer: Send + Sync {
    /// Map a feature vector to a predicted bearing temperature in °C
    fn score(&self, features: &FeatureVector) -> Result<f32, ScoreError>;

    /// Version tag of the loaded model
    fn model_version(&self) -> &str;
}

/// Produces a full prediction from one observation.
///
/// Wraps an injected scorer and adds the synthetic condition metrics,
/// which are computed in closed form and never touch the model.
pub struct TempPredictor {
    scorer: Arc<dyn Scorer>,
}

impl TempPredictor {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// Run one prediction. Pure apart from the scorer invocation.
    pub fn predict(&self, observation: &Observation) -> Result<Prediction, ScoreError> {
        let features = FeatureVector::from(observation);
        let temperature_c = self.scorer.score(&features)?;
        Ok(Prediction {
            temperature_c,
            vibration_mm_s: vibration_mm_s(observation.reactive_power_mvar),
            shaft_displacement_mm: shaft_displacement_mm(observation.reactive_power_mvar),
        })
    }

    pub fn model_version(&self) -> &str {
        self.scorer.model_version()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Stub scorer returning a fixed temperature and recording the
    /// feature vectors it was called with
    pub struct StubScorer {
        pub temperature_c: f32,
        pub calls: Mutex<Vec<FeatureVector>>,
    }

    impl StubScorer {
        pub fn returning(temperature_c: f32) -> Self {
            Self {
                temperature_c,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Scorer for StubScorer {
        fn score(&self, features: &FeatureVector) -> Result<f32, ScoreError> {
            self.calls.lock().unwrap().push(*features);
            Ok(self.temperature_c)
        }

        fn model_version(&self) -> &str {
            "stub"
        }
    }

    /// Stub scorer that always fails
    pub struct FailingScorer;

    impl Scorer for FailingScorer {
        fn score(&self, _features: &FeatureVector) -> Result<f32, ScoreError> {
            Err(ScoreError::ModelUnavailable("stubbed failure".to_string()))
        }

        fn model_version(&self) -> &str {
            "stub"
        }
    }
}
