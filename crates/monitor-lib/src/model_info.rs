//! Static metadata about the deployed model artifact

use serde::Serialize;

pub const TRAINED_DATE: &str = "2025-06-04";
pub const ALGORITHM: &str = "Gradient Boosting";

/// Relative importance of each model input, highest first
pub const INPUT_IMPORTANCE: [(&str, f32); 3] =
    [("MVAR", 0.45), ("MW", 0.35), ("Oil Pressure", 0.20)];

/// Metadata served by the model info surface
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub trained_date: &'static str,
    pub algorithm: &'static str,
    pub input_importance: Vec<ImportanceEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportanceEntry {
    pub input: &'static str,
    pub weight: f32,
}

impl ModelInfo {
    pub fn current() -> Self {
        Self {
            trained_date: TRAINED_DATE,
            algorithm: ALGORITHM,
            input_importance: INPUT_IMPORTANCE
                .iter()
                .map(|(input, weight)| ImportanceEntry {
                    input,
                    weight: *weight,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_weights_sum_to_one() {
        let total: f32 = INPUT_IMPORTANCE.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_model_info_lists_all_inputs() {
        let info = ModelInfo::current();
        assert_eq!(info.input_importance.len(), 3);
        assert_eq!(info.input_importance[0].input, "MVAR");
    }
}
