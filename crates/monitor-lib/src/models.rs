//! Core data models for the bearing monitor

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Valid active power range in MW
pub const ACTIVE_POWER_RANGE_MW: RangeInclusive<f32> = 100.0..=300.0;

/// Valid reactive power range in MVAR
pub const REACTIVE_POWER_RANGE_MVAR: RangeInclusive<f32> = -120.0..=40.0;

/// Valid oil pressure range in kPa
pub const OIL_PRESSURE_RANGE_KPA: RangeInclusive<f32> = 270.0..=320.0;

/// One set of generator sensor readings for a single prediction request.
///
/// Range enforcement happens at the API and CLI boundaries; the core
/// components assume pre-validated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub active_power_mw: f32,
    pub reactive_power_mvar: f32,
    pub oil_pressure_kpa: f32,
}

/// A reading outside the sensor's valid domain
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} must be within {min}-{max}, got {value}")]
pub struct RangeError {
    pub field: &'static str,
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Observation {
    /// Boundary validation used by the input surfaces
    pub fn validated(
        active_power_mw: f32,
        reactive_power_mvar: f32,
        oil_pressure_kpa: f32,
    ) -> Result<Self, RangeError> {
        check_range("active power (MW)", active_power_mw, ACTIVE_POWER_RANGE_MW)?;
        check_range(
            "reactive power (MVAR)",
            reactive_power_mvar,
            REACTIVE_POWER_RANGE_MVAR,
        )?;
        check_range("oil pressure (kPa)", oil_pressure_kpa, OIL_PRESSURE_RANGE_KPA)?;
        Ok(Self {
            active_power_mw,
            reactive_power_mvar,
            oil_pressure_kpa,
        })
    }
}

fn check_range(
    field: &'static str,
    value: f32,
    range: RangeInclusive<f32>,
) -> Result<(), RangeError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RangeError {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Ordered feature vector submitted to the scoring function.
///
/// The field order matches the order the model was trained on and must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub active_power_mw: f32,
    pub reactive_power_mvar: f32,
    pub oil_pressure_kpa: f32,
}

impl FeatureVector {
    /// The features in model input order
    pub fn as_array(&self) -> [f32; 3] {
        [
            self.active_power_mw,
            self.reactive_power_mvar,
            self.oil_pressure_kpa,
        ]
    }
}

impl From<&Observation> for FeatureVector {
    fn from(obs: &Observation) -> Self {
        Self {
            active_power_mw: obs.active_power_mw,
            reactive_power_mvar: obs.reactive_power_mvar,
            oil_pressure_kpa: obs.oil_pressure_kpa,
        }
    }
}

/// Model output plus the synthetic condition metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub temperature_c: f32,
    pub vibration_mm_s: f32,
    pub shaft_displacement_mm: f32,
}

/// One persisted snapshot of a prediction event.
///
/// Serde renames match the CSV column names of the log file exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "MW")]
    pub active_power_mw: f32,
    #[serde(rename = "MVAR")]
    pub reactive_power_mvar: f32,
    #[serde(rename = "Oil Pressure")]
    pub oil_pressure_kpa: f32,
    #[serde(rename = "Temperature")]
    pub temperature_c: f32,
    #[serde(rename = "Vibration")]
    pub vibration_mm_s: f32,
    #[serde(rename = "Shaft")]
    pub shaft_displacement_mm: f32,
    #[serde(rename = "Status")]
    pub status: String,
}

impl LogRecord {
    /// Column order of the persisted CSV file
    pub const CSV_HEADER: [&'static str; 8] = [
        "Time",
        "MW",
        "MVAR",
        "Oil Pressure",
        "Temperature",
        "Vibration",
        "Shaft",
        "Status",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_in_range_readings() {
        let obs = Observation::validated(277.0, -20.0, 295.0).unwrap();
        assert_eq!(obs.active_power_mw, 277.0);
        assert_eq!(obs.reactive_power_mvar, -20.0);
        assert_eq!(obs.oil_pressure_kpa, 295.0);
    }

    #[test]
    fn test_validated_accepts_boundary_values() {
        assert!(Observation::validated(100.0, -120.0, 270.0).is_ok());
        assert!(Observation::validated(300.0, 40.0, 320.0).is_ok());
    }

    #[test]
    fn test_validated_rejects_out_of_range() {
        let err = Observation::validated(99.0, -20.0, 295.0).unwrap_err();
        assert_eq!(err.field, "active power (MW)");

        let err = Observation::validated(277.0, 41.0, 295.0).unwrap_err();
        assert_eq!(err.field, "reactive power (MVAR)");

        let err = Observation::validated(277.0, -20.0, 320.5).unwrap_err();
        assert_eq!(err.field, "oil pressure (kPa)");
    }

    #[test]
    fn test_validated_rejects_non_finite() {
        assert!(Observation::validated(f32::NAN, -20.0, 295.0).is_err());
        assert!(Observation::validated(277.0, f32::INFINITY, 295.0).is_err());
    }

    #[test]
    fn test_feature_vector_order() {
        let obs = Observation {
            active_power_mw: 277.0,
            reactive_power_mvar: -20.0,
            oil_pressure_kpa: 295.0,
        };
        let features = FeatureVector::from(&obs);
        assert_eq!(features.as_array(), [277.0, -20.0, 295.0]);
    }
}
