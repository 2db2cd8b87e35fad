//! Threshold classification of predictions into status tiers
//!
//! Two threshold policies are in service: a temperature-only rule and a
//! multi-signal rule that also weighs vibration and shaft displacement.
//! Both are kept as named strategies selectable by configuration.

use crate::models::Prediction;
use serde::{Deserialize, Serialize};

/// Temperature below which a reading is Normal (°C)
const TEMP_NORMAL_MAX_C: f32 = 95.0;

/// Temperature above which a reading is Alarm (°C)
const TEMP_WARNING_MAX_C: f32 = 98.0;

/// Vibration ceiling for Normal (mm/s)
const VIBRATION_NORMAL_MAX: f32 = 3.0;

/// Vibration ceiling for Warning (mm/s)
const VIBRATION_WARNING_MAX: f32 = 4.0;

/// Shaft displacement ceiling for Normal (mm)
const SHAFT_NORMAL_MAX: f32 = 30.0;

/// Shaft displacement ceiling for Warning (mm)
const SHAFT_WARNING_MAX: f32 = 35.0;

/// Ordinal operational-health tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Normal,
    Warning,
    Alarm,
}

impl StatusTier {
    /// Locale-independent label, as stored in the prediction log
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Normal => "Normal",
            StatusTier::Warning => "Warning",
            StatusTier::Alarm => "Alarm",
        }
    }
}

impl std::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which threshold policy drives classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyPolicy {
    /// Temperature thresholds only
    TemperatureOnly,
    /// Temperature plus vibration and shaft displacement
    #[default]
    MultiSignal,
}

impl ClassifyPolicy {
    /// Classify a prediction under this policy
    pub fn classify(&self, prediction: &Prediction) -> StatusTier {
        match self {
            ClassifyPolicy::TemperatureOnly => classify_temperature(prediction.temperature_c),
            ClassifyPolicy::MultiSignal => classify_multi_signal(
                prediction.temperature_c,
                prediction.vibration_mm_s,
                prediction.shaft_displacement_mm,
            ),
        }
    }
}

/// Temperature-only classification.
///
/// Total over all finite inputs; evaluation order is Normal, then
/// Warning, else Alarm.
pub fn classify_temperature(temperature_c: f32) -> StatusTier {
    if temperature_c < TEMP_NORMAL_MAX_C {
        StatusTier::Normal
    } else if temperature_c <= TEMP_WARNING_MAX_C {
        StatusTier::Warning
    } else {
        StatusTier::Alarm
    }
}

/// Multi-signal classification.
///
/// Normal requires every signal inside its Normal band; Warning fires
/// when any signal is inside its Warning band; everything else is Alarm.
/// Evaluation order is Normal, then Warning, else Alarm.
pub fn classify_multi_signal(
    temperature_c: f32,
    vibration_mm_s: f32,
    shaft_displacement_mm: f32,
) -> StatusTier {
    if temperature_c < TEMP_NORMAL_MAX_C
        && vibration_mm_s <= VIBRATION_NORMAL_MAX
        && shaft_displacement_mm <= SHAFT_NORMAL_MAX
    {
        StatusTier::Normal
    } else if (TEMP_NORMAL_MAX_C..=TEMP_WARNING_MAX_C).contains(&temperature_c)
        || (vibration_mm_s > VIBRATION_NORMAL_MAX && vibration_mm_s <= VIBRATION_WARNING_MAX)
        || (shaft_displacement_mm > SHAFT_NORMAL_MAX
            && shaft_displacement_mm <= SHAFT_WARNING_MAX)
    {
        StatusTier::Warning
    } else {
        StatusTier::Alarm
    }
}
