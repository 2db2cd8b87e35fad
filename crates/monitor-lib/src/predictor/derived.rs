//! Synthetic condition metrics derived from reactive power
//!
//! Closed-form formulas, entirely independent of the scoring function.
//! Both depend only on the magnitude of the reactive power reading.

/// Round half away from zero to two decimals
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Estimated bearing vibration in mm/s
pub fn vibration_mm_s(reactive_power_mvar: f32) -> f32 {
    round2(1.2 + 0.005 * reactive_power_mvar.abs())
}

/// Estimated shaft displacement in mm
pub fn shaft_displacement_mm(reactive_power_mvar: f32) -> f32 {
    round2(20.0 + 0.01 * reactive_power_mvar.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibration_formula() {
        assert_eq!(vibration_mm_s(-20.0), 1.3);
        assert_eq!(vibration_mm_s(0.0), 1.2);
        assert_eq!(vibration_mm_s(-120.0), 1.8);
    }

    #[test]
    fn test_shaft_displacement_formula() {
        assert_eq!(shaft_displacement_mm(-20.0), 20.2);
        assert_eq!(shaft_displacement_mm(0.0), 20.0);
        assert_eq!(shaft_displacement_mm(40.0), 20.4);
    }

    #[test]
    fn test_metrics_depend_only_on_magnitude() {
        for mvar in [0.0f32, 3.5, 20.0, 40.0, 120.0] {
            assert_eq!(vibration_mm_s(mvar), vibration_mm_s(-mvar));
            assert_eq!(shaft_displacement_mm(mvar), shaft_displacement_mm(-mvar));
        }
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 1.2 + 0.005 * 34.2 = 1.371
        assert_eq!(vibration_mm_s(34.2), 1.37);
        // 20 + 0.01 * 33.3 = 20.333
        assert_eq!(shaft_displacement_mm(33.3), 20.33);
    }
}
