//! Daniels and Gilbert running equations
//!
//! The two regressions behind the VDOT tables relate oxygen cost to running
//! velocity; the third gives the fraction of VO2max a runner can hold for a
//! race of a given duration. Velocities are in metres per minute.

use crate::catalogue::FormulaDescriptor;

/// Running velocity (m/min) at an oxygen cost in mL/kg/min
pub fn velocity(vo2: f64) -> f64 {
    29.54 + 5.000663 * vo2 - 0.007546 * vo2 * vo2
}

/// Oxygen cost (mL/kg/min) of running at `velocity` m/min
pub fn vo2(velocity: f64) -> f64 {
    -4.60 + 0.182258 * velocity + 0.000104 * velocity * velocity
}

/// Fraction of VO2max sustainable for a race lasting `time` minutes
///
/// Above 1.0 for very short efforts; approaches 0.8 for long ones.
pub fn vo2_percentage(time: f64) -> f64 {
    0.8 + 0.1894393 * (-0.012778 * time).exp() + 0.2989558 * (-0.1932605 * time).exp()
}

pub(crate) static DANIELS_FORMULAS: &[FormulaDescriptor] = &[
    formula!("jackdaniels", "velocity", RunningModel, Unary(velocity),
        ("vO2": MlPerKgPerMin / NonNegative) -> MetersPerMinute,
        "Daniels J, Gilbert J (1979). Oxygen Power: Performance Tables for Distance Runners"),
    formula!("jackdaniels", "vO2", RunningModel, Unary(vo2),
        ("velocity": MetersPerMinute / NonNegative) -> MlPerKgPerMin,
        "Daniels J, Gilbert J (1979). Oxygen Power: Performance Tables for Distance Runners"),
    formula!("jackdaniels", "vO2Percentage", RunningModel, Unary(vo2_percentage),
        ("time": Minutes / NonNegative) -> Fraction,
        "Daniels J, Gilbert J (1979). Oxygen Power: Performance Tables for Distance Runners"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_reference_value() {
        assert!((velocity(50.0) - 260.70815).abs() < 1e-9);
    }

    #[test]
    fn test_vo2_reference_value() {
        assert!((vo2(300.0) - 59.4374).abs() < 1e-9);
    }

    #[test]
    fn test_vo2_percentage() {
        assert!((vo2_percentage(30.0) - 0.930025336).abs() < 1e-9);
        assert!((vo2_percentage(150.0) - 0.827864923).abs() < 1e-9);
        assert!((vo2_percentage(0.0) - 1.2883951).abs() < 1e-12);
    }

    #[test]
    fn test_sustainable_fraction_falls_with_duration() {
        let fractions: Vec<f64> = [5.0, 15.0, 60.0, 180.0].iter().map(|&t| vo2_percentage(t)).collect();
        assert!(fractions.windows(2).all(|w| w[0] > w[1]));
    }
}
