//! Cameron running model
//!
//! Fits well for post-1945 records from 800 m to 10 000 m, and for the marathon
//! from 1964 onward. Distances are in miles, times in seconds.

use crate::catalogue::FormulaDescriptor;
use crate::units::METERS_PER_MILE;

fn pace_curve(miles: f64) -> f64 {
    13.49681 - 0.048865 * miles + 2.438936 / miles.powf(0.7905)
}

/// Time in seconds to cover `d2` miles given `t1` seconds over `d1` miles
///
/// Returns `0.0` when any argument is not positive.
pub fn cameron_predict_time(t1: f64, d1: f64, d2: f64) -> f64 {
    if t1 <= 0.0 || d1 <= 0.0 || d2 <= 0.0 {
        return 0.0;
    }
    (t1 / d1) * (pace_curve(d1) / pace_curve(d2)) * d2
}

/// [`cameron_predict_time`] with distances in metres
pub fn cameron_predict_time_meters(t1: f64, d1: f64, d2: f64) -> f64 {
    cameron_predict_time(t1, d1 / METERS_PER_MILE, d2 / METERS_PER_MILE)
}

pub(crate) static CAMERON_FORMULAS: &[FormulaDescriptor] = &[
    formula!("cameron", "predictTime", RunningModel, Ternary(cameron_predict_time),
        ("t1": Seconds / Any, "d1": Miles / Any, "d2": Miles / Any) -> Seconds,
        "Cameron D (1998). A nonlinear model for predicting race times"),
    formula!("cameron", "predictTimeMeters", RunningModel, Ternary(cameron_predict_time_meters),
        ("t1": Seconds / Any, "d1": Meters / Any, "d2": Meters / Any) -> Seconds,
        "Cameron D (1998). A nonlinear model for predicting race times"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_time_miles() {
        assert!((cameron_predict_time(300.0, 1.0, 26.2188) - 10077.426579).abs() < 1e-5);
        assert_eq!(cameron_predict_time(600.0, 2.0, 2.0), 600.0);
    }

    #[test]
    fn test_predict_time_meters() {
        let ten_k = cameron_predict_time_meters(1200.0, 5000.0, 10000.0);
        assert!((ten_k - 2499.661598).abs() < 1e-5);
    }

    #[test]
    fn test_zero_sentinel() {
        assert_eq!(cameron_predict_time(0.0, 1.0, 2.0), 0.0);
        assert_eq!(cameron_predict_time(300.0, -1.0, 2.0), 0.0);
        assert_eq!(cameron_predict_time_meters(300.0, 1609.34, 0.0), 0.0);
    }
}
