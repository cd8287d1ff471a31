//! Riegel power-law model
//!
//! `t2 = t1 · (d2 / d1)^k`. Times and distances may be in any unit as long as
//! both distances (and both times) share one. Every function returns `0.0` when
//! any argument is not positive.

use crate::catalogue::FormulaDescriptor;
use serde::{Deserialize, Serialize};

/// Exponent of the general running model
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Riegel's fatigue exponents per activity and population (Riegel, 1981)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiegelActivity {
    RunningMen,
    RunningMen40,
    RunningMen50,
    RunningMen60,
    RunningMen70,
    RunningWomen,
    SwimmingMen,
    SwimmingWomen,
    NordicSkiingMen,
    WalkingMen,
    RollerSkatingMen,
    CyclingMen,
    SpeedSkatingMen,
}

impl RiegelActivity {
    pub const ALL: &'static [RiegelActivity] = &[
        RiegelActivity::RunningMen,
        RiegelActivity::RunningMen40,
        RiegelActivity::RunningMen50,
        RiegelActivity::RunningMen60,
        RiegelActivity::RunningMen70,
        RiegelActivity::RunningWomen,
        RiegelActivity::SwimmingMen,
        RiegelActivity::SwimmingWomen,
        RiegelActivity::NordicSkiingMen,
        RiegelActivity::WalkingMen,
        RiegelActivity::RollerSkatingMen,
        RiegelActivity::CyclingMen,
        RiegelActivity::SpeedSkatingMen,
    ];

    /// Fatigue exponent `k`
    pub fn exponent(&self) -> f64 {
        match self {
            RiegelActivity::RunningMen => 1.07732,
            RiegelActivity::RunningMen40 => 1.05352,
            RiegelActivity::RunningMen50 => 1.05374,
            RiegelActivity::RunningMen60 => 1.05603,
            RiegelActivity::RunningMen70 => 1.06370,
            RiegelActivity::RunningWomen => 1.08283,
            RiegelActivity::SwimmingMen => 1.02977,
            RiegelActivity::SwimmingWomen => 1.03256,
            RiegelActivity::NordicSkiingMen => 1.01421,
            RiegelActivity::WalkingMen => 1.05379,
            RiegelActivity::RollerSkatingMen => 1.13709,
            RiegelActivity::CyclingMen => 1.04834,
            RiegelActivity::SpeedSkatingMen => 1.06017,
        }
    }

    pub fn predict_time(&self, t1: f64, d1: f64, d2: f64) -> f64 {
        predict_time_with_exponent(t1, d1, d2, self.exponent())
    }

    pub fn predict_distance(&self, t1: f64, d1: f64, t2: f64) -> f64 {
        predict_distance_with_exponent(t1, d1, t2, self.exponent())
    }
}

/// Time to cover `d2` given a time `t1` over `d1`
///
/// # Examples
///
/// ```rust
/// use exphys::running::riegel::predict_time;
///
/// let ten_k = predict_time(1200.0, 5000.0, 10000.0);
/// assert!((ten_k - 2501.918).abs() < 1e-3);
/// assert_eq!(predict_time(0.0, 10.0, 20.0), 0.0);
/// ```
pub fn predict_time(t1: f64, d1: f64, d2: f64) -> f64 {
    predict_time_with_exponent(t1, d1, d2, RIEGEL_EXPONENT)
}

/// Distance covered in `t2` given a time `t1` over `d1`
///
/// Inverse of [`predict_time`]: `d2 = d1 · t2^(50/53) / t1^(50/53)`.
pub fn predict_distance(t1: f64, d1: f64, t2: f64) -> f64 {
    if t1 <= 0.0 || d1 <= 0.0 || t2 <= 0.0 {
        return 0.0;
    }
    let exponent = 50.0 / 53.0;
    d1 * t2.powf(exponent) / t1.powf(exponent)
}

pub fn predict_time_with_exponent(t1: f64, d1: f64, d2: f64, exponent: f64) -> f64 {
    if t1 <= 0.0 || d1 <= 0.0 || d2 <= 0.0 {
        return 0.0;
    }
    t1 * (d2 / d1).powf(exponent)
}

pub fn predict_distance_with_exponent(t1: f64, d1: f64, t2: f64, exponent: f64) -> f64 {
    if t1 <= 0.0 || d1 <= 0.0 || t2 <= 0.0 {
        return 0.0;
    }
    d1 * (t2 / t1).powf(1.0 / exponent)
}

pub(crate) static RIEGEL_FORMULAS: &[FormulaDescriptor] = &[
    formula!("riegel", "predict_time", RunningModel, Ternary(predict_time),
        ("t1": Seconds / Any, "d1": Meters / Any, "d2": Meters / Any) -> Seconds,
        "Riegel PS (1981). American Scientist 69:285-290"),
    formula!("riegel", "predict_distance", RunningModel, Ternary(predict_distance),
        ("t1": Seconds / Any, "d1": Meters / Any, "t2": Seconds / Any) -> Meters,
        "Riegel PS (1981). American Scientist 69:285-290"),
    formula!("riegel", "predict_time_with_exponent", RunningModel,
        Quaternary(predict_time_with_exponent),
        ("t1": Seconds / Any, "d1": Meters / Any, "d2": Meters / Any,
         "exponent": Dimensionless / Positive) -> Seconds,
        "Riegel PS (1981). American Scientist 69:285-290"),
    formula!("riegel", "predict_distance_with_exponent", RunningModel,
        Quaternary(predict_distance_with_exponent),
        ("t1": Seconds / Any, "d1": Meters / Any, "t2": Seconds / Any,
         "exponent": Dimensionless / Positive) -> Meters,
        "Riegel PS (1981). American Scientist 69:285-290"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_time() {
        assert!((predict_time(1200.0, 5000.0, 10000.0) - 2501.917826).abs() < 1e-5);
        assert_eq!(predict_time(1200.0, 5000.0, 5000.0), 1200.0);
    }

    #[test]
    fn test_predict_distance() {
        assert!((predict_distance(1200.0, 5000.0, 2500.0) - 9992.768311).abs() < 1e-5);
    }

    #[test]
    fn test_distance_inverts_time() {
        let t2 = predict_time(1200.0, 5000.0, 21097.5);
        assert!((predict_distance(1200.0, 5000.0, t2) - 21097.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sentinel() {
        assert_eq!(predict_time(0.0, 10.0, 20.0), 0.0);
        assert_eq!(predict_time(100.0, -1.0, 20.0), 0.0);
        assert_eq!(predict_time(100.0, 10.0, 0.0), 0.0);
        assert_eq!(predict_distance(-5.0, 10.0, 20.0), 0.0);
        assert_eq!(predict_distance(100.0, 0.0, 20.0), 0.0);
        assert_eq!(predict_distance(100.0, 10.0, 0.0), 0.0);
        assert_eq!(RiegelActivity::SwimmingMen.predict_time(0.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn test_activity_exponents() {
        let running = RiegelActivity::RunningMen;
        assert!((running.predict_time(1200.0, 5000.0, 10000.0) - 2532.135144).abs() < 1e-5);
        assert!((running.predict_distance(1200.0, 5000.0, 2400.0) - 9514.694960).abs() < 1e-5);
        assert!(RiegelActivity::ALL.iter().all(|a| a.exponent() > 1.0));
    }
}
