//! Vickers and Vertosick marathon prediction for recreational runners
//!
//! Riegel's exponent overestimates how well non-elite runners hold their pace
//! over the marathon. Vickers and Vertosick (2016) correct a Riegel prediction
//! with the runner's weekly training mileage. Distances are in metres, times in
//! seconds and mileage in miles per week.

use crate::catalogue::FormulaDescriptor;
use crate::running::riegel;

/// Marathon distance in metres
pub const MARATHON_METERS: f64 = 42195.0;

/// Predicted time over `d2` from one race of `d1` metres in `t1` seconds
pub fn vv_time(d1: f64, t1: f64, mileage: f64, d2: f64) -> f64 {
    let riegel_velocity = d2 / riegel::predict_time(t1, d1, d2);
    let velocity = 0.16018617 + 0.83076202 * riegel_velocity + 0.06423826 * (mileage / 10.0);
    d2 / velocity
}

/// Predicted time over `distance` from two races
///
/// The fatigue exponent observed between the two races, adjusted for mileage,
/// replaces Riegel's 1.06.
pub fn vv_time2(d1: f64, t1: f64, d2: f64, t2: f64, mileage: f64, distance: f64) -> f64 {
    let observed = (t2 / t1).ln() / (d2 / d1).ln();
    let exponent = 1.4510756 - 0.23797948 * observed - 0.01410023 * (mileage / 10.0);
    t2 * (distance / d2).powf(exponent)
}

/// [`vv_time`] for the marathon
pub fn vv_marathon(d1: f64, t1: f64, mileage: f64) -> f64 {
    vv_time(d1, t1, mileage, MARATHON_METERS)
}

pub(crate) static VICKERS_FORMULAS: &[FormulaDescriptor] = &[
    formula!("vickers", "vv_time", RunningModel, Quaternary(vv_time),
        ("d1": Meters / Positive, "t1": Seconds / Positive,
         "mileage": MilesPerWeek / NonNegative, "d2": Meters / Positive) -> Seconds,
        "Vickers AJ, Vertosick EA (2016). BMC Sports Sci Med Rehabil 8:30"),
    formula!("vickers", "vv_time2", RunningModel, Senary(vv_time2),
        ("d1": Meters / Positive, "t1": Seconds / Positive,
         "d2": Meters / Positive, "t2": Seconds / Positive,
         "mileage": MilesPerWeek / NonNegative, "distance": Meters / Positive) -> Seconds,
        "Vickers AJ, Vertosick EA (2016). BMC Sports Sci Med Rehabil 8:30"),
];
