//! Purdy point scoring
//!
//! The Portuguese scoring tables of 1936 list straight-line velocities from
//! 40 m to 100 000 m; those performances are worth 950 points. Purdy adds a
//! start and track-curve allowance to the table time and scores a performance
//! against it with `P = A · (T950 / Tp − B)`, where `A` and `B` slide with
//! velocity. World records of 1970 score about 1035 points.
//!
//! Distances are in metres, times in seconds.

use crate::catalogue::FormulaDescriptor;

/// Portuguese table: distance (m) and velocity (m/s) of a 950-point performance
static PORTUGUESE_TABLE: &[(f64, f64)] = &[
    (40.0, 11.000),
    (50.0, 10.9960),
    (60.0, 10.9830),
    (70.0, 10.9620),
    (80.0, 10.934),
    (90.0, 10.9000),
    (100.0, 10.8600),
    (110.0, 10.8150),
    (120.0, 10.765),
    (130.0, 10.7110),
    (140.0, 10.6540),
    (150.0, 10.5940),
    (160.0, 10.531),
    (170.0, 10.4650),
    (180.0, 10.3960),
    (200.0, 10.2500),
    (220.0, 10.096),
    (240.0, 9.9350),
    (260.0, 9.7710),
    (280.0, 9.6100),
    (300.0, 9.455),
    (320.0, 9.3070),
    (340.0, 9.1660),
    (360.0, 9.0320),
    (380.0, 8.905),
    (400.0, 8.7850),
    (450.0, 8.5130),
    (500.0, 8.2790),
    (550.0, 8.083),
    (600.0, 7.9210),
    (700.0, 7.6690),
    (800.0, 7.4960),
    (900.0, 7.32000),
    (1000.0, 7.18933),
    (1200.0, 6.98066),
    (1500.0, 6.75319),
    (2000.0, 6.50015),
    (2500.0, 6.33424),
    (3000.0, 6.21913),
    (3500.0, 6.13510),
    (4000.0, 6.07040),
    (4500.0, 6.01822),
    (5000.0, 5.97432),
    (6000.0, 5.90181),
    (7000.0, 5.84156),
    (8000.0, 5.78889),
    (9000.0, 5.74211),
    (10000.0, 5.70050),
    (12000.0, 5.62944),
    (15000.0, 5.54300),
    (20000.0, 5.43785),
    (25000.0, 5.35842),
    (30000.0, 5.29298),
    (35000.0, 5.23538),
    (40000.0, 5.18263),
    (50000.0, 5.08615),
    (60000.0, 4.99762),
    (80000.0, 4.83617),
    (100000.0, 4.68988),
];

const TRACK_LAP: f64 = 400.0;

/// Fraction of a race on a 400 m track run around the curves
///
/// Races under 110 m are run on the straight. Each whole lap has 200 m of curve;
/// the partial lap is split by where the race starts relative to the bends.
pub fn lap_fraction(distance: f64) -> f64 {
    if distance < 110.0 {
        return 0.0;
    }

    let laps = (distance / TRACK_LAP).floor();
    let meters = (distance - laps * TRACK_LAP).floor();
    let partial_lap = if meters <= 50.0 {
        0.0
    } else if meters <= 150.0 {
        meters - 50.0
    } else if meters <= 250.0 {
        100.0
    } else if meters <= 350.0 {
        100.0 + (meters - 250.0)
    } else {
        200.0
    };

    (laps * 200.0 + partial_lap) / distance
}

/// Purdy's sliding `A` for a velocity in m/s
fn scale_factor(velocity: f64) -> f64 {
    let k = 0.0654 - 0.00258 * velocity;
    85.0 / k
}

/// 950-point time over `distance`, interpolated from the table
///
/// Returns `None` outside the 40 m to 100 000 m range of the table.
pub fn table_time(distance: f64) -> Option<f64> {
    if !(PORTUGUESE_TABLE[0].0..=100_000.0).contains(&distance) {
        return None;
    }

    let upper = PORTUGUESE_TABLE
        .iter()
        .position(|&(d, _)| d >= distance)?
        .max(1);
    let (d1, v1) = PORTUGUESE_TABLE[upper - 1];
    let (d3, v3) = PORTUGUESE_TABLE[upper];
    let (t1, t3) = (d1 / v1, d3 / v3);

    Some(t1 + (t3 - t1) * (distance - d1) / (d3 - d1))
}

/// Purdy points for running `distance` metres in `seconds`
///
/// Returns `0.0` when the distance is outside the table.
pub fn purdy_points(distance: f64, seconds: f64) -> f64 {
    let Some(time) = table_time(distance) else {
        return 0.0;
    };

    let velocity = distance / time;
    let t950 = time + 0.20 + 0.08 * velocity + 0.0065 * lap_fraction(distance) * velocity * velocity;

    let a = scale_factor(velocity);
    let b = 1.0 - 950.0 / a;
    a * (t950 / seconds - b)
}

/// World-record velocity curve in m/s, least-squares fit to 1970 records
fn world_record_velocity(distance: f64) -> f64 {
    -11.15895 * (-3.796158e-2 * distance).exp()
        + 4.304605 * (-1.646772e-3 * distance).exp()
        + 0.5234627 * (-4.107670e-4 * distance).exp()
        + 4.031560 * (-7.068099e-6 * distance).exp()
        + 2.316157 * (-5.220990e-9 * distance).exp()
}

/// Purdy points scored against the world-record curve instead of the table
///
/// Calibrated to 1035 points for a world record, so it does not agree with
/// [`purdy_points`].
pub fn purdy_ls(distance: f64, seconds: f64) -> f64 {
    let velocity = world_record_velocity(distance);
    let record_time = distance / velocity;

    let a = scale_factor(velocity);
    let b = 1.0 - 1035.0 / a;
    a * (record_time / seconds - b)
}

pub(crate) static PURDY_FORMULAS: &[FormulaDescriptor] = &[
    formula!("purdy", "points", RunningModel, Binary(purdy_points),
        ("distance": Meters / Positive, "seconds": Seconds / Positive) -> Points,
        "Purdy JG (1974). Research Quarterly 45:224-238"),
    formula!("purdy", "pointsLS", RunningModel, Binary(purdy_ls),
        ("distance": Meters / Positive, "seconds": Seconds / Positive) -> Points,
        "Purdy JG, Gardner JB (1970). Computerized Running Training Programs"),
    formula!("purdy", "lap_fraction", RunningModel, Unary(lap_fraction),
        ("distance": Meters / NonNegative) -> Fraction,
        "Purdy JG (1974). Research Quarterly 45:224-238"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(PORTUGUESE_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(PORTUGUESE_TABLE.last().map(|e| e.0), Some(100_000.0));
    }

    #[test]
    fn test_lap_fraction() {
        assert_eq!(lap_fraction(100.0), 0.0);
        assert_eq!(lap_fraction(200.0), 0.5);
        assert_eq!(lap_fraction(400.0), 0.5);
        assert_eq!(lap_fraction(1500.0), 0.5);
        assert!((lap_fraction(150.0) - 100.0 / 150.0).abs() < 1e-12);
        assert!((lap_fraction(300.0) - 150.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_purdy_points() {
        assert!((purdy_points(1500.0, 240.0) - 824.547497).abs() < 1e-5);
        assert!((purdy_points(5000.0, 900.0) - 832.307391).abs() < 1e-5);
        assert!((purdy_points(10000.0, 1800.0) - 908.074922).abs() < 1e-5);
        assert!((purdy_points(40.0, 5.0) - 819.750995).abs() < 1e-5);
    }

    #[test]
    fn test_interpolated_distance() {
        assert!((purdy_points(1609.34, 240.0) - 962.561811).abs() < 1e-5);
    }

    #[test]
    fn test_outside_table_scores_zero() {
        assert_eq!(purdy_points(39.0, 5.0), 0.0);
        assert_eq!(purdy_points(100_001.0, 30000.0), 0.0);
        assert_eq!(table_time(20.0), None);
    }

    #[test]
    fn test_faster_time_scores_more() {
        assert!(purdy_points(5000.0, 850.0) > purdy_points(5000.0, 900.0));
    }

    #[test]
    fn test_least_squares_variant() {
        assert!((purdy_ls(1500.0, 240.0) - 854.186767).abs() < 1e-5);
        assert!((purdy_ls(5000.0, 900.0) - 836.724857).abs() < 1e-5);
        assert_ne!(purdy_ls(1500.0, 240.0), purdy_points(1500.0, 240.0));
    }
}
