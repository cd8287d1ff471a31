//! Muscular power from jump and stair-climb tests, watts
//!
//! Body mass in kilograms throughout. Jump heights are in centimetres except for
//! the Lewis formula, which works in metres.

use crate::catalogue::FormulaDescriptor;

const GRAVITY: f64 = 9.81;

/// Lewis formula for vertical-jump power
///
/// Underestimates force-plate mean and peak power considerably; useful for
/// ranking athletes with similar jump heights.
///
/// # Arguments
/// * `weight` - Body mass in kg
/// * `jump_height` - Jump height in **metres**
pub fn lewis(weight: f64, jump_height: f64) -> f64 {
    4.9f64.sqrt() * weight * jump_height.sqrt() * GRAVITY
}

/// Peak power (Harman et al., 1991)
pub fn peak_power_harman(weight: f64, jump_height: f64) -> f64 {
    61.9 * jump_height + 36.0 * weight + 1822.0
}

/// Mean power (Harman et al., 1991)
pub fn mean_power_harman(weight: f64, jump_height: f64) -> f64 {
    21.2 * jump_height + 23.0 * weight - 1393.0
}

/// Peak power (Johnson & Bahamonde, 1996)
///
/// # Arguments
/// * `weight` - Body mass in kg
/// * `height` - Body height in **metres**
/// * `jump_height` - Jump height in cm
pub fn peak_power_jb(weight: f64, height: f64, jump_height: f64) -> f64 {
    let height_cm = height * 100.0;
    78.6 * jump_height + 60.3 * weight - 15.3 * height_cm - 1308.0
}

/// Mean power (Johnson & Bahamonde, 1996); arguments as [`peak_power_jb`]
pub fn mean_power_jb(weight: f64, height: f64, jump_height: f64) -> f64 {
    let height_cm = height * 100.0;
    43.8 * jump_height + 32.7 * weight - 16.8 * height_cm + 431.0
}

/// Peak power (Sayers et al., 1999)
pub fn peak_power_sayer(weight: f64, jump_height: f64) -> f64 {
    60.7 * jump_height + 45.3 * weight - 2055.0
}

/// Mean mechanical power of a repeated vertical jump test (Bosco et al., 1983)
///
/// The result is mass-specific; multiply by body mass for watts.
///
/// # Arguments
/// * `duration` - Test duration, seconds
/// * `jump_count` - Jumps completed in that time
/// * `flight_time` - Summed flight time of all jumps, seconds
pub fn bosco(duration: f64, jump_count: f64, flight_time: f64) -> f64 {
    flight_time * duration * GRAVITY.powi(2) / (4.0 * jump_count * (duration - flight_time))
}

/// Margaria-Kalamen stair test
///
/// # Arguments
/// * `weight` - Body mass in kg
/// * `vertical_height` - Vertical rise between the timed steps, metres
/// * `time` - Seconds taken to cover the rise
pub fn power_mk(weight: f64, vertical_height: f64, time: f64) -> f64 {
    weight * (vertical_height / time) * GRAVITY
}

pub(crate) static POWER_FORMULAS: &[FormulaDescriptor] = &[
    formula!("power", "lewis", StrengthPower, Binary(lewis),
        ("weight": Kilograms / Positive, "jump_height": Meters / NonNegative) -> Watts,
        "Fox EL, Mathews DK (1974). Interval Training"),
    formula!("power", "peakPowerHarman", StrengthPower, Binary(peak_power_harman),
        ("weight": Kilograms / Positive, "jump_height": Centimeters / NonNegative) -> Watts,
        "Harman EA, et al. (1991). J Appl Sport Sci Res 5:116-120"),
    formula!("power", "meanPowerHarman", StrengthPower, Binary(mean_power_harman),
        ("weight": Kilograms / Positive, "jump_height": Centimeters / NonNegative) -> Watts,
        "Harman EA, et al. (1991). J Appl Sport Sci Res 5:116-120"),
    formula!("power", "peakPowerJB", StrengthPower, Ternary(peak_power_jb),
        ("weight": Kilograms / Positive, "height": Meters / Positive,
         "jump_height": Centimeters / NonNegative) -> Watts,
        "Johnson DL, Bahamonde R (1996). J Strength Cond Res 10:161-166"),
    formula!("power", "meanPowerJB", StrengthPower, Ternary(mean_power_jb),
        ("weight": Kilograms / Positive, "height": Meters / Positive,
         "jump_height": Centimeters / NonNegative) -> Watts,
        "Johnson DL, Bahamonde R (1996). J Strength Cond Res 10:161-166"),
    formula!("power", "peakPowerSayer", StrengthPower, Binary(peak_power_sayer),
        ("weight": Kilograms / Positive, "jump_height": Centimeters / NonNegative) -> Watts,
        "Sayers SP, et al. (1999). Med Sci Sports Exerc 31:572-577"),
    formula!("power", "bosco", StrengthPower, Ternary(bosco),
        ("duration": Seconds / Positive, "jump_count": Repetitions / Positive,
         "flight_time": Seconds / NonNegative) -> WattsPerKilogram,
        "Bosco C, Luhtanen P, Komi PV (1983). Eur J Appl Physiol 50:273-282"),
    formula!("power", "powerMK", StrengthPower, Ternary(power_mk),
        ("weight": Kilograms / Positive, "vertical_height": Meters / Positive,
         "time": Seconds / Positive) -> Watts,
        "Margaria R, Aghemo P, Rovelli E (1966). J Appl Physiol 21:1662-1664"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_power() {
        assert!((lewis(80.0, 0.5) - 1228.406304).abs() < 1e-5);
        assert!((peak_power_harman(80.0, 50.0) - 7797.0).abs() < 1e-9);
        assert!((mean_power_harman(80.0, 50.0) - 1507.0).abs() < 1e-9);
        assert!((peak_power_sayer(80.0, 50.0) - 4604.0).abs() < 1e-9);
    }

    #[test]
    fn test_johnson_bahamonde_uses_height_in_metres() {
        assert!((peak_power_jb(80.0, 1.8, 50.0) - 4692.0).abs() < 1e-9);
        assert!((mean_power_jb(80.0, 1.8, 50.0) - 2213.0).abs() < 1e-9);
    }

    #[test]
    fn test_bosco_repeated_jumps() {
        // 60 s test, 50 jumps, 30 s total in the air
        let expected = 30.0 * 60.0 * 9.81 * 9.81 / (4.0 * 50.0 * 30.0);
        assert!((bosco(60.0, 50.0, 30.0) - expected).abs() < 1e-9);
        assert!((bosco(60.0, 50.0, 30.0) - 28.87083).abs() < 1e-5);
        assert!(bosco(60.0, 50.0, 35.0) > bosco(60.0, 50.0, 30.0));
    }

    #[test]
    fn test_margaria_kalamen() {
        assert!((power_mk(80.0, 1.05, 0.5) - 1648.08).abs() < 1e-9);
    }

    #[test]
    fn test_power_increases_with_jump_height() {
        for f in [peak_power_harman, mean_power_harman, peak_power_sayer, lewis] {
            assert!(f(75.0, 0.6) > f(75.0, 0.4));
        }
    }
}
