//! Heat adjustment of finishing times

use crate::catalogue::FormulaDescriptor;

const NEUTRAL_FAHRENHEIT: f64 = 60.0;
const HOTTEST_FAHRENHEIT: f64 = 100.0;
/// Slowdown per degree above neutral: 0.75% per 5 °F
const SLOWDOWN_PER_DEGREE: f64 = 0.0015;

/// Multiplier on finishing time at an ambient temperature
///
/// 1.0 at or below 60 °F, rising linearly to 1.06 at 100 °F and held there.
pub fn temperature_factor(fahrenheit: f64) -> f64 {
    let excess = fahrenheit.clamp(NEUTRAL_FAHRENHEIT, HOTTEST_FAHRENHEIT) - NEUTRAL_FAHRENHEIT;
    1.0 + SLOWDOWN_PER_DEGREE * excess
}

/// Expected finishing time in the heat for a performance of `seconds` run in
/// neutral conditions
pub fn temperature(seconds: f64, fahrenheit: f64) -> f64 {
    seconds * temperature_factor(fahrenheit)
}

pub(crate) static ADJUSTMENT_FORMULAS: &[FormulaDescriptor] = &[
    formula!("adjustment", "temperature", RunningModel, Binary(temperature),
        ("seconds": Seconds / NonNegative, "fahrenheit": Fahrenheit / Any) -> Seconds,
        "Ely MR, et al. (2007). Med Sci Sports Exerc 39:487-493"),
    formula!("adjustment", "temperatureFactor", RunningModel, Unary(temperature_factor),
        ("fahrenheit": Fahrenheit / Any) -> Dimensionless,
        "Ely MR, et al. (2007). Med Sci Sports Exerc 39:487-493"),
];
