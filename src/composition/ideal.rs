//! Ideal body weight, kg
//!
//! Heights are in metres. The classic clinical equations add a fixed mass per
//! inch of height over five feet; below five feet the same slope is subtracted.

use crate::catalogue::FormulaDescriptor;
use crate::units::INCHES_PER_METER;

const FIVE_FEET_IN_INCHES: f64 = 60.0;

/// Inches of height above five feet, negative below
pub fn inches_over_five_feet(height: f64) -> f64 {
    height * INCHES_PER_METER - FIVE_FEET_IN_INCHES
}

fn per_inch(base: f64, slope: f64, height: f64) -> f64 {
    base + slope * inches_over_five_feet(height)
}

/// Hamwi (1964), men
pub fn hamwi_male(height: f64) -> f64 {
    per_inch(48.0, 2.7, height)
}

/// Hamwi (1964), women
pub fn hamwi_female(height: f64) -> f64 {
    per_inch(45.5, 2.2, height)
}

/// Devine (1974), men
pub fn devine_male(height: f64) -> f64 {
    per_inch(50.0, 2.3, height)
}

/// Devine (1974), women
pub fn devine_female(height: f64) -> f64 {
    per_inch(45.5, 2.3, height)
}

/// Robinson et al. (1983), men
pub fn robinson_male(height: f64) -> f64 {
    per_inch(52.0, 1.9, height)
}

/// Robinson et al. (1983), women
pub fn robinson_female(height: f64) -> f64 {
    per_inch(49.0, 1.7, height)
}

/// Miller et al. (1983), men
pub fn miller_male(height: f64) -> f64 {
    per_inch(56.2, 1.41, height)
}

/// Miller et al. (1983), women
pub fn miller_female(height: f64) -> f64 {
    per_inch(53.1, 1.36, height)
}

/// Lemmens et al. (2005), weight at a BMI of 22
pub fn lemmens(height: f64) -> f64 {
    22.0 * height * height
}

macro_rules! ideal_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("ideal", $name, Composition, Unary($func),
            ("height": Meters / Positive) -> Kilograms,
            $citation)
    };
}

pub(crate) static IDEAL_FORMULAS: &[FormulaDescriptor] = &[
    ideal_formula!("hamwiMale", hamwi_male, "Hamwi GJ (1964). Diabetes Mellitus: Diagnosis and Treatment"),
    ideal_formula!("hamwiFemale", hamwi_female, "Hamwi GJ (1964). Diabetes Mellitus: Diagnosis and Treatment"),
    ideal_formula!("devineMale", devine_male, "Devine BJ (1974). Drug Intell Clin Pharm 8:650-655"),
    ideal_formula!("devineFemale", devine_female, "Devine BJ (1974). Drug Intell Clin Pharm 8:650-655"),
    ideal_formula!("robinsonMale", robinson_male, "Robinson JD, et al. (1983). Am J Hosp Pharm 40:1016-1019"),
    ideal_formula!("robinsonFemale", robinson_female, "Robinson JD, et al. (1983). Am J Hosp Pharm 40:1016-1019"),
    ideal_formula!("millerMale", miller_male, "Miller DR, et al. (1983). Am J Hosp Pharm 40:1622"),
    ideal_formula!("millerFemale", miller_female, "Miller DR, et al. (1983). Am J Hosp Pharm 40:1622"),
    ideal_formula!("lemmens", lemmens, "Lemmens HJ, Brodsky JB, Bernstein DP (2005). Obes Surg 15:1082-1083"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_inch_equations() {
        assert!((inches_over_five_feet(1.80) - 10.86618).abs() < 1e-9);
        assert!((hamwi_male(1.80) - 77.338686).abs() < 1e-6);
        assert!((devine_male(1.80) - 74.992214).abs() < 1e-6);
        assert!((devine_female(1.65) - 56.9095295).abs() < 1e-6);
        assert!((robinson_male(1.80) - 72.645742).abs() < 1e-6);
        assert!((miller_male(1.80) - 71.5213138).abs() < 1e-6);
    }

    #[test]
    fn test_below_five_feet_subtracts() {
        let height = 55.0 / INCHES_PER_METER;
        assert!((devine_female(height) - (45.5 - 2.3 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_lemmens() {
        assert!((lemmens(1.8) - 71.28).abs() < 1e-9);
    }
}
