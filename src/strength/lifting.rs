//! Body-mass normalisation of lifting performances
//!
//! All masses are in kilograms. The Sinclair and Wilks families are fitted
//! separately for men and women; each sex keeps its own function.

use crate::catalogue::FormulaDescriptor;

/// O'Carroll formula: `lifted / (body_weight - 35)^(1/3)`
pub fn o_carroll(body_weight: f64, weight_lifted: f64) -> f64 {
    weight_lifted / (body_weight - 35.0).cbrt()
}

/// Siff (2000) expected weightlifting total for men at a body weight
pub fn siff_weight_lifting_male(body_weight: f64) -> f64 {
    512.245 - 146_230.0 * body_weight.powf(-1.605)
}

/// Siff (2000) expected weightlifting total for women at a body weight
pub fn siff_weight_lifting_female(body_weight: f64) -> f64 {
    257.314 - 943.063 * (-0.05142 * body_weight).exp()
}

/// Siff (2000) expected powerlifting total for men at a body weight
pub fn siff_power_lifting_male(body_weight: f64) -> f64 {
    1270.4 - 172_970.0 * body_weight.powf(-1.3925)
}

/// Sinclair fit for one sex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinclairCoefficients {
    /// Curvature of the log-quadratic fit
    pub a: f64,
    /// Body weight of the heaviest world-record holder, kg
    pub b: f64,
}

/// 2013-2016 Olympic cycle coefficients for men
pub const SINCLAIR_MALE: SinclairCoefficients = SinclairCoefficients {
    a: 0.794358141,
    b: 174.393,
};

/// 2013-2016 Olympic cycle coefficients for women
pub const SINCLAIR_FEMALE: SinclairCoefficients = SinclairCoefficients {
    a: 0.897260740,
    b: 148.026,
};

impl SinclairCoefficients {
    /// Scaling coefficient in (0, 1]
    ///
    /// A lifter at or above the reference body weight `b` gets exactly `1.0`;
    /// lighter lifters get `10^(-A·X²)` with `X = log10(body_weight / b)`.
    pub fn coefficient(&self, body_weight: f64) -> f64 {
        if body_weight >= self.b {
            return 1.0;
        }
        let x = (body_weight / self.b).log10();
        10f64.powf(-self.a * x * x)
    }

    /// Total scaled to the reference body weight
    pub fn total(&self, body_weight: f64, obtained_total: f64) -> f64 {
        obtained_total / self.coefficient(body_weight)
    }
}

/// Sinclair coefficient for men; `obtained_total` does not affect the result
pub fn sinclair_male(body_weight: f64, _obtained_total: f64) -> f64 {
    SINCLAIR_MALE.coefficient(body_weight)
}

/// Sinclair coefficient for women; `obtained_total` does not affect the result
pub fn sinclair_female(body_weight: f64, _obtained_total: f64) -> f64 {
    SINCLAIR_FEMALE.coefficient(body_weight)
}

/// Sinclair total for men
pub fn sinclair_total_male(body_weight: f64, obtained_total: f64) -> f64 {
    SINCLAIR_MALE.total(body_weight, obtained_total)
}

/// Sinclair total for women
pub fn sinclair_total_female(body_weight: f64, obtained_total: f64) -> f64 {
    SINCLAIR_FEMALE.total(body_weight, obtained_total)
}

const WILKS_MALE: [f64; 6] = [
    -216.0475144,
    16.2606339,
    -0.002388645,
    -0.00113732,
    7.01863e-06,
    -1.291e-08,
];

const WILKS_FEMALE: [f64; 6] = [
    594.31747775582,
    -27.23842536447,
    0.82112226871,
    -0.00930733913,
    4.731582e-05,
    -9.054e-08,
];

fn wilks(coefficients: &[f64; 6], body_weight: f64, weight_lifted: f64) -> f64 {
    // Horner evaluation of the fifth-degree polynomial
    let denominator = coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * body_weight + c);
    500.0 / denominator * weight_lifted
}

/// Wilks score for men
pub fn wilks_male(body_weight: f64, weight_lifted: f64) -> f64 {
    wilks(&WILKS_MALE, body_weight, weight_lifted)
}

/// Wilks score for women
pub fn wilks_female(body_weight: f64, weight_lifted: f64) -> f64 {
    wilks(&WILKS_FEMALE, body_weight, weight_lifted)
}

macro_rules! scaled_formula {
    ($name:literal, $func:ident -> $returns:ident, $citation:literal) => {
        formula!("lifting", $name, StrengthPower, Binary($func),
            ("body_weight": Kilograms / Positive, "weight_lifted": Kilograms / NonNegative)
                -> $returns,
            $citation)
    };
}

macro_rules! siff_formula {
    ($name:literal, $func:path) => {
        formula!("lifting", $name, StrengthPower, Unary($func),
            ("body_weight": Kilograms / Positive) -> Kilograms,
            "Siff MC (2000). Supertraining, 5th ed.")
    };
}

pub(crate) static LIFTING_FORMULAS: &[FormulaDescriptor] = &[
    scaled_formula!("oCarroll", o_carroll -> Dimensionless,
        "O'Carroll P (1994). Weightlifting handicap formula"),
    siff_formula!("siffWeightLiftingMale", siff_weight_lifting_male),
    siff_formula!("siffWeightLiftingFemale", siff_weight_lifting_female),
    siff_formula!("siffPowerLiftingMale", siff_power_lifting_male),
    formula!("lifting", "sinclairMale", StrengthPower, Binary(sinclair_male),
        ("body_weight": Kilograms / Positive, "obtained_total": Kilograms / NonNegative)
            -> Dimensionless,
        "Sinclair RG (1985). Can J Appl Sport Sci 10:94-98"),
    formula!("lifting", "sinclairFemale", StrengthPower, Binary(sinclair_female),
        ("body_weight": Kilograms / Positive, "obtained_total": Kilograms / NonNegative)
            -> Dimensionless,
        "Sinclair RG (1985). Can J Appl Sport Sci 10:94-98"),
    formula!("lifting", "sinclairTotalMale", StrengthPower, Binary(sinclair_total_male),
        ("body_weight": Kilograms / Positive, "obtained_total": Kilograms / NonNegative)
            -> Kilograms,
        "Sinclair RG (1985). Can J Appl Sport Sci 10:94-98"),
    formula!("lifting", "sinclairTotalFemale", StrengthPower, Binary(sinclair_total_female),
        ("body_weight": Kilograms / Positive, "obtained_total": Kilograms / NonNegative)
            -> Kilograms,
        "Sinclair RG (1985). Can J Appl Sport Sci 10:94-98"),
    scaled_formula!("wilksMale", wilks_male -> Points,
        "Vanderburgh PM, Batterham AM (1999). Med Sci Sports Exerc 31:1869-1875"),
    scaled_formula!("wilksFemale", wilks_female -> Points,
        "Vanderburgh PM, Batterham AM (1999). Med Sci Sports Exerc 31:1869-1875"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinclair_clamp_at_reference_weight() {
        assert_eq!(sinclair_male(174.393, 300.0), 1.0);
        assert_eq!(sinclair_male(175.0, 300.0), 1.0);
        assert_eq!(sinclair_female(148.026, 200.0), 1.0);
        assert_eq!(sinclair_female(160.0, 200.0), 1.0);
    }

    #[test]
    fn test_sinclair_below_reference_weight() {
        let coefficient = sinclair_male(100.0, 300.0);
        assert!(coefficient < 1.0);
        assert!((coefficient - 0.898793866).abs() < 1e-8);
        assert!((sinclair_total_male(100.0, 300.0) - 333.780649).abs() < 1e-5);
        assert!((sinclair_female(60.0, 200.0) - 0.727766268).abs() < 1e-8);
    }

    #[test]
    fn test_sinclair_ignores_total() {
        assert_eq!(sinclair_male(80.0, 100.0), sinclair_male(80.0, 350.0));
    }

    #[test]
    fn test_wilks() {
        assert!((wilks_male(90.0, 600.0) - 383.036446).abs() < 1e-5);
        assert!((wilks_female(60.0, 350.0) - 390.210406).abs() < 1e-5);
    }

    #[test]
    fn test_siff_and_ocarroll() {
        assert!((o_carroll(90.0, 200.0) - 52.590718).abs() < 1e-5);
        assert!((siff_weight_lifting_male(80.0) - 383.248760).abs() < 1e-5);
        assert!((siff_weight_lifting_female(60.0) - 214.196321).abs() < 1e-5);
        assert!((siff_power_lifting_male(90.0) - 941.784465).abs() < 1e-5);
    }
}
