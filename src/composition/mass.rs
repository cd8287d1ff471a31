//! Fat-free mass from bioelectrical impedance, kg
//!
//! Height in centimetres, weight in kilograms, resistance and reactance in ohms.
//! Equations whose published form does not use reactance still accept it so that
//! every variant has the same positional layout within its group.

use crate::catalogue::FormulaDescriptor;

fn resistance_index(height: f64, resistance: f64) -> f64 {
    height * height / resistance
}

/// White boys and girls 8-15 years (Lohman, 1992)
pub fn ffm_child(height: f64, weight: f64, resistance: f64, reactance: f64) -> f64 {
    0.62 * resistance_index(height, resistance) + 0.21 * weight + 0.1 * reactance + 4.2
}

/// White boys and girls 10-19 years (Houtkooper et al., 1992)
pub fn ffm_adolescent(height: f64, weight: f64, resistance: f64, _reactance: f64) -> f64 {
    0.61 * resistance_index(height, resistance) + 0.25 * weight + 1.31
}

/// Men below 20% body fat (Segal et al., 1988)
pub fn ffm_adult_male_lean(
    height: f64,
    weight: f64,
    age: f64,
    resistance: f64,
    _reactance: f64,
) -> f64 {
    0.00066360 * height * height - 0.02117 * resistance + 0.62854 * weight - 0.12380 * age
        + 9.33285
}

/// Women below 30% body fat (Segal et al., 1988)
pub fn ffm_adult_female_lean(height: f64, weight: f64, resistance: f64, _reactance: f64) -> f64 {
    0.000646 * height * height - 0.014 * resistance + 0.421 * weight + 10.4
}

/// Men above 20% body fat (Segal et al., 1988)
pub fn ffm_adult_male_obese(
    height: f64,
    weight: f64,
    age: f64,
    resistance: f64,
    _reactance: f64,
) -> f64 {
    0.00088580 * height * height - 0.02999 * resistance + 0.42688 * weight - 0.07002 * age
        + 14.52435
}

/// Women above 30% body fat (Segal et al., 1988)
pub fn ffm_adult_female_obese(
    height: f64,
    weight: f64,
    age: f64,
    resistance: f64,
    _reactance: f64,
) -> f64 {
    0.00091186 * height * height - 0.01466 * resistance + 0.29990 * weight - 0.07012 * age
        + 9.37938
}

/// Male athletes 19-40 years (Oppliger et al., 1991)
pub fn ffm_adult_male_athlete(height: f64, weight: f64, resistance: f64, _reactance: f64) -> f64 {
    0.186 * resistance_index(height, resistance) + 0.701 * weight + 1.949
}

/// Female athletes 18-27 years (Fornetti et al., 1999)
pub fn ffm_adult_female_athlete(height: f64, weight: f64, resistance: f64, reactance: f64) -> f64 {
    0.282 * height + 0.415 * weight - 0.037 * resistance + 0.096 * reactance - 9.734
}

macro_rules! ffm_formula {
    ($name:literal, Quaternary($func:path), $citation:literal) => {
        formula!("mass", $name, Composition, Quaternary($func),
            ("height": Centimeters / Positive, "weight": Kilograms / Positive,
             "resistance": Ohms / Positive, "reactance": Ohms / NonNegative) -> Kilograms,
            $citation)
    };
    ($name:literal, Quinary($func:path), $citation:literal) => {
        formula!("mass", $name, Composition, Quinary($func),
            ("height": Centimeters / Positive, "weight": Kilograms / Positive,
             "age": Years / NonNegative, "resistance": Ohms / Positive,
             "reactance": Ohms / NonNegative) -> Kilograms,
            $citation)
    };
}

pub(crate) static MASS_FORMULAS: &[FormulaDescriptor] = &[
    ffm_formula!("ffm_child", Quaternary(ffm_child),
        "Lohman TG (1992). Advances in Body Composition Assessment"),
    ffm_formula!("ffm_adolescent", Quaternary(ffm_adolescent),
        "Houtkooper LB, et al. (1992). J Appl Physiol 72:366-373"),
    ffm_formula!("ffm_adult_male_lean", Quinary(ffm_adult_male_lean),
        "Segal KR, et al. (1988). Am J Clin Nutr 47:7-14"),
    ffm_formula!("ffm_adult_female_lean", Quaternary(ffm_adult_female_lean),
        "Segal KR, et al. (1988). Am J Clin Nutr 47:7-14"),
    ffm_formula!("ffm_adult_male_obese", Quinary(ffm_adult_male_obese),
        "Segal KR, et al. (1988). Am J Clin Nutr 47:7-14"),
    ffm_formula!("ffm_adult_female_obese", Quinary(ffm_adult_female_obese),
        "Segal KR, et al. (1988). Am J Clin Nutr 47:7-14"),
    ffm_formula!("ffm_adult_male_athlete", Quaternary(ffm_adult_male_athlete),
        "Oppliger RA, Nielsen DH, Vance CG (1991). Med Sci Sports Exerc 23:247-253"),
    ffm_formula!("ffm_adult_female_athlete", Quaternary(ffm_adult_female_athlete),
        "Fornetti WC, et al. (1999). J Appl Physiol 87:1114-1122"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_adolescent() {
        assert!((ffm_child(150.0, 40.0, 600.0, 60.0) - 41.85).abs() < 1e-9);
        assert!((ffm_adolescent(150.0, 40.0, 600.0, 60.0) - 34.185).abs() < 1e-9);
    }

    #[test]
    fn test_segal_equations() {
        assert!((ffm_adult_male_lean(175.0, 70.0, 30.0, 500.0, 60.0) - 59.3544).abs() < 1e-9);
        assert!(
            (ffm_adult_female_obese(165.0, 80.0, 40.0, 550.0, 60.0) - 47.3289685).abs() < 1e-9
        );
    }

    #[test]
    fn test_reactance_only_matters_where_published() {
        let base = ffm_adult_male_athlete(180.0, 80.0, 450.0, 50.0);
        assert_eq!(base, ffm_adult_male_athlete(180.0, 80.0, 450.0, 70.0));
        assert!(
            ffm_adult_female_athlete(170.0, 60.0, 550.0, 70.0)
                > ffm_adult_female_athlete(170.0, 60.0, 550.0, 50.0)
        );
    }

    #[test]
    fn test_male_athlete_differs_from_female() {
        let male = ffm_adult_male_athlete(180.0, 80.0, 450.0, 60.0);
        let female = ffm_adult_female_athlete(180.0, 80.0, 450.0, 60.0);
        assert!((male - female).abs() > 1.0);
    }
}
