//! Resting and basal metabolic rate, kcal/day
//!
//! Weight in kilograms, height in centimetres, age in years unless noted.

use crate::catalogue::FormulaDescriptor;

/// Revised Harris-Benedict BMR for men (Roza & Shizgal, 1984)
pub fn revised_hb_male(weight: f64, height: f64, age: f64) -> f64 {
    (88.4 + 13.4 * weight) + (4.8 * height) - (5.68 * age)
}

/// Revised Harris-Benedict BMR for women (Roza & Shizgal, 1984)
pub fn revised_hb_female(weight: f64, height: f64, age: f64) -> f64 {
    (447.6 + 9.25 * weight) + (3.10 * height) - (4.33 * age)
}

/// Original Harris-Benedict BMR for men (1919)
pub fn harris_benedict_male(weight: f64, height: f64, age: f64) -> f64 {
    13.7516 * weight + 5.0033 * height - 6.7550 * age + 66.4730
}

/// Original Harris-Benedict BMR for women (1919)
pub fn harris_benedict_female(weight: f64, height: f64, age: f64) -> f64 {
    9.5634 * weight + 1.8496 * height - 4.6756 * age + 655.0955
}

/// Mifflin-St Jeor RMR for men
pub fn msj_male(weight: f64, height: f64, age: f64) -> f64 {
    9.99 * weight + 6.25 * height - 4.92 * age + 5.0
}

/// Mifflin-St Jeor RMR for women
pub fn msj_female(weight: f64, height: f64, age: f64) -> f64 {
    9.99 * weight + 6.25 * height - 4.92 * age - 161.0
}

/// Katch-McArdle resting daily energy expenditure from lean body mass (kg)
pub fn kma(lbm: f64) -> f64 {
    370.0 + 21.6 * lbm
}

/// Cunningham RMR from lean body mass (kg)
///
/// Runs slightly higher than [`kma`] for the same lean mass.
pub fn cunningham(lbm: f64) -> f64 {
    500.0 + 22.0 * lbm
}

/// Quick RMR estimate from body mass alone, men
pub fn quick_rmr_male(weight: f64) -> f64 {
    weight * 24.2
}

/// Quick RMR estimate from body mass alone, women
pub fn quick_rmr_female(weight: f64) -> f64 {
    weight * 22.0
}

/// RMR from body surface area (m²), men
///
/// No age correction is applied, although RMR falls by 2-5% per decade after 40.
pub fn bsa_rmr_male(bsa: f64) -> f64 {
    bsa * 912.0
}

/// RMR from body surface area (m²), women
pub fn bsa_rmr_female(bsa: f64) -> f64 {
    bsa * 840.0
}

pub(crate) static RMR_FORMULAS: &[FormulaDescriptor] = &[
    formula!("rmr", "revisedHbMale", Cardiovascular, Ternary(revised_hb_male),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Roza AM, Shizgal HM (1984). Am J Clin Nutr 40:168-182"),
    formula!("rmr", "revisedHbFemale", Cardiovascular, Ternary(revised_hb_female),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Roza AM, Shizgal HM (1984). Am J Clin Nutr 40:168-182"),
    formula!("rmr", "harrisBenedictMale", Cardiovascular, Ternary(harris_benedict_male),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Harris JA, Benedict FG (1918). PNAS 4(12):370-373"),
    formula!("rmr", "harrisBenedictFemale", Cardiovascular, Ternary(harris_benedict_female),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Harris JA, Benedict FG (1918). PNAS 4(12):370-373"),
    formula!("rmr", "msjMale", Cardiovascular, Ternary(msj_male),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Mifflin MD, St Jeor ST, et al. (1990). Am J Clin Nutr 51(2):241-247"),
    formula!("rmr", "msjFemale", Cardiovascular, Ternary(msj_female),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> KilocaloriesPerDay,
        "Mifflin MD, St Jeor ST, et al. (1990). Am J Clin Nutr 51(2):241-247"),
    formula!("rmr", "kma", Cardiovascular, Unary(kma),
        ("lbm": Kilograms / Positive) -> KilocaloriesPerDay,
        "McArdle W (2006). Essentials of Exercise Physiology, p. 266"),
    formula!("rmr", "cunningham", Cardiovascular, Unary(cunningham),
        ("lbm": Kilograms / Positive) -> KilocaloriesPerDay,
        "Cunningham JJ (1980). Am J Clin Nutr 33(11):2372-2374"),
    formula!("rmr", "quickMale", Cardiovascular, Unary(quick_rmr_male),
        ("weight": Kilograms / Positive) -> KilocaloriesPerDay,
        "Sharkey BJ, Gaskill SE (2007). Fitness and Health"),
    formula!("rmr", "quickFemale", Cardiovascular, Unary(quick_rmr_female),
        ("weight": Kilograms / Positive) -> KilocaloriesPerDay,
        "Sharkey BJ, Gaskill SE (2007). Fitness and Health"),
    formula!("rmr", "bsaMale", Cardiovascular, Unary(bsa_rmr_male),
        ("bsa": SquareMeters / Positive) -> KilocaloriesPerDay,
        "Sharkey BJ, Gaskill SE (2007). Fitness and Health"),
    formula!("rmr", "bsaFemale", Cardiovascular, Unary(bsa_rmr_female),
        ("bsa": SquareMeters / Positive) -> KilocaloriesPerDay,
        "Sharkey BJ, Gaskill SE (2007). Fitness and Health"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revised_harris_benedict() {
        assert!((revised_hb_male(80.0, 180.0, 30.0) - 1854.0).abs() < 1e-9);
        assert!((revised_hb_female(60.0, 165.0, 30.0) - 1384.2).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_st_jeor_sex_offset() {
        let male = msj_male(70.0, 175.0, 40.0);
        let female = msj_female(70.0, 175.0, 40.0);
        assert!((male - 1601.25).abs() < 1e-9);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_lean_mass_equations() {
        assert!((kma(60.0) - 1666.0).abs() < 1e-9);
        assert!((cunningham(60.0) - 1820.0).abs() < 1e-9);
        assert!(cunningham(60.0) > kma(60.0));
    }

    #[test]
    fn test_quick_estimates() {
        assert!((quick_rmr_male(80.0) - 1936.0).abs() < 1e-9);
        assert!((bsa_rmr_female(1.7) - 1428.0).abs() < 1e-9);
    }
}
