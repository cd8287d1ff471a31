//! Body density and body fat
//!
//! Skinfold sums are in millimetres. Densities are in g/cc. The density to
//! body-fat conversions (`siri`, `brozek_bf` and the population-specific
//! variants) return a fraction of body mass; multiply by 100 for a percentage.
//!
//! Several of the classic "skinfold" equations were published as direct body-fat
//! estimates rather than densities. Their return units are recorded in the
//! catalogue.

use crate::catalogue::FormulaDescriptor;

/// Body density at total lung capacity without submersion, men
pub fn db_at_tlcns(bd: f64) -> f64 {
    0.5829 * bd + 0.4059
}

/// Body density at total lung capacity without submersion, women
pub fn db_at_tlcns_female(bd: f64) -> f64 {
    0.4745 * bd + 0.5173
}

/// Percent body fat for boys 6-17 from triceps + calf (Slaughter et al., 1988)
pub fn skinfold_db_child_male(sum: f64) -> f64 {
    0.735 * sum + 1.0
}

/// Percent body fat for girls 6-17 from triceps + calf (Slaughter et al., 1988)
pub fn skinfold_db_child_female(sum: f64) -> f64 {
    0.610 * sum + 5.1
}

fn quadratic_density(
    intercept: f64,
    linear: f64,
    quadratic: f64,
    age_slope: f64,
    age: f64,
    sum: f64,
) -> f64 {
    intercept - linear * sum + quadratic * sum * sum - age_slope * age
}

/// Seven-site density for black or Hispanic men (Jackson & Pollock, 1978)
pub fn skinfold_db_black_hispanic_male(age: f64, sum: f64) -> f64 {
    quadratic_density(1.112, 0.00043499, 0.00000055, 0.00028826, age, sum)
}

/// Seven-site density for black or Hispanic women (Jackson et al., 1980)
pub fn skinfold_db_black_hispanic_female(age: f64, sum: f64) -> f64 {
    quadratic_density(1.0970, 0.00046971, 0.00000056, 0.00012828, age, sum)
}

/// Three-site (chest, abdomen, thigh) density for white men 18-61
pub fn skinfold_db_white_male(age: f64, sum: f64) -> f64 {
    quadratic_density(1.10938, 0.0008267, 0.0000016, 0.0002574, age, sum)
}

/// Three-site (triceps, suprailiac, thigh) density for white or anorexic women
pub fn skinfold_db_white_female_anorexic(age: f64, sum: f64) -> f64 {
    quadratic_density(1.0994921, 0.0009929, 0.0000023, 0.0001392, age, sum)
}

/// Seven-site density for male athletes 18-61
pub fn skinfold_db_athlete_male(age: f64, sum: f64) -> f64 {
    quadratic_density(1.112, 0.00043499, 0.00000055, 0.00028826, age, sum)
}

/// Four-site density for female athletes 18-29
pub fn skinfold_db_athlete_female(age: f64, sum: f64) -> f64 {
    quadratic_density(1.096095, 0.0006952, 0.0000011, 0.0000714, age, sum)
}

/// Evans et al. (2005) collegiate-athlete equation: percent body fat from the
/// sum of abdomen, thigh and triceps skinfolds, adjusted for sex and race
fn collegiate_athlete(sum: f64, male: bool, black: bool) -> f64 {
    let sex = if male { 6.343 } else { 0.0 };
    let race = if black { 1.998 } else { 0.0 };
    8.997 + 0.2468 * sum - sex - race
}

pub fn skinfold_db_collegiate_athlete_black_male(sum: f64) -> f64 {
    collegiate_athlete(sum, true, true)
}

pub fn skinfold_db_collegiate_athlete_black_female(sum: f64) -> f64 {
    collegiate_athlete(sum, false, true)
}

pub fn skinfold_db_collegiate_athlete_white_male(sum: f64) -> f64 {
    collegiate_athlete(sum, true, false)
}

pub fn skinfold_db_collegiate_athlete_white_female(sum: f64) -> f64 {
    collegiate_athlete(sum, false, false)
}

/// Body volume by hydrostatic weighing, litres
///
/// # Arguments
/// * `weight` - Body mass in air, kg
/// * `uww` - Underwater weight, kg
/// * `rv` - Residual lung volume, litres
/// * `gv` - Gastrointestinal gas volume, litres (0.1 is the usual estimate)
pub fn body_vol(weight: f64, uww: f64, rv: f64, gv: f64) -> f64 {
    const WATER_DENSITY: f64 = 1.0;
    (weight - uww) / WATER_DENSITY - (rv + gv)
}

/// Brozek et al. (1963) density to body-fat fraction
pub fn brozek_bf(bd: f64) -> f64 {
    4.570 / bd - 4.142
}

/// Siri (1961) density to body-fat fraction
pub fn siri(bd: f64) -> f64 {
    4.95 / bd - 4.50
}

/// Density to body-fat fraction for black women (Ortiz et al., 1992)
pub fn ortiz(bd: f64) -> f64 {
    4.832 / bd - 4.369
}

/// Density to body-fat fraction for black men (Schutte et al., 1984)
pub fn schutte(bd: f64) -> f64 {
    4.374 / bd - 3.928
}

/// Density to body-fat fraction for black men (Wagner & Heyward, 2001)
pub fn wagner(bd: f64) -> f64 {
    4.86 / bd - 4.39
}

fn bmi(weight: f64, height: f64) -> f64 {
    weight / (height / 100.0).powi(2)
}

/// Body-fat fraction from BMI for boys (Deurenberg et al., 1991)
///
/// Weight in kg, height in cm, age in years.
pub fn child_male_bmi_to_bf(weight: f64, height: f64, age: f64) -> f64 {
    (1.51 * bmi(weight, height) - 0.70 * age - 3.6 + 1.4) / 100.0
}

pub fn child_female_bmi_to_bf(weight: f64, height: f64, age: f64) -> f64 {
    (1.51 * bmi(weight, height) - 0.70 * age + 1.4) / 100.0
}

/// Body-fat fraction from BMI for men (Deurenberg et al., 1991)
///
/// Body fat rises with age in the adult equation.
pub fn adult_male_bmi_to_bf(weight: f64, height: f64, age: f64) -> f64 {
    (1.20 * bmi(weight, height) + 0.23 * age - 10.8 - 5.4) / 100.0
}

pub fn adult_female_bmi_to_bf(weight: f64, height: f64, age: f64) -> f64 {
    (1.20 * bmi(weight, height) + 0.23 * age - 5.4) / 100.0
}

/// Percent body fat from body weight (kg) and waist girth (inches), men
pub fn waist_bf_male(weight: f64, waist: f64) -> f64 {
    waist_bf(-98.42, weight, waist)
}

/// Percent body fat from body weight (kg) and waist girth (inches), women
pub fn waist_bf_female(weight: f64, waist: f64) -> f64 {
    waist_bf(-76.76, weight, waist)
}

/// Rounded kg to lb factor the waist equations were published with
const WAIST_LB_PER_KG: f64 = 2.2;

fn waist_bf(intercept: f64, weight: f64, waist: f64) -> f64 {
    let weight_lb = weight * WAIST_LB_PER_KG;
    100.0 * (intercept + 4.15 * waist - 0.082 * weight_lb) / weight_lb
}

macro_rules! skinfold_formula {
    ($name:literal, Unary($func:path) -> $returns:ident, $citation:literal) => {
        formula!("density", $name, Composition, Unary($func),
            ("sum": Millimeters / NonNegative) -> $returns,
            $citation)
    };
    ($name:literal, Binary($func:path) -> $returns:ident, $citation:literal) => {
        formula!("density", $name, Composition, Binary($func),
            ("age": Years / NonNegative, "sum": Millimeters / NonNegative) -> $returns,
            $citation)
    };
}

macro_rules! conversion_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("density", $name, Composition, Unary($func),
            ("bd": GramsPerCubicCentimeter / Positive) -> Fraction,
            $citation)
    };
}

macro_rules! bmi_bf_formula {
    ($name:literal, $func:path) => {
        formula!("density", $name, Composition, Ternary($func),
            ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
                -> Fraction,
            "Deurenberg P, Weststrate JA, Seidell JC (1991). Br J Nutr 65:105-114")
    };
}

pub(crate) static DENSITY_FORMULAS: &[FormulaDescriptor] = &[
    formula!("density", "dbAtTLCNS", Composition, Unary(db_at_tlcns),
        ("bd": GramsPerCubicCentimeter / Positive) -> GramsPerCubicCentimeter,
        "Donnelly JE, Sintek SS (1985). Am J Hum Biol"),
    formula!("density", "dbAtTLCNSFemale", Composition, Unary(db_at_tlcns_female),
        ("bd": GramsPerCubicCentimeter / Positive) -> GramsPerCubicCentimeter,
        "Donnelly JE, Sintek SS (1985). Am J Hum Biol"),
    skinfold_formula!("skinfoldDbChildMale", Unary(skinfold_db_child_male) -> Percent,
        "Slaughter MH, et al. (1988). Hum Biol 60:709-723"),
    skinfold_formula!("skinfoldDbChildFemale", Unary(skinfold_db_child_female) -> Percent,
        "Slaughter MH, et al. (1988). Hum Biol 60:709-723"),
    skinfold_formula!("skinfoldDbBlackHispanicMale",
        Binary(skinfold_db_black_hispanic_male) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML (1978). Br J Nutr 40:497-504"),
    skinfold_formula!("skinfoldDbBlackHispanicFemale",
        Binary(skinfold_db_black_hispanic_female) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML, Ward A (1980). Med Sci Sports Exerc 12:175-182"),
    skinfold_formula!("skinfoldDbWhiteMale", Binary(skinfold_db_white_male) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML (1978). Br J Nutr 40:497-504"),
    skinfold_formula!("skinfoldDbWhiteFemaleAnorexic",
        Binary(skinfold_db_white_female_anorexic) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML, Ward A (1980). Med Sci Sports Exerc 12:175-182"),
    skinfold_formula!("skinfoldDbAthleteMale", Binary(skinfold_db_athlete_male) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML (1978). Br J Nutr 40:497-504"),
    skinfold_formula!("skinfoldDbAthleteFemale",
        Binary(skinfold_db_athlete_female) -> GramsPerCubicCentimeter,
        "Jackson AS, Pollock ML, Ward A (1980). Med Sci Sports Exerc 12:175-182"),
    skinfold_formula!("skinfoldDbCollegiateAthleteBlackMale",
        Unary(skinfold_db_collegiate_athlete_black_male) -> Percent,
        "Evans EM, et al. (2005). Med Sci Sports Exerc 37:2006-2011"),
    skinfold_formula!("skinfoldDbCollegiateAthleteBlackFemale",
        Unary(skinfold_db_collegiate_athlete_black_female) -> Percent,
        "Evans EM, et al. (2005). Med Sci Sports Exerc 37:2006-2011"),
    skinfold_formula!("skinfoldDbCollegiateAthleteWhiteMale",
        Unary(skinfold_db_collegiate_athlete_white_male) -> Percent,
        "Evans EM, et al. (2005). Med Sci Sports Exerc 37:2006-2011"),
    skinfold_formula!("skinfoldDbCollegiateAthleteWhiteFemale",
        Unary(skinfold_db_collegiate_athlete_white_female) -> Percent,
        "Evans EM, et al. (2005). Med Sci Sports Exerc 37:2006-2011"),
    formula!("density", "body_vol", Composition, Quaternary(body_vol),
        ("weight": Kilograms / Positive, "uww": Kilograms / Any, "rv": Liters / NonNegative,
         "gv": Liters / NonNegative) -> Liters,
        "Heyward VH, Wagner DR (2004). Applied Body Composition Assessment, 2nd ed."),
    conversion_formula!("brozekBf", brozek_bf,
        "Brozek J, et al. (1963). Ann N Y Acad Sci 110:113-140"),
    conversion_formula!("siri", siri,
        "Siri WE (1961). Techniques for Measuring Body Composition, 223-244"),
    conversion_formula!("ortiz", ortiz,
        "Ortiz O, et al. (1992). Am J Clin Nutr 55:8-13"),
    conversion_formula!("schutte", schutte,
        "Schutte JE, et al. (1984). J Appl Physiol 56:1647-1649"),
    conversion_formula!("wagner", wagner,
        "Wagner DR, Heyward VH (2001). J Appl Physiol 90:649-656"),
    bmi_bf_formula!("childMaleBmiToBf", child_male_bmi_to_bf),
    bmi_bf_formula!("childFemaleBmiToBf", child_female_bmi_to_bf),
    bmi_bf_formula!("adultMaleBmiToBf", adult_male_bmi_to_bf),
    bmi_bf_formula!("adultFemaleBmiToBf", adult_female_bmi_to_bf),
    formula!("density", "waistBFMale", Composition, Binary(waist_bf_male),
        ("weight": Kilograms / Positive, "waist": Inches / Positive) -> Percent,
        "YMCA of the USA (1989). Y's Way to Physical Fitness, 3rd ed."),
    formula!("density", "waistBFFemale", Composition, Binary(waist_bf_female),
        ("weight": Kilograms / Positive, "waist": Inches / Positive) -> Percent,
        "YMCA of the USA (1989). Y's Way to Physical Fitness, 3rd ed."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skinfold_density() {
        assert!((skinfold_db_black_hispanic_male(30.0, 100.0) - 1.0653532).abs() < 1e-9);
        assert!((skinfold_db_white_male(30.0, 60.0) - 1.057816).abs() < 1e-9);
        assert_eq!(
            skinfold_db_athlete_male(25.0, 80.0),
            skinfold_db_black_hispanic_male(25.0, 80.0)
        );
    }

    #[test]
    fn test_collegiate_athlete_adjustments() {
        let sum = 40.0;
        let white_female = skinfold_db_collegiate_athlete_white_female(sum);
        assert!((white_female - 18.869).abs() < 1e-9);
        assert!((white_female - skinfold_db_collegiate_athlete_white_male(sum) - 6.343).abs() < 1e-9);
        assert!((white_female - skinfold_db_collegiate_athlete_black_female(sum) - 1.998).abs() < 1e-9);
        assert!(
            (white_female - skinfold_db_collegiate_athlete_black_male(sum) - 8.341).abs() < 1e-9
        );
    }

    #[test]
    fn test_density_to_fat() {
        assert!((siri(1.06) - 0.169811321).abs() < 1e-8);
        assert!((brozek_bf(1.06) - 0.169320755).abs() < 1e-8);
        // fat-free tissue density of about 1.1 g/cc means no fat
        assert!(siri(1.1).abs() < 1e-12);
        assert!(ortiz(1.05) > 0.0 && schutte(1.05) > 0.0 && wagner(1.05) > 0.0);
    }

    #[test]
    fn test_body_volume_subtracts_trapped_air() {
        assert!((body_vol(80.0, 3.5, 1.3, 0.1) - 75.1).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_conversions() {
        // BMI 22.857, age 30
        assert!((adult_male_bmi_to_bf(70.0, 175.0, 30.0) - 0.181285714).abs() < 1e-8);
        assert!(adult_male_bmi_to_bf(70.0, 175.0, 50.0) > adult_male_bmi_to_bf(70.0, 175.0, 30.0));

        // BMI 20, age 10
        let height = (40.0f64 / 20.0).sqrt() * 100.0;
        assert!((child_female_bmi_to_bf(40.0, height, 10.0) - 0.246).abs() < 1e-9);
        assert!(
            (child_female_bmi_to_bf(40.0, height, 10.0) - child_male_bmi_to_bf(40.0, height, 10.0)
                - 0.036)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn test_waist_body_fat() {
        let male = waist_bf_male(80.0, 34.0);
        assert!((male - 16.05).abs() < 1e-9);
        // 176 lb exactly at 80 kg
        let female = waist_bf_female(80.0, 34.0);
        assert!((female - 100.0 * (-76.76 + 4.15 * 34.0 - 0.082 * 176.0) / 176.0).abs() < 1e-9);
        assert!(female > male);
    }
}
