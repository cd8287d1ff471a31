//! Height, weight and girth indices
//!
//! `bmi` and `ponderal` take height in centimetres. The remaining indices take
//! height in metres, matching the way each was published.

use crate::catalogue::FormulaDescriptor;

/// Body mass index, kg/m²
///
/// # Arguments
/// * `kg` - Body mass in kilograms
/// * `height` - Height in centimetres
pub fn bmi(kg: f64, height: f64) -> f64 {
    let meters = height / 100.0;
    kg / (meters * meters)
}

/// Ponderal index, `1000 · kg^(1/3) / cm`
pub fn ponderal(kg: f64, height: f64) -> f64 {
    1000.0 * kg.cbrt() / height
}

/// Body adiposity index (Bergman et al., 2011)
///
/// # Arguments
/// * `hip_circumference` - Hip circumference in centimetres
/// * `height` - Height in metres
pub fn bai(hip_circumference: f64, height: f64) -> f64 {
    hip_circumference / (height * height.sqrt()) - 18.0
}

/// BMI expressed as a proportion of the upper optimal BMI of 25
pub fn bmi_prime(kg: f64, height: f64) -> f64 {
    bmi(kg, height) / 25.0
}

/// Corpulence index, kg/m³, height in metres
pub fn corpulence(kg: f64, height: f64) -> f64 {
    kg / height.powi(3)
}

/// A Body Shape Index (Krakauer & Krakauer, 2012)
///
/// # Arguments
/// * `kg` - Body mass in kilograms
/// * `height` - Height in metres
/// * `waist_circumference` - Waist circumference in metres
pub fn bsi(kg: f64, height: f64, waist_circumference: f64) -> f64 {
    let bmi = kg / (height * height);
    waist_circumference / (bmi.powf(2.0 / 3.0) * height.sqrt())
}

/// Surface-based body shape index (Rahman & Adjeroh, 2015)
///
/// # Arguments
/// * `height` - Height in centimetres
/// * `bsa` - Body surface area in m²
/// * `vertical_trunk_circumference` - Vertical trunk circumference in centimetres
/// * `waist_circumference` - Waist circumference in centimetres
pub fn sbsi(
    height: f64,
    bsa: f64,
    vertical_trunk_circumference: f64,
    waist_circumference: f64,
) -> f64 {
    height.powf(7.0 / 4.0) * waist_circumference.powf(5.0 / 6.0)
        / (bsa * vertical_trunk_circumference)
}

/// Waist-to-hip ratio; both girths in the same unit
pub fn whr(waist_circumference: f64, hip_circumference: f64) -> f64 {
    waist_circumference / hip_circumference
}

/// Waist-to-height ratio; both lengths in the same unit
pub fn whtr(waist_circumference: f64, height: f64) -> f64 {
    waist_circumference / height
}

pub(crate) static INDICES_FORMULAS: &[FormulaDescriptor] = &[
    formula!("indices", "bmi", Composition, Binary(bmi),
        ("kg": Kilograms / Positive, "height": Centimeters / Positive) -> KilogramsPerSquareMeter,
        "Keys A, et al. (1972). J Chronic Dis 25:329-343"),
    formula!("indices", "ponderal", Composition, Binary(ponderal),
        ("kg": Kilograms / Positive, "height": Centimeters / Positive) -> Dimensionless,
        "Rohrer F (1921). Der Index der Korperfulle"),
    formula!("indices", "bai", Composition, Binary(bai),
        ("hip_circumference": Centimeters / Positive, "height": Meters / Positive) -> Percent,
        "Bergman RN, et al. (2011). Obesity 19:1083-1089"),
    formula!("indices", "bmi_prime", Composition, Binary(bmi_prime),
        ("kg": Kilograms / Positive, "height": Centimeters / Positive) -> Dimensionless,
        "Gadzik J (2006). Connecticut Medicine 70:81-88"),
    formula!("indices", "corpulence", Composition, Binary(corpulence),
        ("kg": Kilograms / Positive, "height": Meters / Positive) -> KilogramsPerCubicMeter,
        "Babar S (2015). Clin J Sport Med 25:183"),
    formula!("indices", "bsi", Composition, Ternary(bsi),
        ("kg": Kilograms / Positive, "height": Meters / Positive,
         "waist_circumference": Meters / Positive) -> Dimensionless,
        "Krakauer NY, Krakauer JC (2012). PLoS ONE 7:e39504"),
    formula!("indices", "sbsi", Composition, Quaternary(sbsi),
        ("height": Centimeters / Positive, "bsa": SquareMeters / Positive,
         "vertical_trunk_circumference": Centimeters / Positive,
         "waist_circumference": Centimeters / Positive) -> Dimensionless,
        "Rahman SA, Adjeroh D (2015). PLoS ONE 10:e0144639"),
    formula!("indices", "whr", Composition, Binary(whr),
        ("waist_circumference": Centimeters / Positive, "hip_circumference": Centimeters / Positive)
            -> Dimensionless,
        "World Health Organization (2008). Waist circumference and waist-hip ratio"),
    formula!("indices", "whtr", Composition, Binary(whtr),
        ("waist_circumference": Centimeters / Positive, "height": Centimeters / Positive)
            -> Dimensionless,
        "Ashwell M, Hsieh SD (2005). Int J Food Sci Nutr 56:303-307"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert!((bmi(70.0, 175.0) - 22.857142857).abs() < 1e-6);
        assert!((bmi_prime(70.0, 175.0) - 0.914285714).abs() < 1e-6);
    }

    #[test]
    fn test_ponderal_uses_cube_root() {
        assert!((ponderal(70.0, 175.0) - 23.550201713).abs() < 1e-6);
        // a plain integer exponent would make the index independent of mass
        assert!(ponderal(90.0, 175.0) > ponderal(70.0, 175.0));
    }

    #[test]
    fn test_girth_indices() {
        assert!((bai(100.0, 1.75) - 25.195939772).abs() < 1e-6);
        assert!((corpulence(70.0, 1.75) - 13.06122449).abs() < 1e-6);
        assert!((bsi(70.0, 1.75, 0.85) - 0.079778391).abs() < 1e-6);
        assert!((sbsi(175.0, 1.85, 150.0, 85.0) - 1229.993177).abs() < 1e-3);
        assert!((whr(85.0, 100.0) - 0.85).abs() < 1e-12);
        assert!((whtr(85.0, 170.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_height_propagates() {
        assert!(bmi(70.0, 0.0).is_infinite());
        assert!(bmi(0.0, 0.0).is_nan());
    }
}
