//! Body surface area, m²
//!
//! Every equation takes `(height, weight)` with height in centimetres and weight
//! in kilograms.

use crate::catalogue::FormulaDescriptor;

/// Boyd (1935), kilogram form of the gram-fitted equation
///
/// # Arguments
/// * `height` - Height in cm
/// * `weight` - Weight in kg
pub fn boyd(height: f64, weight: f64) -> f64 {
    0.0333 * weight.powf(0.6157 - 0.0188 * weight.log10()) * height.powf(0.3)
}

/// Costeff (1966); depends on weight only
pub fn costeff(_height: f64, weight: f64) -> f64 {
    (4.0 * weight + 7.0) / (90.0 + weight)
}

/// Du Bois & Du Bois (1916)
pub fn dubois(height: f64, weight: f64) -> f64 {
    0.007184 * weight.powf(0.425) * height.powf(0.725)
}

/// Fujimoto et al. (1968)
pub fn fujimoto(height: f64, weight: f64) -> f64 {
    0.008883 * weight.powf(0.444) * height.powf(0.663)
}

/// Gehan & George (1970)
pub fn gehangeorge(height: f64, weight: f64) -> f64 {
    0.0235 * weight.powf(0.51456) * height.powf(0.42246)
}

/// Haycock et al. (1978)
pub fn haycock(height: f64, weight: f64) -> f64 {
    0.024265 * weight.powf(0.5378) * height.powf(0.3964)
}

/// Mosteller (1987), `sqrt(cm · kg) / 60`
pub fn mosteller(height: f64, weight: f64) -> f64 {
    (weight * height).sqrt() / 60.0
}

/// Shuter & Aslani (2000)
pub fn shuter_aslani(height: f64, weight: f64) -> f64 {
    0.00949 * weight.powf(0.441) * height.powf(0.655)
}

/// Takahira (1925)
pub fn tahahira(height: f64, weight: f64) -> f64 {
    0.007241 * weight.powf(0.425) * height.powf(0.725)
}

/// Schlich et al. (2010), men
pub fn schlich_male(height: f64, weight: f64) -> f64 {
    0.000579479 * weight.powf(0.38) * height.powf(1.24)
}

/// Schlich et al. (2010), women
pub fn schlich_female(height: f64, weight: f64) -> f64 {
    0.000975482 * weight.powf(0.46) * height.powf(1.08)
}

macro_rules! bsa_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("surfacearea", $name, Composition, Binary($func),
            ("height": Centimeters / Positive, "weight": Kilograms / Positive) -> SquareMeters,
            $citation)
    };
}

pub(crate) static SURFACE_AREA_FORMULAS: &[FormulaDescriptor] = &[
    bsa_formula!("boyd", boyd,
        "Boyd E (1935). The Growth of the Surface Area of the Human Body"),
    bsa_formula!("costeff", costeff,
        "Costeff H (1966). Arch Dis Child 41:681-683"),
    bsa_formula!("dubois", dubois,
        "Du Bois D, Du Bois EF (1916). Arch Intern Med 17:863-871"),
    bsa_formula!("fujimoto", fujimoto,
        "Fujimoto S, et al. (1968). Nihon Eiseigaku Zasshi 23:443-450"),
    bsa_formula!("gehangeorge", gehangeorge,
        "Gehan EA, George SL (1970). Cancer Chemother Rep 54:225-235"),
    bsa_formula!("haycock", haycock,
        "Haycock GB, et al. (1978). J Pediatr 93:62-66"),
    bsa_formula!("mosteller", mosteller,
        "Mosteller RD (1987). N Engl J Med 317:1098"),
    bsa_formula!("shuterAslani", shuter_aslani,
        "Shuter B, Aslani A (2000). Eur J Appl Physiol 82:250-254"),
    bsa_formula!("tahahira", tahahira,
        "Takahira H (1925). Metab Res 1:467"),
    bsa_formula!("schlichMale", schlich_male,
        "Schlich E, Schumm M, Schlich M (2010). Ernahrungs Umschau 57:178-183"),
    bsa_formula!("schlichFemale", schlich_female,
        "Schlich E, Schumm M, Schlich M (2010). Ernahrungs Umschau 57:178-183"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_adult() {
        let (h, w) = (175.0, 70.0);
        let cases = [
            (boyd(h, w), 1.850887575),
            (costeff(h, w), 1.79375),
            (dubois(h, w), 1.848143018),
            (fujimoto(h, w), 1.798528889),
            (gehangeorge(h, w), 1.853853298),
            (haycock(h, w), 1.846776349),
            (mosteller(h, w), 1.844661968),
            (shuter_aslani(h, w), 1.820305872),
            (tahahira(h, w), 1.862806736),
            (schlich_male(h, w), 1.760119432),
            (schlich_female(165.0, 60.0), 1.592397529),
        ];
        for (i, (actual, expected)) in cases.iter().enumerate() {
            assert!((actual - expected).abs() < 1e-6, "case {}: {} != {}", i, actual, expected);
        }
    }

    #[test]
    fn test_equations_agree_for_average_adult() {
        let values = [
            dubois(175.0, 70.0),
            mosteller(175.0, 70.0),
            haycock(175.0, 70.0),
            gehangeorge(175.0, 70.0),
        ];
        let spread = values.iter().cloned().fold(f64::MIN, f64::max)
            - values.iter().cloned().fold(f64::MAX, f64::min);
        assert!(spread < 0.02);
    }

    #[test]
    fn test_boyd_takes_kilograms() {
        let boyd = boyd(175.0, 70.0);
        assert!((boyd - dubois(175.0, 70.0)).abs() < 0.1);
        assert!((boyd - mosteller(175.0, 70.0)).abs() < 0.1);

        // gram-fitted form evaluated at 70 000 g
        let grams = 70_000.0_f64;
        let gram_form = 0.0003207 * grams.powf(0.7285 - 0.0188 * grams.log10()) * 175.0_f64.powf(0.3);
        assert!((boyd - gram_form).abs() < 1e-3);
    }

    #[test]
    fn test_costeff_ignores_height() {
        assert_eq!(costeff(120.0, 70.0), costeff(190.0, 70.0));
    }
}
