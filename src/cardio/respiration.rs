//! Residual volume and lung capacity, litres
//!
//! Heights in centimetres, weights in kilograms, ages in years.

use crate::catalogue::FormulaDescriptor;

/// Residual volume (Berglund et al., 1963)
pub fn rv_berglund(height: f64, age: f64) -> f64 {
    0.0115 * age + 0.019 * height - 2.24
}

/// Residual volume for women (Berglund et al., 1963)
pub fn rv_berglund_female(height: f64, age: f64) -> f64 {
    0.007 * age + 0.0268 * height - 3.42
}

/// Residual volume (Black, Offord & Hyatt, 1974), SEE 0.46 L
pub fn rv_black(height: f64, age: f64) -> f64 {
    0.021 * age + 0.023 * height - 2.978
}

/// Residual volume for normal-weight adults
pub fn rv_normal(height: f64, age: f64) -> f64 {
    0.0275 * age + 0.0189 * height - 2.6139
}

/// Residual volume for overweight adults
pub fn rv_overweight(height: f64, age: f64) -> f64 {
    0.0277 * age + 0.0138 * height - 2.3967
}

/// Residual volume (Boren et al., 1966)
pub fn rv_boren(weight: f64, height: f64, age: f64) -> f64 {
    0.022 * age + 0.0198 * height - 0.015 * weight - 1.54
}

/// Residual volume for men (Goldman & Becklake, 1959)
pub fn rv_goldman(height: f64, age: f64) -> f64 {
    0.017 * age + 0.027 * height - 3.477
}

/// Residual volume for women (Goldman & Becklake, 1959)
pub fn rv_goldman_female(height: f64, age: f64) -> f64 {
    0.009 * age + 0.032 * height - 3.9
}

/// Residual volume for women (O'Brien & Drizd, 1983)
///
/// # Arguments
/// * `height` - Height in cm
/// * `age` - Age in years
/// * `bsa` - Body surface area in m²
pub fn rv_obrien_female(height: f64, age: f64, bsa: f64) -> f64 {
    0.03 * age + 0.0387 * height - 0.73 * bsa - 4.78
}

/// Total lung capacity from residual volume and vital capacity
pub fn total_lung_capacity(residual_volume: f64, vital_capacity: f64) -> f64 {
    residual_volume + vital_capacity
}

macro_rules! rv_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("respiration", $name, Cardiovascular, Binary($func),
            ("height": Centimeters / Positive, "age": Years / NonNegative) -> Liters,
            $citation)
    };
}

pub(crate) static RESPIRATION_FORMULAS: &[FormulaDescriptor] = &[
    formula!("respiration", "rv_berglund", Cardiovascular, Binary(rv_berglund),
        ("height": Centimeters / Positive, "age": Years / NonNegative) -> Liters,
        "Berglund E, et al. (1963). Acta Med Scand 173:185-192"),
    rv_formula!("rv_berglund_female", rv_berglund_female,
        "Berglund E, et al. (1963). Acta Med Scand 173:185-192"),
    rv_formula!("rv_black", rv_black,
        "Black LF, Offord K, Hyatt RE (1974). Am Rev Respir Dis 110:282-292"),
    rv_formula!("rv_normal", rv_normal,
        "Heyward VH, Wagner DR (2004). Applied Body Composition Assessment, 2nd ed."),
    rv_formula!("rv_overweight", rv_overweight,
        "Heyward VH, Wagner DR (2004). Applied Body Composition Assessment, 2nd ed."),
    formula!("respiration", "rv_boren", Cardiovascular, Ternary(rv_boren),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative)
            -> Liters,
        "Boren HG, Kory RC, Syner JC (1966). Am J Med 41:96-114"),
    formula!("respiration", "rv_goldman", Cardiovascular, Binary(rv_goldman),
        ("height": Centimeters / Positive, "age": Years / NonNegative) -> Liters,
        "Goldman HI, Becklake MR (1959). Am Rev Tuberc 79:457-467"),
    formula!("respiration", "rv_goldman_female", Cardiovascular, Binary(rv_goldman_female),
        ("height": Centimeters / Positive, "age": Years / NonNegative) -> Liters,
        "Goldman HI, Becklake MR (1959). Am Rev Tuberc 79:457-467"),
    formula!("respiration", "rv_obrien_female", Cardiovascular, Ternary(rv_obrien_female),
        ("height": Centimeters / Positive, "age": Years / NonNegative, "bsa": SquareMeters / Positive)
            -> Liters,
        "O'Brien RJ, Drizd TA (1983). Am Rev Respir Dis 128:949-952"),
    formula!("respiration", "total_lung_capacity", Cardiovascular, Binary(total_lung_capacity),
        ("residual_volume": Liters / NonNegative, "vital_capacity": Liters / NonNegative) -> Liters,
        "Heyward VH, Wagner DR (2004). Applied Body Composition Assessment, 2nd ed."),
];
