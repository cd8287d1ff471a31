//! Energy substrate utilisation and activity energy cost

use crate::catalogue::FormulaDescriptor;

/// Fraction of energy drawn from carbohydrate at a given fraction of VO2max
///
/// Quadratic fit of the respiratory exchange data in Jeukendrup & Wallis (2005).
/// Together with [`fat`] the two fractions sum to 1 within the regression residual.
///
/// # Arguments
/// * `percent_vo2` - Exercise intensity as a fraction of VO2max (0-1)
pub fn carbohydrate(percent_vo2: f64) -> f64 {
    0.565973 * percent_vo2.powi(2) + 0.376443 * percent_vo2 - 0.000295601
}

/// Fraction of energy drawn from fat at a given fraction of VO2max
///
/// # Arguments
/// * `percent_vo2` - Exercise intensity as a fraction of VO2max (0-1)
pub fn fat(percent_vo2: f64) -> f64 {
    -0.565973 * percent_vo2.powi(2) - 0.376443 * percent_vo2 + 1.0003
}

/// Net energy cost of an activity in kcal/min
///
/// # Arguments
/// * `weight` - Body mass in kilograms
/// * `mets` - Activity intensity in METs
pub fn net_calorie_cost(weight: f64, mets: f64) -> f64 {
    (mets * 3.5 * weight) / 200.0
}

/// Pandolf load-carriage equation, metabolic rate in watts
///
/// # Arguments
/// * `weight` - Body mass in kilograms
/// * `load` - Carried load in kilograms
/// * `speed` - Walking speed in m/s
/// * `terrain` - Terrain factor η (1.0 for treadmill, higher for softer ground)
/// * `slope` - Grade in percent
pub fn pandolf(weight: f64, load: f64, speed: f64, terrain: f64, slope: f64) -> f64 {
    let total = weight + load;
    let standing = 1.5 * weight + 2.0 * total * (load / weight).powi(2);
    let moving = terrain * total * (1.5 * speed.powi(2) + 0.35 * speed * slope);
    standing + moving
}

/// Santee correction of [`pandolf`] for downhill (negative) grades, in watts
///
/// Arguments as for [`pandolf`].
pub fn santee(weight: f64, load: f64, speed: f64, terrain: f64, slope: f64) -> f64 {
    let total = weight + load;
    let grade_speed = speed * slope;
    let speed_sq = speed.powi(2);

    let standing = 1.5 * weight + 2.0 * total * (load / weight).powi(2);
    let moving = terrain * total * (1.5 * speed_sq + 0.35 * grade_speed);
    let downhill =
        (grade_speed * total) / 3.5 - (total * (slope + 6.0).powi(2)) / weight + 25.0 - speed_sq;

    standing + moving - terrain * downhill
}

pub(crate) static ENERGY_FORMULAS: &[FormulaDescriptor] = &[
    formula!("energy", "carbohydrate", Cardiovascular, Unary(carbohydrate),
        ("percent_vo2": Fraction / Fraction) -> Fraction,
        "Jeukendrup AE, Wallis GA (2005). Int J Sports Med 26 Suppl 1:S28-37"),
    formula!("energy", "fat", Cardiovascular, Unary(fat),
        ("percent_vo2": Fraction / Fraction) -> Fraction,
        "Jeukendrup AE, Wallis GA (2005). Int J Sports Med 26 Suppl 1:S28-37"),
    formula!("energy", "fromActivity", Cardiovascular, Binary(net_calorie_cost),
        ("weight": Kilograms / Positive, "mets": Mets / NonNegative) -> KilocaloriesPerMinute,
        "Humphrey R (2006). ACSM's Health & Fitness Journal 10(2):40-41"),
    formula!("energy", "pandolf", Cardiovascular, Quinary(pandolf),
        ("weight": Kilograms / Positive, "load": Kilograms / NonNegative,
         "speed": MetersPerSecond / NonNegative, "terrain": Dimensionless / Positive,
         "slope": Percent / Any) -> Watts,
        "Pandolf KB, Givoni B, Goldman RF (1977). J Appl Physiol 43:577-581"),
    formula!("energy", "santee", Cardiovascular, Quinary(santee),
        ("weight": Kilograms / Positive, "load": Kilograms / NonNegative,
         "speed": MetersPerSecond / NonNegative, "terrain": Dimensionless / Positive,
         "slope": Percent / Any) -> Watts,
        "Santee WR, Blanchard LA, Speckman KL, Gonzalez JA, Wallace RF (2003). USARIEM T03-12"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substrate_split_at_half_vo2max() {
        assert!((carbohydrate(0.5) - 0.330).abs() < 1e-3);
        assert!((fat(0.5) - 0.670).abs() < 1e-3);
    }

    #[test]
    fn test_substrate_fractions_sum_to_one() {
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            assert!((carbohydrate(p) + fat(p) - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_net_calorie_cost() {
        // 8 METs at 70 kg
        assert!((net_calorie_cost(70.0, 8.0) - 9.8).abs() < 1e-9);
    }

    #[test]
    fn test_load_carriage_models() {
        // unloaded standing reduces to 1.5 W
        assert!((pandolf(80.0, 0.0, 0.0, 1.0, 0.0) - 120.0).abs() < 1e-9);

        let uphill = pandolf(80.0, 20.0, 1.34, 1.0, 5.0);
        let flat = pandolf(80.0, 20.0, 1.34, 1.0, 0.0);
        assert!(uphill > flat);

        let downhill = santee(80.0, 20.0, 1.34, 1.0, -5.0);
        assert!(downhill.is_finite());
        assert!((downhill - 336.81417).abs() < 1e-3);
    }
}
