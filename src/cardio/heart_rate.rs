//! Heart-rate zones, maximum heart-rate predictors and related measures
//!
//! Heart rates are in beats per minute, ages in years.

use crate::catalogue::FormulaDescriptor;
use crate::models::{HeartRateZones, ZoneRange};
use serde::{Deserialize, Serialize};

/// Five training zones at 50/60/70/80/90/100% of maximum heart rate
///
/// Returns `None` when `max_hr` is zero; a zero-filled record is never produced.
/// Each zone starts where the previous one ends and the redline tops out at
/// `max_hr` exactly.
pub fn hr_zones(max_hr: f64) -> Option<HeartRateZones> {
    if max_hr == 0.0 {
        return None;
    }

    let low = ZoneRange::new(0.5 * max_hr, 0.6 * max_hr);
    let weight_control = ZoneRange::new(low.max, 0.7 * max_hr);
    let aerobic = ZoneRange::new(weight_control.max, 0.8 * max_hr);
    let anaerobic = ZoneRange::new(aerobic.max, 0.9 * max_hr);
    let redline = ZoneRange::new(anaerobic.max, max_hr);

    Some(HeartRateZones {
        low,
        weight_control,
        aerobic,
        anaerobic,
        redline,
    })
}

/// Age-predicted maximum heart rate equations
///
/// Each model predicts HRmax from age and can be inverted to the age at which a
/// given HRmax is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrMaxModel {
    /// Fox (1971), 208 - 0.7 age; recommended for older adults
    Fox,
    /// Tanaka, Monahan & Seals (2001), healthy men and women
    Tanaka,
    /// Gellish et al. (2007), adult fitness programme participants
    Gellish,
    /// Astrand (1952), men and women aged 4 to 34
    Astrand,
    /// Gulati et al. (2010), asymptomatic middle-aged women
    Gulati,
    /// Haskell & Fox, 220 - age
    HaskellFox,
    /// Londeree & Moeschberger (1982)
    LondereeMoeschberger,
    /// Miller et al. (1993)
    Miller,
    /// Nes et al. (2013)
    Nes,
    /// Oakland linear fit (Robergs & Landwehr, 2002)
    OaklandLinear,
    /// Oakland quadratic fit, 191.5 - 0.002 age²
    OaklandNonlinear,
    /// Oakland quadratic fit, 163 + 1.16 age - 0.018 age²
    OaklandNonlinear2,
    /// Robergs & Landwehr (2002)
    RobergsLandwehr,
}

impl HrMaxModel {
    /// Predicted maximum heart rate for `age`
    pub fn predict(&self, age: f64) -> f64 {
        match self {
            HrMaxModel::Fox | HrMaxModel::Tanaka => 208.0 - 0.7 * age,
            HrMaxModel::Gellish => 207.0 - 0.7 * age,
            HrMaxModel::Astrand => 216.6 - 0.84 * age,
            HrMaxModel::Gulati => 206.0 - 0.88 * age,
            HrMaxModel::HaskellFox => 220.0 - age,
            HrMaxModel::LondereeMoeschberger => 206.3 - 0.711 * age,
            HrMaxModel::Miller => 217.0 - 0.85 * age,
            HrMaxModel::Nes => 211.0 - 0.64 * age,
            HrMaxModel::OaklandLinear => 206.9 - 0.67 * age,
            HrMaxModel::OaklandNonlinear => 191.5 - 0.002 * age.powi(2),
            HrMaxModel::OaklandNonlinear2 => 163.0 + 1.16 * age - 0.018 * age.powi(2),
            HrMaxModel::RobergsLandwehr => 205.8 - 0.685 * age,
        }
    }

    /// Age at which the model predicts `hr` as maximum heart rate
    ///
    /// The quadratic models return the positive root; `NaN` when no real root
    /// exists.
    pub fn age_for(&self, hr: f64) -> f64 {
        match self {
            HrMaxModel::Fox | HrMaxModel::Tanaka => (hr - 208.0) / -0.7,
            HrMaxModel::Gellish => (hr - 207.0) / -0.7,
            HrMaxModel::Astrand => (hr - 216.6) / -0.84,
            HrMaxModel::Gulati => (hr - 206.0) / -0.88,
            HrMaxModel::HaskellFox => 220.0 - hr,
            HrMaxModel::LondereeMoeschberger => (hr - 206.3) / -0.711,
            HrMaxModel::Miller => (hr - 217.0) / -0.85,
            HrMaxModel::Nes => (hr - 211.0) / -0.64,
            HrMaxModel::OaklandLinear => (hr - 206.9) / -0.67,
            HrMaxModel::OaklandNonlinear => 5.0 * (3830.0 - 20.0 * hr).sqrt(),
            HrMaxModel::OaklandNonlinear2 => (-10.0 / 9.0) * ((8176.0 - 45.0 * hr).sqrt() - 29.0),
            HrMaxModel::RobergsLandwehr => (hr - 205.8) / -0.685,
        }
    }
}

/// Age-predicted HRmax for older adults, 208 - 0.7 age (Fox)
pub fn hr_max(age: f64) -> f64 {
    HrMaxModel::Fox.predict(age)
}

pub fn max_fox(age: f64) -> f64 {
    HrMaxModel::Fox.predict(age)
}

pub fn max_gellish(age: f64) -> f64 {
    HrMaxModel::Gellish.predict(age)
}

pub fn max_astrand(age: f64) -> f64 {
    HrMaxModel::Astrand.predict(age)
}

pub fn max_tanaka(age: f64) -> f64 {
    HrMaxModel::Tanaka.predict(age)
}

pub fn max_gulati(age: f64) -> f64 {
    HrMaxModel::Gulati.predict(age)
}

pub fn max_haskell_fox(age: f64) -> f64 {
    HrMaxModel::HaskellFox.predict(age)
}

pub fn max_londeree_moeschberger(age: f64) -> f64 {
    HrMaxModel::LondereeMoeschberger.predict(age)
}

pub fn max_miller(age: f64) -> f64 {
    HrMaxModel::Miller.predict(age)
}

pub fn max_nes(age: f64) -> f64 {
    HrMaxModel::Nes.predict(age)
}

pub fn max_oakland_linear(age: f64) -> f64 {
    HrMaxModel::OaklandLinear.predict(age)
}

pub fn max_oakland_nonlinear(age: f64) -> f64 {
    HrMaxModel::OaklandNonlinear.predict(age)
}

pub fn max_oakland_nonlinear2(age: f64) -> f64 {
    HrMaxModel::OaklandNonlinear2.predict(age)
}

pub fn max_robergs_landwehr(age: f64) -> f64 {
    HrMaxModel::RobergsLandwehr.predict(age)
}

/// Mean arterial pressure in mmHg
///
/// # Arguments
/// * `diastolic_bp` - Diastolic blood pressure in mmHg
/// * `systolic_bp` - Systolic blood pressure in mmHg
pub fn mean_arterial_pressure(diastolic_bp: f64, systolic_bp: f64) -> f64 {
    (2.0 * diastolic_bp + systolic_bp) / 3.0
}

/// Target heart rate by the heart-rate reserve (Karvonen) method
///
/// ACSM recommends intensities of 40% to 85% of HRR.
///
/// # Arguments
/// * `intensity` - Relative intensity as a fraction (0.10 = 10%)
/// * `rest` - Resting heart rate
/// * `max` - Maximum heart rate
pub fn target_hr(intensity: f64, rest: f64, max: f64) -> f64 {
    intensity * (max - rest) + rest
}

/// Zoladz zone marker: HRmax minus a fixed adjuster (e.g. 50, 40, 30, 20, 10 bpm)
pub fn zoladz(hr_max: f64, adjuster: f64) -> f64 {
    hr_max - adjuster
}

/// METs from the ratio of peak to resting heart rate (Wicks et al., 2011)
pub fn mets_estimator(max_hr: f64, resting_hr: f64) -> f64 {
    let hr_index = max_hr / resting_hr;
    6.0 * hr_index - 5.0
}

macro_rules! hr_max_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("hr", $name, Cardiovascular, Unary($func),
            ("age": Years / NonNegative) -> BeatsPerMinute,
            $citation)
    };
}

pub(crate) static HEART_RATE_FORMULAS: &[FormulaDescriptor] = &[
    formula!("hr", "hr_zones", Cardiovascular, Zones(hr_zones),
        ("max_hr": BeatsPerMinute / Positive) -> BeatsPerMinute,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    hr_max_formula!("hr_max", hr_max, "Fox SM, Naughton JP, Haskell WL (1971). Ann Clin Res 3:404-432"),
    hr_max_formula!("maxFox", max_fox, "Fox SM, Naughton JP, Haskell WL (1971). Ann Clin Res 3:404-432"),
    hr_max_formula!("hr_max_gellish", max_gellish, "Gellish RL, et al. (2007). Med Sci Sports Exerc 39(5):822-829"),
    hr_max_formula!("maxGellish", max_gellish, "Gellish RL, et al. (2007). Med Sci Sports Exerc 39(5):822-829"),
    hr_max_formula!("maxAstrand", max_astrand, "Astrand PO (1952). Experimental Studies of Physical Working Capacity"),
    hr_max_formula!("maxTanaka", max_tanaka, "Tanaka H, Monahan KD, Seals DR (2001). J Am Coll Cardiol 37(1):153-156"),
    hr_max_formula!("maxGulati", max_gulati, "Gulati M, et al. (2010). Circulation 122(2):130-137"),
    hr_max_formula!("maxHaskellFox", max_haskell_fox, "Fox SM, Haskell WL (1970). Physical activity and the prevention of coronary heart disease"),
    hr_max_formula!("maxLondereeMoeschberger", max_londeree_moeschberger, "Londeree BR, Moeschberger ML (1982). Res Q Exerc Sport 53(4):297-304"),
    hr_max_formula!("maxMiller", max_miller, "Miller WC, Wallace JP, Eggert KE (1993). Med Sci Sports Exerc 25(9):1077-1081"),
    hr_max_formula!("maxNes", max_nes, "Nes BM, et al. (2013). Scand J Med Sci Sports 23(6):697-704"),
    hr_max_formula!("maxOaklandLinear", max_oakland_linear, "Robergs RA, Landwehr R (2002). J Exerc Physiol Online 5(2):1-10"),
    hr_max_formula!("maxOaklandNonlinear", max_oakland_nonlinear, "Robergs RA, Landwehr R (2002). J Exerc Physiol Online 5(2):1-10"),
    hr_max_formula!("maxOaklandNonlinear2", max_oakland_nonlinear2, "Robergs RA, Landwehr R (2002). J Exerc Physiol Online 5(2):1-10"),
    hr_max_formula!("maxRobergsLandwehr", max_robergs_landwehr, "Robergs RA, Landwehr R (2002). J Exerc Physiol Online 5(2):1-10"),
    formula!("hr", "mean_arterial_pressure", Cardiovascular, Binary(mean_arterial_pressure),
        ("diastolic_bp": MillimetersOfMercury / Positive, "systolic_bp": MillimetersOfMercury / Positive)
            -> MillimetersOfMercury,
        "Klabunde RE (2011). Cardiovascular Physiology Concepts, 2nd ed."),
    formula!("hr", "target_hr", Cardiovascular, Ternary(target_hr),
        ("intensity": Fraction / Fraction, "rest": BeatsPerMinute / Positive, "max": BeatsPerMinute / Positive)
            -> BeatsPerMinute,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("hr", "zoladz", Cardiovascular, Binary(zoladz),
        ("hr_max": BeatsPerMinute / Positive, "adjuster": BeatsPerMinute / NonNegative) -> BeatsPerMinute,
        "Zoladz JA, et al. (1998). Eur J Appl Physiol 77(5):445-451"),
    formula!("hr", "mets_estimator", Cardiovascular, Binary(mets_estimator),
        ("max_hr": BeatsPerMinute / Positive, "resting_hr": BeatsPerMinute / Positive) -> Mets,
        "Wicks JR, et al. (2011). Med Sci Sports Exerc 43(11):2082-2090"),
];
