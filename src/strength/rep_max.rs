//! One-repetition maximum (1RM) prediction
//!
//! Most equations take `(reps, weight)`: the number of repetitions completed to
//! fatigue with a submaximal load, and that load. The result is in the unit of
//! the load. The population-specific equations state their units separately.

use crate::catalogue::FormulaDescriptor;
use serde::{Deserialize, Serialize};

/// Brzycki (1993); slightly below Epley under 10 reps
pub fn brzycki(reps: f64, weight: f64) -> f64 {
    weight / (1.0278 - 0.0278 * reps)
}

/// Epley (1985); slightly above Brzycki under 10 reps
pub fn epley(reps: f64, weight: f64) -> f64 {
    weight * reps * 0.033 + weight
}

/// Lander (1985)
pub fn lander(reps: f64, weight: f64) -> f64 {
    weight / (1.013 - 0.0267123 * reps)
}

/// Lombardi (1989)
pub fn lombardi(reps: f64, weight: f64) -> f64 {
    weight * reps.powf(0.10)
}

/// Mayhew et al. (1992)
pub fn mayhew(reps: f64, weight: f64) -> f64 {
    100.0 * weight / (52.2 + 41.9 * (-0.055 * reps).exp())
}

/// Bench-press 1RM in pounds for college football players from repetitions
/// completed with 225 lb (Mayhew et al., 1999)
pub fn mayhew_football(reps: f64) -> f64 {
    226.7 + 7.1 * reps
}

/// O'Connor et al. (1989)
pub fn oconnor(reps: f64, weight: f64) -> f64 {
    weight * (1.0 + 0.025 * reps)
}

/// Wathen (1994)
pub fn wathen(reps: f64, weight: f64) -> f64 {
    100.0 * weight / (48.8 + 53.8 * (-0.075 * reps).exp())
}

/// Baechle, Earle & Wathen (2000)
pub fn baechle(reps: f64, weight: f64) -> f64 {
    weight * (1.0 + 0.033 * reps)
}

/// McGlothin (1985)
pub fn mcglothin(reps: f64, weight: f64) -> f64 {
    100.0 * weight / (101.3 - 2.67123 * reps)
}

/// College-aged women, 7 to 10 reps (Abadie & Wentworth, 2000)
pub fn abadie(weight: f64) -> f64 {
    7.24 + 1.05 * weight
}

/// Chest-press 1RM from a 5RM load (Reynolds, Gordon & Robergs, 2006)
pub fn reynolds_chest_press(five_rm: f64) -> f64 {
    1.1307 * five_rm + 0.6998
}

/// Leg-press 1RM from a 5RM load (Reynolds, Gordon & Robergs, 2006)
pub fn reynolds_leg_press(five_rm: f64) -> f64 {
    1.09703 * five_rm + 14.2546
}

/// 1RM estimators that can also be solved for the load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepMaxModel {
    Baechle,
    Brzycki,
    Epley,
    Lander,
    Lombardi,
    Mayhew,
    McGlothin,
    OConnor,
    Wathen,
}

impl RepMaxModel {
    pub const ALL: [RepMaxModel; 9] = [
        RepMaxModel::Baechle,
        RepMaxModel::Brzycki,
        RepMaxModel::Epley,
        RepMaxModel::Lander,
        RepMaxModel::Lombardi,
        RepMaxModel::Mayhew,
        RepMaxModel::McGlothin,
        RepMaxModel::OConnor,
        RepMaxModel::Wathen,
    ];

    /// Fraction of 1RM that can be lifted `reps` times
    pub fn fraction(&self, reps: f64) -> f64 {
        match self {
            RepMaxModel::Baechle | RepMaxModel::Epley => 1.0 / (1.0 + 0.033 * reps),
            RepMaxModel::Brzycki => 1.0278 - 0.0278 * reps,
            RepMaxModel::Lander => 1.013 - 0.0267123 * reps,
            RepMaxModel::Lombardi => 1.0 / reps.powf(0.10),
            RepMaxModel::Mayhew => (52.2 + 41.9 * (-0.055 * reps).exp()) / 100.0,
            RepMaxModel::McGlothin => (101.3 - 2.67123 * reps) / 100.0,
            RepMaxModel::OConnor => 40.0 / (reps + 40.0),
            RepMaxModel::Wathen => (48.8 + 53.8 * (-0.075 * reps).exp()) / 100.0,
        }
    }

    /// Predicted 1RM from `reps` completed with `weight`
    pub fn predict(&self, reps: f64, weight: f64) -> f64 {
        match self {
            RepMaxModel::Baechle => baechle(reps, weight),
            RepMaxModel::Brzycki => brzycki(reps, weight),
            RepMaxModel::Epley => epley(reps, weight),
            RepMaxModel::Lander => lander(reps, weight),
            RepMaxModel::Lombardi => lombardi(reps, weight),
            RepMaxModel::Mayhew => mayhew(reps, weight),
            RepMaxModel::McGlothin => mcglothin(reps, weight),
            RepMaxModel::OConnor => oconnor(reps, weight),
            RepMaxModel::Wathen => wathen(reps, weight),
        }
    }

    /// Load that can be lifted `reps` times given a 1RM
    pub fn load(&self, reps: f64, rm: f64) -> f64 {
        rm * self.fraction(reps)
    }
}

pub fn baechle_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Baechle.load(reps, rm)
}

pub fn brzycki_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Brzycki.load(reps, rm)
}

pub fn lander_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Lander.load(reps, rm)
}

pub fn lombardi_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Lombardi.load(reps, rm)
}

pub fn mayhew_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Mayhew.load(reps, rm)
}

pub fn mcglothin_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::McGlothin.load(reps, rm)
}

pub fn oconnor_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::OConnor.load(reps, rm)
}

pub fn wathen_load(reps: f64, rm: f64) -> f64 {
    RepMaxModel::Wathen.load(reps, rm)
}

/// Training load for a 1RM under the Abadie equation
pub fn abadie_load(rm: f64) -> f64 {
    (rm - 7.24) / 1.05
}

/// 1RM from repetitions to fatigue in one set of at most 10 reps
pub fn fatigue_rep_map(reps: f64, weight: f64) -> f64 {
    weight / (1.0278 - reps * 0.0278)
}

/// 1RM from two submaximal sets, each under 10 reps, loads in the same unit
pub fn two_set_max(rep1: f64, weight1: f64, rep2: f64, weight2: f64) -> f64 {
    (weight1 - weight2) / (rep2 - rep1) * (rep1 - 1.0) + weight1
}

/// 1RM divided by body mass; both in the same unit
pub fn relative_strength(rm: f64, weight: f64) -> f64 {
    rm / weight
}

/// YMCA bench press test, men 22-36 years (Kim, Mayhew & Peterson, 2002), kg
pub fn ymca_upper_body_rep_max_male(reps: f64) -> f64 {
    1.55 * reps + 37.9
}

/// YMCA bench press test, women 22-36 years (Kim, Mayhew & Peterson, 2002), kg
pub fn ymca_upper_body_rep_max_female(reps: f64) -> f64 {
    0.31 * reps + 19.2
}

/// Women 40-50 years (Kuramoto & Payne, 1995)
pub fn female_middle_age_rep_max(age: f64, reps: f64, weight: f64) -> f64 {
    1.06 * weight + 0.58 * reps - 0.20 * age - 3.41
}

/// Women 60-70 years (Kuramoto & Payne, 1995)
pub fn female_older_rep_max(age: f64, reps: f64, weight: f64) -> f64 {
    0.92 * weight + 0.79 * reps - 0.20 * age - 3.73
}

/// Hip-exercise 1RM for adult women, Wathen form
pub fn female_hip_rep_max(reps: f64, weight: f64) -> f64 {
    wathen(reps, weight)
}

macro_rules! rm_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("rm", $name, StrengthPower, Binary($func),
            ("reps": Repetitions / NonNegative, "weight": Kilograms / Positive) -> Kilograms,
            $citation)
    };
}

macro_rules! load_formula {
    ($name:literal, $func:path, $citation:literal) => {
        formula!("rm", $name, StrengthPower, Binary($func),
            ("reps": Repetitions / NonNegative, "rm": Kilograms / Positive) -> Kilograms,
            $citation)
    };
}

macro_rules! kuramoto_formula {
    ($name:literal, $func:path) => {
        formula!("rm", $name, StrengthPower, Ternary($func),
            ("age": Years / NonNegative, "reps": Repetitions / NonNegative,
             "weight": Kilograms / Positive) -> Kilograms,
            "Kuramoto AK, Payne VG (1995). J Strength Cond Res 9:1-4")
    };
}

pub(crate) static REP_MAX_FORMULAS: &[FormulaDescriptor] = &[
    rm_formula!("brzycki", brzycki, "Brzycki M (1993). JOPERD 64:88-90"),
    rm_formula!("epley", epley, "Epley B (1985). Poundage Chart. Boyd Epley Workout"),
    rm_formula!("lander", lander, "Lander J (1985). NSCA Journal 6:60-61"),
    rm_formula!("lombardi", lombardi, "Lombardi VP (1989). Beginning Weight Training"),
    rm_formula!("mayhew", mayhew, "Mayhew JL, et al. (1992). J Appl Sport Sci Res 6:200-206"),
    formula!("rm", "mayhewFootball", StrengthPower, Unary(mayhew_football),
        ("reps": Repetitions / NonNegative) -> Pounds,
        "Mayhew JL, et al. (1999). J Strength Cond Res 13:130-134"),
    rm_formula!("oconnor", oconnor, "O'Connor B, Simmons J, O'Shea P (1989). Weight Training Today"),
    rm_formula!("wathen", wathen, "Wathen D (1994). Essentials of Strength Training and Conditioning"),
    rm_formula!("baechle", baechle,
        "Baechle TR, Earle RW, Wathen D (2000). Essentials of Strength Training and Conditioning, 2nd ed."),
    rm_formula!("mcglothin", mcglothin, "McGlothin (1985), in LeSuer DA, et al. (1997). J Strength Cond Res 11:211-213"),
    formula!("rm", "abadie", StrengthPower, Unary(abadie),
        ("weight": Kilograms / Positive) -> Kilograms,
        "Abadie BR, Wentworth MC (2000). J Exerc Physiol Online 3(3):1-5"),
    formula!("rm", "reynoldsChestPress", StrengthPower, Unary(reynolds_chest_press),
        ("five_rm": Kilograms / Positive) -> Kilograms,
        "Reynolds JM, Gordon TJ, Robergs RA (2006). J Strength Cond Res 20:584-592"),
    formula!("rm", "reynoldsLegPress", StrengthPower, Unary(reynolds_leg_press),
        ("five_rm": Kilograms / Positive) -> Kilograms,
        "Reynolds JM, Gordon TJ, Robergs RA (2006). J Strength Cond Res 20:584-592"),
    load_formula!("baechleLoad", baechle_load,
        "Baechle TR, Earle RW, Wathen D (2000). Essentials of Strength Training and Conditioning, 2nd ed."),
    load_formula!("brzyckiLoad", brzycki_load, "Brzycki M (1993). JOPERD 64:88-90"),
    load_formula!("landerLoad", lander_load, "Lander J (1985). NSCA Journal 6:60-61"),
    load_formula!("lombardiLoad", lombardi_load, "Lombardi VP (1989). Beginning Weight Training"),
    load_formula!("mayhewLoad", mayhew_load, "Mayhew JL, et al. (1992). J Appl Sport Sci Res 6:200-206"),
    load_formula!("mcglothinLoad", mcglothin_load,
        "McGlothin (1985), in LeSuer DA, et al. (1997). J Strength Cond Res 11:211-213"),
    load_formula!("oconnorLoad", oconnor_load, "O'Connor B, Simmons J, O'Shea P (1989). Weight Training Today"),
    load_formula!("wathenLoad", wathen_load, "Wathen D (1994). Essentials of Strength Training and Conditioning"),
    formula!("rm", "abadieLoad", StrengthPower, Unary(abadie_load),
        ("rm": Kilograms / Positive) -> Kilograms,
        "Abadie BR, Wentworth MC (2000). J Exerc Physiol Online 3(3):1-5"),
    rm_formula!("fatigue_rep_map", fatigue_rep_map, "Brzycki M (1993). JOPERD 64:88-90"),
    formula!("rm", "two_set_max", StrengthPower, Quaternary(two_set_max),
        ("rep1": Repetitions / NonNegative, "weight1": Kilograms / Positive,
         "rep2": Repetitions / NonNegative, "weight2": Kilograms / Positive) -> Kilograms,
        "Baechle TR, Earle RW (2008). Essentials of Strength Training and Conditioning, 3rd ed."),
    formula!("rm", "relative_strength", StrengthPower, Binary(relative_strength),
        ("rm": Kilograms / NonNegative, "weight": Kilograms / Positive) -> Dimensionless,
        "Baechle TR, Earle RW (2008). Essentials of Strength Training and Conditioning, 3rd ed."),
    formula!("rm", "ymca_upper_body_rep_max_male", StrengthPower, Unary(ymca_upper_body_rep_max_male),
        ("reps": Repetitions / NonNegative) -> Kilograms,
        "Kim PS, Mayhew JL, Peterson DF (2002). J Strength Cond Res 16:440-445"),
    formula!("rm", "ymca_upper_body_rep_max_female", StrengthPower,
        Unary(ymca_upper_body_rep_max_female),
        ("reps": Repetitions / NonNegative) -> Kilograms,
        "Kim PS, Mayhew JL, Peterson DF (2002). J Strength Cond Res 16:440-445"),
    kuramoto_formula!("female_middle_age_rep_max", female_middle_age_rep_max),
    kuramoto_formula!("female_older_rep_max", female_older_rep_max),
    rm_formula!("female_hip_rep_max", female_hip_rep_max,
        "Wathen D (1994). Essentials of Strength Training and Conditioning"),
];
