//! Field and laboratory VO2 assessment protocols
//!
//! Unless noted, results are oxygen uptake in mL/kg/min, weights in kilograms,
//! times in minutes and heart rates in beats per minute. Many protocols come in
//! sex-specific fits; those are separate functions.

use crate::catalogue::FormulaDescriptor;
use crate::running::daniels;

const MALE: f64 = 1.0;
const FEMALE: f64 = 0.0;

/// VO2 reserve: maximal minus resting oxygen uptake
pub fn vo2_reserve(max: f64, rest: f64) -> f64 {
    max - rest
}

/// Target VO2 by the VO2-reserve method
///
/// # Arguments
/// * `intensity` - Relative intensity as a fraction
/// * `max` - VO2max
/// * `rest` - Resting VO2 (3.5 mL/kg/min by convention)
pub fn vo2_target(intensity: f64, max: f64, rest: f64) -> f64 {
    intensity * vo2_reserve(max, rest) + rest
}

/// Cooper 12-minute run, distance in metres
pub fn twelve_min_vo2(distance: f64) -> f64 {
    0.0268 * distance - 11.3
}

/// Balke 15-minute run, distance in metres
pub fn fifteen_min_vo2(distance: f64) -> f64 {
    0.0178 * distance + 9.6
}

/// Steady-state one-mile jog, women (George et al., 1993)
///
/// # Arguments
/// * `weight` - Body mass in kg
/// * `time` - Mile time in minutes
/// * `hr` - Heart rate at the end of the mile
pub fn mile_steady_jog_vo2(weight: f64, time: f64, hr: f64) -> f64 {
    100.5 - 0.1636 * weight - 1.438 * time - 0.1928 * hr
}

/// Steady-state one-mile jog, men (George et al., 1993)
pub fn mile_steady_jog_vo2_male(weight: f64, time: f64, hr: f64) -> f64 {
    mile_steady_jog_vo2(weight, time, hr) + 8.344
}

/// ACSM leg ergometry equation
///
/// # Arguments
/// * `mass` - Body mass in kg
/// * `work` - Work rate in kgm/min
pub fn leg_ergometry(mass: f64, work: f64) -> f64 {
    1.8 * work / mass + 3.5
}

/// ACSM arm ergometry equation, work rate in kgm/min
pub fn arm_ergometry(mass: f64, work: f64) -> f64 {
    3.0 * work / mass
}

/// ACSM stepping equation
///
/// # Arguments
/// * `height` - Step height in metres
/// * `frequency` - Stepping rate in steps/min
pub fn stepping_vo2(height: f64, frequency: f64) -> f64 {
    frequency * 0.2 + frequency * height * 1.8 * 1.33
}

/// ACSM walking equation, gross VO2
///
/// # Arguments
/// * `speed` - Speed in m/min
/// * `grade` - Grade as a fraction
pub fn walking_gross_vo2(speed: f64, grade: f64) -> f64 {
    0.1 * speed + 1.8 * speed * grade + 3.5
}

/// ACSM running equation, gross VO2
pub fn running_gross_vo2(speed: f64, grade: f64) -> f64 {
    0.2 * speed + 0.9 * speed * grade + 3.5
}

/// StairMaster stepper setting to METs
pub fn stairmaster_mets(setting: f64) -> f64 {
    0.556 + 7.45 * setting
}

/// Fox single-stage cycle ergometer test, result in mL/min
///
/// `hr5` is the heart rate after five minutes at 150 W.
pub fn fox_ergometry_vo2max(hr5: f64) -> f64 {
    6300.0 - 19.26 * hr5
}

fn treadmill_walk(age: f64, speed: f64, hr: f64, sex: f64) -> f64 {
    15.1 + 21.8 * speed - 0.327 * hr - 0.263 * age + 0.00504 * (hr * age) + 5.48 * sex
}

/// Single-stage treadmill walking test, men (Ebbeling et al., 1991)
///
/// # Arguments
/// * `age` - Age in years
/// * `speed` - Walking speed in mph
/// * `hr` - Steady-state heart rate
pub fn treadmill_walk_vo2max_male(age: f64, speed: f64, hr: f64) -> f64 {
    treadmill_walk(age, speed, hr, MALE)
}

/// Single-stage treadmill walking test, women (Ebbeling et al., 1991)
pub fn treadmill_walk_vo2max_female(age: f64, speed: f64, hr: f64) -> f64 {
    treadmill_walk(age, speed, hr, FEMALE)
}

fn mile_walk(weight: f64, age: f64, time: f64, hr: f64, sex: f64) -> f64 {
    132.853 - 0.0769 * weight - 0.3877 * age + 6.315 * sex - 3.2649 * time - 0.1565 * hr
}

/// Rockport one-mile walk test, men (Kline et al., 1987)
///
/// Weight here is in pounds, as published.
pub fn mile_walk_vo2_male(weight: f64, age: f64, time: f64, hr: f64) -> f64 {
    mile_walk(weight, age, time, hr, MALE)
}

/// Rockport one-mile walk test, women (Kline et al., 1987)
pub fn mile_walk_vo2_female(weight: f64, age: f64, time: f64, hr: f64) -> f64 {
    mile_walk(weight, age, time, hr, FEMALE)
}

fn mile_half_george(weight: f64, time: f64, sex: f64) -> f64 {
    88.02 - 0.1656 * weight - 2.76 * time + 3.716 * sex
}

/// 1.5-mile run, men (George et al., 1993)
pub fn mile_half_vo2_george_male(weight: f64, time: f64) -> f64 {
    mile_half_george(weight, time, MALE)
}

/// 1.5-mile run, women (George et al., 1993)
pub fn mile_half_vo2_george_female(weight: f64, time: f64) -> f64 {
    mile_half_george(weight, time, FEMALE)
}

fn mile_half_larson(weight: f64, time: f64, hr: f64, sex: f64) -> f64 {
    100.16 + 7.30 * sex - 0.164 * weight - 1.273 * time - 0.1563 * hr
}

/// 1.5-mile run with exit heart rate, men (Larsen et al., 2002)
pub fn mile_half_vo2_larson_male(weight: f64, time: f64, hr: f64) -> f64 {
    mile_half_larson(weight, time, hr, MALE)
}

/// 1.5-mile run with exit heart rate, women (Larsen et al., 2002)
pub fn mile_half_vo2_larson_female(weight: f64, time: f64, hr: f64) -> f64 {
    mile_half_larson(weight, time, hr, FEMALE)
}

/// Astrand-Ryhming step test, men, result in L/min
pub fn step_test_astrand(weight: f64, hr: f64) -> f64 {
    3.744 * (weight + 5.0) / (hr - 62.0)
}

/// Astrand-Ryhming step test, women, result in L/min
pub fn step_test_astrand_female(weight: f64, hr: f64) -> f64 {
    3.750 * (weight + 3.0) / (hr - 65.0)
}

/// Queens College step test, men, from recovery heart rate
pub fn step_test_queenscollege(hr: f64) -> f64 {
    111.33 - 0.42 * hr
}

/// Queens College step test, women, from recovery heart rate
pub fn step_test_queenscollege_female(hr: f64) -> f64 {
    65.81 - 0.1847 * hr
}

fn treadmill_jogging(weight: f64, speed: f64, hr: f64, sex: f64) -> f64 {
    54.07 - 0.1938 * weight - 4.47 * speed + 0.01453 * hr + 7.062 * sex
}

/// Single-stage treadmill jogging test, men (George et al., 1993), speed in mph
pub fn treadmill_jogging_vo2max_male(weight: f64, speed: f64, hr: f64) -> f64 {
    treadmill_jogging(weight, speed, hr, MALE)
}

/// Single-stage treadmill jogging test, women (George et al., 1993), speed in mph
pub fn treadmill_jogging_vo2max_female(weight: f64, speed: f64, hr: f64) -> f64 {
    treadmill_jogging(weight, speed, hr, FEMALE)
}

/// Single-stage submaximal treadmill extrapolation, men
///
/// Extrapolates the submaximal VO2 `sm1` measured at heart rate `hr1` to
/// `hrmax`, anchored at a resting heart rate of 61.
pub fn treadmill_submax_vo2_male_single_stage(sm1: f64, hr1: f64, hrmax: f64) -> f64 {
    sm1 * (hrmax - 61.0) / (hr1 - 61.0)
}

/// Single-stage submaximal treadmill extrapolation, women (anchor 72)
pub fn treadmill_submax_vo2_female_single_stage(sm1: f64, hr1: f64, hrmax: f64) -> f64 {
    sm1 * (hrmax - 72.0) / (hr1 - 72.0)
}

/// Multi-stage submaximal extrapolation
///
/// Fits a line through two (VO2, heart rate) stages and extends it to `hrmax`.
pub fn treadmill_submax_vo2_multi_stage(sm1: f64, hr1: f64, sm2: f64, hr2: f64, hrmax: f64) -> f64 {
    let slope = (sm2 - sm1) / (hr2 - hr1);
    sm2 + slope * (hrmax - hr2)
}

/// One-mile run for children aged 8 to 17 (Cureton et al., 1995)
///
/// # Arguments
/// * `weight` - Body mass in kg
/// * `height` - Height in cm
/// * `age` - Age in years
/// * `time` - Mile time in minutes
pub fn mile_vo2_child(weight: f64, height: f64, age: f64, time: f64) -> f64 {
    let bmi = weight / (height / 100.0).powi(2);
    108.94 - 8.41 * time + 0.34 * time.powi(2) + 0.21 * age - 0.84 * bmi
}

/// Balke treadmill protocol, men, from test time in minutes
pub fn vo2max_balke_male(time: f64) -> f64 {
    1.444 * time + 14.99
}

/// Balke treadmill protocol, women
pub fn vo2max_balke_female(time: f64) -> f64 {
    1.38 * time + 5.22
}

/// Naughton treadmill protocol, men
pub fn vo2max_naughton_male(time: f64) -> f64 {
    1.61 * time + 3.60
}

/// Bruce treadmill protocol, active and sedentary men (Foster et al., 1984)
///
/// The cubic fit is expressed in its three powers of test time.
///
/// # Arguments
/// * `time` - Test time in minutes
/// * `time2` - Test time squared
/// * `time3` - Test time cubed
pub fn vo2max_bruce_male(time: f64, time2: f64, time3: f64) -> f64 {
    14.76 - 1.379 * time + 0.451 * time2 - 0.012 * time3
}

/// Bruce treadmill protocol, active and sedentary women
pub fn vo2max_bruce_female(time: f64) -> f64 {
    4.38 * time - 3.90
}

/// Bruce treadmill protocol, elderly cardiac patients
pub fn vo2max_elderlycardiac(time: f64) -> f64 {
    2.282 * time + 8.545
}

/// 20 m shuttle run for ages 8 to 19 (Leger et al., 1988)
///
/// # Arguments
/// * `age` - Age in years
/// * `speed` - Final stage speed in km/h
pub fn shuttle_run_vo2(age: f64, speed: f64) -> f64 {
    31.025 + 3.238 * speed - 3.248 * age + 0.1536 * (age * speed)
}

/// Daniels-Gilbert VDOT from a race performance
///
/// Oxygen cost of the average velocity divided by the fraction of VO2max
/// sustainable for the race duration.
///
/// # Arguments
/// * `velocity` - Race velocity in m/min
/// * `time` - Race duration in minutes
pub fn gilbert_daniels(velocity: f64, time: f64) -> f64 {
    daniels::vo2(velocity) / daniels::vo2_percentage(time)
}

/// Uth-Sorensen-Overgaard-Pedersen VO2max from the HRmax/HRrest ratio
pub fn usop_vo2max(hr_max: f64, resting_hr: f64) -> f64 {
    15.3 * hr_max / resting_hr
}

pub(crate) static ASSESSMENT_FORMULAS: &[FormulaDescriptor] = &[
    formula!("assessment", "vo2_reserve", Cardiovascular, Binary(vo2_reserve),
        ("max": MlPerKgPerMin / Positive, "rest": MlPerKgPerMin / Positive) -> MlPerKgPerMin,
        "Swain DP, Leutholtz BC (1997). Med Sci Sports Exerc 29(3):410-414"),
    formula!("assessment", "vo2_target", Cardiovascular, Ternary(vo2_target),
        ("intensity": Fraction / Fraction, "max": MlPerKgPerMin / Positive, "rest": MlPerKgPerMin / Positive)
            -> MlPerKgPerMin,
        "Swain DP, Leutholtz BC (1997). Med Sci Sports Exerc 29(3):410-414"),
    formula!("assessment", "twelve_min_vo2", Cardiovascular, Unary(twelve_min_vo2),
        ("distance": Meters / Positive) -> MlPerKgPerMin,
        "Cooper KH (1968). JAMA 203(3):201-204"),
    formula!("assessment", "fifteen_min_vo2", Cardiovascular, Unary(fifteen_min_vo2),
        ("distance": Meters / Positive) -> MlPerKgPerMin,
        "Balke B (1963). Civil Aeromedical Research Institute Report 63-6"),
    formula!("assessment", "mile_steady_jog_vo2", Cardiovascular, Ternary(mile_steady_jog_vo2),
        ("weight": Kilograms / Positive, "time": Minutes / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(3):401-406"),
    formula!("assessment", "mile_steady_jog_vo2_male", Cardiovascular, Ternary(mile_steady_jog_vo2_male),
        ("weight": Kilograms / Positive, "time": Minutes / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(3):401-406"),
    formula!("assessment", "leg_ergometry", Cardiovascular, Binary(leg_ergometry),
        ("mass": Kilograms / Positive, "work": KilogramMetersPerMinute / NonNegative) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "arm_ergometry", Cardiovascular, Binary(arm_ergometry),
        ("mass": Kilograms / Positive, "work": KilogramMetersPerMinute / NonNegative) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "stepping_vo2", Cardiovascular, Binary(stepping_vo2),
        ("height": Meters / NonNegative, "frequency": StepsPerMinute / NonNegative) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "walking_gross_vo2", Cardiovascular, Binary(walking_gross_vo2),
        ("speed": MetersPerMinute / NonNegative, "grade": Fraction / Any) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "running_gross_vo2", Cardiovascular, Binary(running_gross_vo2),
        ("speed": MetersPerMinute / NonNegative, "grade": Fraction / Any) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "stairmaster_mets", Cardiovascular, Unary(stairmaster_mets),
        ("setting": Dimensionless / NonNegative) -> Mets,
        "Howley ET, et al. (1992). Med Sci Sports Exerc 24(9):1055-1058"),
    formula!("assessment", "fox_ergometry_vo2max", Cardiovascular, Unary(fox_ergometry_vo2max),
        ("hr5": BeatsPerMinute / Positive) -> MlPerMin,
        "Fox EL (1973). J Appl Physiol 34(6):733-737"),
    formula!("assessment", "treadmill_walk_vo2max_male", Cardiovascular, Ternary(treadmill_walk_vo2max_male),
        ("age": Years / NonNegative, "speed": MilesPerHour / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "Ebbeling CB, et al. (1991). Med Sci Sports Exerc 23(8):966-973"),
    formula!("assessment", "treadmill_walk_vo2max_female", Cardiovascular, Ternary(treadmill_walk_vo2max_female),
        ("age": Years / NonNegative, "speed": MilesPerHour / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "Ebbeling CB, et al. (1991). Med Sci Sports Exerc 23(8):966-973"),
    formula!("assessment", "mile_walk_vo2_male", Cardiovascular, Quaternary(mile_walk_vo2_male),
        ("weight": Pounds / Positive, "age": Years / NonNegative, "time": Minutes / Positive,
         "hr": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "Kline GM, et al. (1987). Med Sci Sports Exerc 19(3):253-259"),
    formula!("assessment", "mile_walk_vo2_female", Cardiovascular, Quaternary(mile_walk_vo2_female),
        ("weight": Pounds / Positive, "age": Years / NonNegative, "time": Minutes / Positive,
         "hr": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "Kline GM, et al. (1987). Med Sci Sports Exerc 19(3):253-259"),
    formula!("assessment", "mile_half_vo2_george_male", Cardiovascular, Binary(mile_half_vo2_george_male),
        ("weight": Kilograms / Positive, "time": Minutes / Positive) -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(3):401-406"),
    formula!("assessment", "mile_half_vo2_george_female", Cardiovascular, Binary(mile_half_vo2_george_female),
        ("weight": Kilograms / Positive, "time": Minutes / Positive) -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(3):401-406"),
    formula!("assessment", "mile_half_vo2_larson_male", Cardiovascular, Ternary(mile_half_vo2_larson_male),
        ("weight": Kilograms / Positive, "time": Minutes / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "Larsen GE, et al. (2002). Med Sci Sports Exerc 34(12):2076-2081"),
    formula!("assessment", "mile_half_vo2_larson_female", Cardiovascular, Ternary(mile_half_vo2_larson_female),
        ("weight": Kilograms / Positive, "time": Minutes / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "Larsen GE, et al. (2002). Med Sci Sports Exerc 34(12):2076-2081"),
    formula!("assessment", "step_test_astrand", Cardiovascular, Binary(step_test_astrand),
        ("weight": Kilograms / Positive, "hr": BeatsPerMinute / Positive) -> Liters,
        "Astrand PO, Ryhming I (1954). J Appl Physiol 7(2):218-221"),
    formula!("assessment", "step_test_astrand_female", Cardiovascular, Binary(step_test_astrand_female),
        ("weight": Kilograms / Positive, "hr": BeatsPerMinute / Positive) -> Liters,
        "Astrand PO, Ryhming I (1954). J Appl Physiol 7(2):218-221"),
    formula!("assessment", "step_test_queenscollege", Cardiovascular, Unary(step_test_queenscollege),
        ("hr": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "McArdle WD, et al. (1972). Med Sci Sports 4(4):182-186"),
    formula!("assessment", "step_test_queenscollege_female", Cardiovascular, Unary(step_test_queenscollege_female),
        ("hr": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "McArdle WD, et al. (1972). Med Sci Sports 4(4):182-186"),
    formula!("assessment", "treadmill_jogging_vo2max_male", Cardiovascular, Ternary(treadmill_jogging_vo2max_male),
        ("weight": Kilograms / Positive, "speed": MilesPerHour / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(5):643-647"),
    formula!("assessment", "treadmill_jogging_vo2max_female", Cardiovascular, Ternary(treadmill_jogging_vo2max_female),
        ("weight": Kilograms / Positive, "speed": MilesPerHour / Positive, "hr": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "George JD, et al. (1993). Med Sci Sports Exerc 25(5):643-647"),
    formula!("assessment", "treadmill_submax_vo2_male_single_stage", Cardiovascular,
        Ternary(treadmill_submax_vo2_male_single_stage),
        ("sm1": MlPerKgPerMin / Positive, "hr1": BeatsPerMinute / Positive, "hrmax": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "treadmill_submax_vo2_female_single_stage", Cardiovascular,
        Ternary(treadmill_submax_vo2_female_single_stage),
        ("sm1": MlPerKgPerMin / Positive, "hr1": BeatsPerMinute / Positive, "hrmax": BeatsPerMinute / Positive)
            -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "treadmill_submax_vo2_multi_stage", Cardiovascular,
        Quinary(treadmill_submax_vo2_multi_stage),
        ("sm1": MlPerKgPerMin / Positive, "hr1": BeatsPerMinute / Positive,
         "sm2": MlPerKgPerMin / Positive, "hr2": BeatsPerMinute / Positive,
         "hrmax": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "ACSM (2010). Guidelines for Exercise Testing and Prescription, 8th ed."),
    formula!("assessment", "mile_vo2_child", Cardiovascular, Quaternary(mile_vo2_child),
        ("weight": Kilograms / Positive, "height": Centimeters / Positive, "age": Years / NonNegative,
         "time": Minutes / Positive) -> MlPerKgPerMin,
        "Cureton KJ, et al. (1995). Med Sci Sports Exerc 27(3):445-451"),
    formula!("assessment", "vo2max_balke_male", Cardiovascular, Unary(vo2max_balke_male),
        ("time": Minutes / NonNegative) -> MlPerKgPerMin,
        "Pollock ML, et al. (1976). Am Heart J 92(1):39-46"),
    formula!("assessment", "vo2max_balke_female", Cardiovascular, Unary(vo2max_balke_female),
        ("time": Minutes / NonNegative) -> MlPerKgPerMin,
        "Pollock ML, et al. (1982). Am Heart J 103(3):363-373"),
    formula!("assessment", "vo2max_naughton_male", Cardiovascular, Unary(vo2max_naughton_male),
        ("time": Minutes / NonNegative) -> MlPerKgPerMin,
        "Pollock ML, et al. (1976). Am Heart J 92(1):39-46"),
    formula!("assessment", "vo2max_bruce_male", Cardiovascular, Ternary(vo2max_bruce_male),
        ("time": Minutes / NonNegative, "time2": Dimensionless / NonNegative, "time3": Dimensionless / NonNegative)
            -> MlPerKgPerMin,
        "Foster C, et al. (1984). Am Heart J 107(6):1229-1234"),
    formula!("assessment", "vo2max_bruce_female", Cardiovascular, Unary(vo2max_bruce_female),
        ("time": Minutes / NonNegative) -> MlPerKgPerMin,
        "Pollock ML, et al. (1982). Am Heart J 103(3):363-373"),
    formula!("assessment", "vo2max_elderlycardiac", Cardiovascular, Unary(vo2max_elderlycardiac),
        ("time": Minutes / NonNegative) -> MlPerKgPerMin,
        "McConnell TR, Clark BA (1987). J Cardiopulm Rehabil 7:324-331"),
    formula!("assessment", "shuttle_run_vo2", Cardiovascular, Binary(shuttle_run_vo2),
        ("age": Years / Positive, "speed": KilometersPerHour / Positive) -> MlPerKgPerMin,
        "Leger LA, et al. (1988). J Sports Sci 6(2):93-101"),
    formula!("assessment", "gilbert_daniels", Cardiovascular, Binary(gilbert_daniels),
        ("velocity": MetersPerMinute / Positive, "time": Minutes / Positive) -> MlPerKgPerMin,
        "Daniels J, Gilbert J (1979). Oxygen Power: Performance Tables for Distance Runners"),
    formula!("assessment", "usop_vo2max", Cardiovascular, Binary(usop_vo2max),
        ("hr_max": BeatsPerMinute / Positive, "resting_hr": BeatsPerMinute / Positive) -> MlPerKgPerMin,
        "Uth N, et al. (2004). Eur J Appl Physiol 91(1):111-115"),
];
