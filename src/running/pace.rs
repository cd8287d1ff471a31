//! Training paces from heart rate and VO2max
//!
//! Heart rate and VO2 fractions are decimals (`0.8` for 80%). VO2max is in
//! mL/kg/min, speeds in km/h and paces in minutes per kilometre.

use crate::catalogue::FormulaDescriptor;
use crate::models::ZoneRange;
use serde::{Deserialize, Serialize};

/// Fraction of VO2max at a fraction of maximum heart rate (Swain et al., 1994)
pub fn percent_vo2_max(hr_percentage: f64) -> f64 {
    ((hr_percentage * 100.0 - 37.182) / 0.6463) / 100.0
}

/// Fraction of maximum heart rate at a fraction of VO2max; inverse of
/// [`percent_vo2_max`]
pub fn percent_hr_max(vo2_percentage: f64) -> f64 {
    (0.6463 * vo2_percentage * 100.0 + 37.182) / 100.0
}

/// Velocity at VO2max, km/h
pub fn v_vo2_max(vo2_max: f64) -> f64 {
    vo2_max / 3.5
}

/// Running speed in km/h at a fraction of maximum heart rate
pub fn hr_speed(percent_hr: f64, vo2_max: f64) -> f64 {
    percent_vo2_max(percent_hr) * v_vo2_max(vo2_max)
}

/// Running pace in min/km at a fraction of maximum heart rate
pub fn hr_pace(percent_hr: f64, vo2_max: f64) -> f64 {
    60.0 / hr_speed(percent_hr, vo2_max)
}

/// Easy/long pace, 70% HRmax
pub fn el_pace(vo2_max: f64) -> f64 {
    hr_pace(TrainingPace::Easy.target(), vo2_max)
}

/// Marathon pace, 82.5% HRmax
pub fn m_pace(vo2_max: f64) -> f64 {
    hr_pace(TrainingPace::Marathon.target(), vo2_max)
}

/// Threshold pace, 85% HRmax
pub fn t_pace(vo2_max: f64) -> f64 {
    hr_pace(TrainingPace::Threshold.target(), vo2_max)
}

/// Interval pace, 100% HRmax
pub fn i_pace(vo2_max: f64) -> f64 {
    hr_pace(TrainingPace::Interval.target(), vo2_max)
}

/// Daniels training intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPace {
    /// Recovery runs, warm-up, cool-down and long runs
    Easy,
    Marathon,
    Threshold,
    Interval,
}

impl TrainingPace {
    pub const ALL: &'static [TrainingPace] = &[
        TrainingPace::Easy,
        TrainingPace::Marathon,
        TrainingPace::Threshold,
        TrainingPace::Interval,
    ];

    /// Heart-rate band as fractions of HRmax
    pub fn hr_band(&self) -> ZoneRange {
        match self {
            TrainingPace::Easy => ZoneRange::new(0.60, 0.79),
            TrainingPace::Marathon => ZoneRange::new(0.80, 0.85),
            TrainingPace::Threshold => ZoneRange::new(0.82, 0.88),
            TrainingPace::Interval => ZoneRange::new(0.97, 1.0),
        }
    }

    /// Fraction of HRmax the single-value pace functions use
    pub fn target(&self) -> f64 {
        match self {
            TrainingPace::Easy => 0.7,
            TrainingPace::Marathon => 0.825,
            TrainingPace::Threshold => 0.85,
            TrainingPace::Interval => 1.0,
        }
    }

    /// Pace band in min/km; `min` is the faster end
    pub fn pace_band(&self, vo2_max: f64) -> ZoneRange {
        let band = self.hr_band();
        ZoneRange::new(hr_pace(band.max, vo2_max), hr_pace(band.min, vo2_max))
    }
}

macro_rules! named_pace {
    ($name:literal, $func:path) => {
        formula!("pace", $name, RunningModel, Unary($func),
            ("vO2Max": MlPerKgPerMin / Positive) -> MinutesPerKilometer,
            "Daniels J (2005). Daniels' Running Formula, 2nd ed.")
    };
}

pub(crate) static PACE_FORMULAS: &[FormulaDescriptor] = &[
    formula!("pace", "percentVO2Max", RunningModel, Unary(percent_vo2_max),
        ("hrPercentage": Fraction / Fraction) -> Fraction,
        "Swain DP, et al. (1994). Med Sci Sports Exerc 26:112-116"),
    formula!("pace", "percentHrMax", RunningModel, Unary(percent_hr_max),
        ("vo2Percentage": Fraction / Fraction) -> Fraction,
        "Swain DP, et al. (1994). Med Sci Sports Exerc 26:112-116"),
    formula!("pace", "vVo2Max", RunningModel, Unary(v_vo2_max),
        ("vO2Max": MlPerKgPerMin / Positive) -> KilometersPerHour,
        "Leger L, Mercier D (1984). Sports Med 1:1-7"),
    formula!("pace", "hrSpeed", RunningModel, Binary(hr_speed),
        ("percentHR": Fraction / Fraction, "vO2Max": MlPerKgPerMin / Positive) -> KilometersPerHour,
        "Swain DP, et al. (1994). Med Sci Sports Exerc 26:112-116"),
    formula!("pace", "hrPace", RunningModel, Binary(hr_pace),
        ("percentHR": Fraction / Fraction, "vO2Max": MlPerKgPerMin / Positive) -> MinutesPerKilometer,
        "Swain DP, et al. (1994). Med Sci Sports Exerc 26:112-116"),
    named_pace!("elPace", el_pace),
    named_pace!("mPace", m_pace),
    named_pace!("tPace", t_pace),
    named_pace!("iPace", i_pace),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swain_conversion() {
        assert!((percent_vo2_max(0.8) - 0.662509670).abs() < 1e-9);
        assert!((percent_hr_max(percent_vo2_max(0.8)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_speed_and_pace() {
        assert_eq!(v_vo2_max(56.0), 16.0);
        assert!((hr_speed(0.8, 56.0) - 10.600154727).abs() < 1e-8);
        assert!((hr_pace(0.8, 56.0) - 5.660294736).abs() < 1e-8);
    }

    #[test]
    fn test_named_paces() {
        assert!((el_pace(56.0) - 7.385047840).abs() < 1e-8);
        assert!((m_pace(56.0) - 5.348040514).abs() < 1e-8);
        assert!((t_pace(56.0) - 5.068436572).abs() < 1e-8);
        assert!((i_pace(56.0) - 3.858169633).abs() < 1e-8);
    }

    #[test]
    fn test_pace_bands() {
        for pace in TrainingPace::ALL {
            let band = pace.pace_band(56.0);
            assert!(band.min < band.max, "{:?}", pace);
            let target = hr_pace(pace.target(), 56.0);
            assert!(band.contains(target), "{:?}", pace);
        }
    }
}
