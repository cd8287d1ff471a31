//! Value types shared by the formula modules

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Heart-rate band, both bounds in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRange {
    pub min: f64,
    pub max: f64,
}

impl ZoneRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `hr` falls within the band, inclusive of both bounds
    pub fn contains(&self, hr: f64) -> bool {
        hr >= self.min && hr <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Five contiguous training zones derived from maximum heart rate
///
/// Each zone's `min` equals the previous zone's `max`, and `redline.max` is the
/// maximum heart rate the zones were built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZones {
    pub low: ZoneRange,
    pub weight_control: ZoneRange,
    pub aerobic: ZoneRange,
    pub anaerobic: ZoneRange,
    pub redline: ZoneRange,
}

impl HeartRateZones {
    /// Zones in ascending order
    pub fn as_array(&self) -> [ZoneRange; 5] {
        [
            self.low,
            self.weight_control,
            self.aerobic,
            self.anaerobic,
            self.redline,
        ]
    }

    /// Name of the zone containing `hr`, lowest matching zone first
    pub fn zone_for(&self, hr: f64) -> Option<&'static str> {
        const NAMES: [&str; 5] = ["low", "weight_control", "aerobic", "anaerobic", "redline"];
        self.as_array()
            .iter()
            .position(|zone| zone.contains(hr))
            .map(|i| NAMES[i])
    }
}

/// Age in fractional years (whole years plus elapsed months / 12)
///
/// Returns `None` when `on` precedes the date of birth.
pub fn age_in_years(date_of_birth: NaiveDate, on: NaiveDate) -> Option<f64> {
    if on < date_of_birth {
        return None;
    }

    let mut months = (on.year() - date_of_birth.year()) * 12 + on.month() as i32
        - date_of_birth.month() as i32;
    if on.day() < date_of_birth.day() {
        months -= 1;
    }

    Some((months / 12) as f64 + (months % 12) as f64 / 12.0)
}

/// Age in fractional years as of today's local date
pub fn age_today(date_of_birth: NaiveDate) -> Option<f64> {
    age_in_years(date_of_birth, chrono::Local::now().date_naive())
}
