//! Unit tags and strongly-typed measurement wrappers
//!
//! Formula families use whatever units their source publication used: some take
//! height in centimetres, some in metres, a few take pounds or miles. Every
//! function documents its units, every catalogue descriptor carries a [`Unit`] per
//! parameter, and the wrapper types below let callers convert explicitly instead of
//! trusting a bare `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per metre
pub const INCHES_PER_METER: f64 = 39.3701;
/// Metres per statute mile
pub const METERS_PER_MILE: f64 = 1609.34;
/// Pounds per kilogram
pub const POUNDS_PER_KG: f64 = 2.20462;

/// Unit attached to a formula parameter or result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilograms,
    Pounds,
    Centimeters,
    Meters,
    Inches,
    Millimeters,
    Miles,
    Seconds,
    Minutes,
    Years,
    BeatsPerMinute,
    MetersPerSecond,
    MetersPerMinute,
    KilometersPerHour,
    MilesPerHour,
    /// Weekly training volume
    MilesPerWeek,
    MinutesPerKilometer,
    StepsPerMinute,
    /// Oxygen uptake, mL/kg/min
    MlPerKgPerMin,
    /// Absolute oxygen uptake, mL/min
    MlPerMin,
    Liters,
    LitersPerDay,
    SquareMeters,
    /// Body density, g/cm³
    GramsPerCubicCentimeter,
    KilogramsPerSquareMeter,
    KilogramsPerCubicMeter,
    Kilocalories,
    KilocaloriesPerDay,
    KilocaloriesPerMinute,
    Watts,
    /// Mass-specific power
    WattsPerKilogram,
    KilogramMetersPerMinute,
    Ohms,
    Millimoles,
    MillimetersOfMercury,
    Mets,
    Fahrenheit,
    /// Value in [0, 1]
    Fraction,
    /// Value in [0, 100]
    Percent,
    Points,
    Repetitions,
    Dimensionless,
}

impl Unit {
    /// Short display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilograms => "kg",
            Unit::Pounds => "lb",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
            Unit::Miles => "mi",
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Years => "yr",
            Unit::BeatsPerMinute => "bpm",
            Unit::MetersPerSecond => "m/s",
            Unit::MetersPerMinute => "m/min",
            Unit::KilometersPerHour => "km/h",
            Unit::MilesPerHour => "mph",
            Unit::MilesPerWeek => "mi/wk",
            Unit::MinutesPerKilometer => "min/km",
            Unit::StepsPerMinute => "steps/min",
            Unit::MlPerKgPerMin => "mL/kg/min",
            Unit::MlPerMin => "mL/min",
            Unit::Liters => "L",
            Unit::LitersPerDay => "L/day",
            Unit::SquareMeters => "m²",
            Unit::GramsPerCubicCentimeter => "g/cm³",
            Unit::KilogramsPerSquareMeter => "kg/m²",
            Unit::KilogramsPerCubicMeter => "kg/m³",
            Unit::Kilocalories => "kcal",
            Unit::KilocaloriesPerDay => "kcal/day",
            Unit::KilocaloriesPerMinute => "kcal/min",
            Unit::Watts => "W",
            Unit::WattsPerKilogram => "W/kg",
            Unit::KilogramMetersPerMinute => "kgm/min",
            Unit::Ohms => "Ω",
            Unit::Millimoles => "mmol",
            Unit::MillimetersOfMercury => "mmHg",
            Unit::Mets => "MET",
            Unit::Fahrenheit => "°F",
            Unit::Fraction => "fraction",
            Unit::Percent => "%",
            Unit::Points => "pts",
            Unit::Repetitions => "reps",
            Unit::Dimensionless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

macro_rules! measurement {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<$name> for f64 {
            fn from(m: $name) -> f64 {
                m.0
            }
        }
    };
}

measurement!(
    /// Mass in kilograms
    Kilograms
);
measurement!(
    /// Mass in pounds
    Pounds
);
measurement!(
    /// Length in centimetres
    Centimeters
);
measurement!(
    /// Length in metres
    Meters
);
measurement!(
    /// Length in inches
    Inches
);
measurement!(
    /// Distance in statute miles
    Miles
);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 / POUNDS_PER_KG)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * POUNDS_PER_KG)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(inches.0 / INCHES_PER_METER)
    }
}

impl From<Meters> for Inches {
    fn from(m: Meters) -> Self {
        Inches(m.0 * INCHES_PER_METER)
    }
}

impl From<Meters> for Miles {
    fn from(m: Meters) -> Self {
        Miles(m.0 / METERS_PER_MILE)
    }
}

impl From<Miles> for Meters {
    fn from(mi: Miles) -> Self {
        Meters(mi.0 * METERS_PER_MILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let cm: Centimeters = Meters(1.75).into();
        assert!((cm.value() - 175.0).abs() < 1e-9);

        let m: Meters = Centimeters(180.0).into();
        assert!((m.value() - 1.8).abs() < 1e-12);

        let inches: Inches = Centimeters(2.54).into();
        assert!((inches.value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mass_conversions() {
        let lb: Pounds = Kilograms(100.0).into();
        assert!((lb.value() - 220.462).abs() < 1e-9);

        let kg: Kilograms = lb.into();
        assert!((kg.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_mile_conversion() {
        let mi: Miles = Meters(METERS_PER_MILE * 3.0).into();
        assert!((mi.value() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(Unit::MlPerKgPerMin.to_string(), "mL/kg/min");
        assert_eq!(Unit::Centimeters.symbol(), "cm");
        assert_eq!(
            serde_json::to_string(&Unit::KilometersPerHour).unwrap(),
            "\"kilometers_per_hour\""
        );
    }
}
