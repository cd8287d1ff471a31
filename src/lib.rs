//! Exercise physiology formulas
//!
//! Closed-form equations from the exercise-science literature: energy
//! expenditure, VO2 assessment, heart rate, body composition, anthropometry,
//! strength and power, and running performance. Every formula is a pure `f64`
//! function in its module and is also registered in the [`Catalogue`], which
//! evaluates formulas by identifier from positional arguments.
//!
//! ```rust
//! use exphys::running::riegel;
//! use exphys::Catalogue;
//!
//! let direct = riegel::predict_time(1200.0, 5000.0, 10000.0);
//! let by_id = Catalogue::global()
//!     .evaluate_scalar("riegel.predict_time", &[1200.0, 5000.0, 10000.0])
//!     .unwrap();
//! assert_eq!(direct, by_id);
//! ```

#[macro_use]
pub mod catalogue;

pub mod anthropometry;
pub mod cardio;
pub mod composition;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod running;
pub mod strength;
pub mod units;
pub mod validation;

pub use catalogue::{Catalogue, Category, DescriptorSummary, FormulaDescriptor, FormulaOutput};
pub use config::{ConfigLoader, ExphysConfig};
pub use error::{ErrorSeverity, FormulaError, Result};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::{HeartRateZones, ZoneRange};
pub use units::Unit;
pub use validation::{Domain, ValidationConfig};

static FORMULA_TABLES: &[&[FormulaDescriptor]] = &[
    cardio::energy::ENERGY_FORMULAS,
    cardio::rmr::RMR_FORMULAS,
    cardio::tee::TEE_FORMULAS,
    cardio::heart_rate::HEART_RATE_FORMULAS,
    cardio::respiration::RESPIRATION_FORMULAS,
    cardio::assessment::ASSESSMENT_FORMULAS,
    composition::indices::INDICES_FORMULAS,
    composition::surface_area::SURFACE_AREA_FORMULAS,
    composition::density::DENSITY_FORMULAS,
    composition::mass::MASS_FORMULAS,
    composition::hydration::HYDRATION_FORMULAS,
    composition::ideal::IDEAL_FORMULAS,
    anthropometry::STATURE_FORMULAS,
    anthropometry::SEGMENT_FORMULAS,
    strength::lifting::LIFTING_FORMULAS,
    strength::power::POWER_FORMULAS,
    strength::rep_max::REP_MAX_FORMULAS,
    running::riegel::RIEGEL_FORMULAS,
    running::cameron::CAMERON_FORMULAS,
    running::purdy::PURDY_FORMULAS,
    running::daniels::DANIELS_FORMULAS,
    running::pace::PACE_FORMULAS,
    running::vickers::VICKERS_FORMULAS,
    running::adjustment::ADJUSTMENT_FORMULAS,
];

/// Every descriptor table in the crate, in registration order
pub(crate) fn all_formula_tables() -> &'static [&'static [FormulaDescriptor]] {
    FORMULA_TABLES
}
