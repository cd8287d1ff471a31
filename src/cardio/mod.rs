//! Cardiovascular and metabolic formulas
//!
//! # Modules
//!
//! - `energy`: substrate utilisation and activity energy cost
//! - `rmr`: resting and basal metabolic rate
//! - `tee`: total energy expenditure by age group, sex and activity level
//! - `heart_rate`: training zones, HRmax predictors, target heart rate
//! - `respiration`: residual volume and lung capacity
//! - `assessment`: field and laboratory VO2 protocols

pub mod assessment;
pub mod energy;
pub mod heart_rate;
pub mod respiration;
pub mod rmr;
pub mod tee;
