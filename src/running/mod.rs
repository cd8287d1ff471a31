//! Running performance models
//!
//! # Modules
//!
//! - `riegel`: power-law time and distance prediction
//! - `cameron`: Cameron's curve-fit time prediction
//! - `purdy`: Purdy point scoring from the Portuguese tables
//! - `daniels`: Daniels and Gilbert velocity, VO2 and sustainable fraction
//! - `pace`: training paces from heart rate and VO2max
//! - `vickers`: Vickers and Vertosick marathon prediction with training volume
//! - `adjustment`: heat adjustment of finishing times
//!
//! The power-law predictors return exactly `0.0` when any time or distance is not
//! positive. Callers depend on that sentinel, so it is kept rather than turned
//! into an error.

pub mod adjustment;
pub mod cameron;
pub mod daniels;
pub mod pace;
pub mod purdy;
pub mod riegel;
pub mod vickers;
