//! Strength and power formulas
//!
//! - `lifting`: body-mass normalisation of lifting performances
//! - `power`: jump and stair-climb power tests
//! - `rep_max`: one-repetition-maximum predictions

pub mod lifting;
pub mod power;
pub mod rep_max;
