//! Body composition formulas
//!
//! # Modules
//!
//! - `indices`: BMI and related height/weight/girth indices
//! - `surface_area`: body surface area equations
//! - `density`: body density from skinfolds, density to body fat conversions
//! - `mass`: fat-free mass from bioelectrical impedance
//! - `hydration`: daily water requirement
//! - `ideal`: ideal body weight

pub mod density;
pub mod hydration;
pub mod ideal;
pub mod indices;
pub mod mass;
pub mod surface_area;
