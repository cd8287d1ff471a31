//! Opt-in argument validation
//!
//! The bare formulas accept anything and let IEEE-754 arithmetic decide what comes
//! out. [`check_arguments`] is the layer callers can put in front of them: every
//! catalogue parameter carries a [`Domain`], and an argument outside it becomes
//! [`FormulaError::InvalidDomain`].

use crate::catalogue::FormulaDescriptor;
use crate::error::{FormulaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid input domain of a formula parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Any finite value
    Any,
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
    /// Within [0, 1]
    Fraction,
    /// Within [0, 100]
    Percent,
    /// Within an inclusive range
    Range { min: f64, max: f64 },
}

impl Domain {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match *self {
            Domain::Any => true,
            Domain::Positive => value > 0.0,
            Domain::NonNegative => value >= 0.0,
            Domain::Fraction => (0.0..=1.0).contains(&value),
            Domain::Percent => (0.0..=100.0).contains(&value),
            Domain::Range { min, max } => value >= min && value <= max,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Any => write!(f, "a finite number"),
            Domain::Positive => write!(f, "> 0"),
            Domain::NonNegative => write!(f, ">= 0"),
            Domain::Fraction => write!(f, "within [0, 1]"),
            Domain::Percent => write!(f, "within [0, 100]"),
            Domain::Range { min, max } => write!(f, "within [{}, {}]", min, max),
        }
    }
}

/// Validation behaviour for [`crate::Catalogue::evaluate_checked`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject arguments outside their parameter domain
    pub enforce_domains: bool,
    /// Reject NaN or infinite results
    pub reject_non_finite: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_domains: true,
            reject_non_finite: true,
        }
    }
}

impl ValidationConfig {
    /// Configuration that checks nothing
    pub fn permissive() -> Self {
        Self {
            enforce_domains: false,
            reject_non_finite: false,
        }
    }
}

/// Check positional arguments against a descriptor's parameter domains
///
/// The caller has already verified arity; extra or missing arguments are not
/// reported here.
pub fn check_arguments(descriptor: &FormulaDescriptor, args: &[f64]) -> Result<()> {
    for (spec, &value) in descriptor.params.iter().zip(args) {
        if !spec.domain.contains(value) {
            tracing::warn!(
                formula = %descriptor.id(),
                parameter = spec.name,
                value,
                "Argument outside documented domain"
            );
            return Err(FormulaError::InvalidDomain {
                formula: descriptor.id(),
                parameter: spec.name.to_string(),
                value,
                expected: spec.domain.to_string(),
            });
        }
    }
    Ok(())
}

/// Reject a non-finite result
pub fn check_result(descriptor: &FormulaDescriptor, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(formula = %descriptor.id(), value, "Non-finite formula result");
        Err(FormulaError::NonFiniteResult {
            formula: descriptor.id(),
            value,
        })
    }
}
