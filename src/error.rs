//! Error type for catalogue lookups, argument checking and configuration
//!
//! Formula bodies never fail: degenerate inputs propagate as IEEE-754 `NaN` or
//! infinities. Errors only arise at the catalogue boundary (unknown identifiers,
//! wrong argument counts), in the opt-in validating wrapper, and when loading
//! configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all exphys operations
#[derive(Debug, Error)]
pub enum FormulaError {
    /// No formula is registered under the identifier
    #[error("Unknown formula: {id}")]
    UnknownFormula { id: String },

    /// A bare name matched formulas in more than one module
    #[error("Ambiguous formula name '{name}', candidates: {}", candidates.join(", "))]
    AmbiguousFormula { name: String, candidates: Vec<String> },

    /// Positional argument count does not match the formula's parameter list
    #[error("Formula {formula} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        formula: String,
        expected: usize,
        actual: usize,
    },

    /// Argument outside the documented domain of the parameter
    #[error("Invalid domain for {formula}: {parameter}={value} (expected {expected})")]
    InvalidDomain {
        formula: String,
        parameter: String,
        value: f64,
        expected: String,
    },

    /// Evaluation produced NaN or an infinity
    #[error("Formula {formula} produced a non-finite result: {value}")]
    NonFiniteResult { formula: String, value: f64 },

    /// Formula returns zones, not a scalar
    #[error("Formula {formula} does not produce a scalar value")]
    NotScalar { formula: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file not found at the given path
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exphys operations
pub type Result<T> = std::result::Result<T, FormulaError>;

impl FormulaError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FormulaError::InvalidDomain { .. } => ErrorSeverity::Warning,
            FormulaError::NonFiniteResult { .. } => ErrorSeverity::Warning,
            FormulaError::ConfigNotFound { .. } => ErrorSeverity::Info,
            FormulaError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Whether the caller broke the positional calling contract
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            FormulaError::UnknownFormula { .. }
                | FormulaError::AmbiguousFormula { .. }
                | FormulaError::ArityMismatch { .. }
                | FormulaError::NotScalar { .. }
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FormulaError::UnknownFormula { id } => {
                format!("There is no formula called '{}'. Check the catalogue listing.", id)
            }
            FormulaError::AmbiguousFormula { name, candidates } => {
                format!(
                    "'{}' exists in several modules; use one of: {}",
                    name,
                    candidates.join(", ")
                )
            }
            FormulaError::ArityMismatch {
                formula,
                expected,
                ..
            } => {
                format!("{} needs exactly {} values.", formula, expected)
            }
            FormulaError::InvalidDomain {
                parameter,
                value,
                expected,
                ..
            } => {
                format!("{} must be {}, but {} was given.", parameter, expected, value)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents the call but not other calls
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FormulaError::InvalidDomain {
            formula: "composition.bmi".to_string(),
            parameter: "height".to_string(),
            value: -1.0,
            expected: "> 0".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FormulaError::ArityMismatch {
            formula: "composition.bmi".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_contract_violations() {
        let err = FormulaError::UnknownFormula {
            id: "nope".to_string(),
        };
        assert!(err.is_contract_violation());

        let err = FormulaError::Configuration("bad toml".to_string());
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_user_messages() {
        let err = FormulaError::AmbiguousFormula {
            name: "predictTime".to_string(),
            candidates: vec!["riegel.predict_time".to_string(), "cameron.predictTime".to_string()],
        };
        assert!(err.user_message().contains("cameron.predictTime"));
        assert!(err.to_string().contains("riegel.predict_time, cameron.predictTime"));
    }
}
