//! Daily water requirement

use crate::catalogue::FormulaDescriptor;

/// Daily water requirement in litres from body weight in kilograms
pub fn daily_needs(weight: f64) -> f64 {
    0.033 * weight
}

pub(crate) static HYDRATION_FORMULAS: &[FormulaDescriptor] = &[formula!(
    "hydration", "dailyNeeds", Composition, Unary(daily_needs),
    ("weight": Kilograms / Positive) -> LitersPerDay,
    "Mayo Clinic Staff. Water: How much should you drink every day?"
)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_needs() {
        assert!((daily_needs(70.0) - 2.31).abs() < 1e-12);
        assert_eq!(daily_needs(0.0), 0.0);
    }
}
