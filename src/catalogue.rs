//! Formula catalogue
//!
//! Every formula module exposes a static table of [`FormulaDescriptor`]s. The
//! [`Catalogue`] gathers those tables into one read-only registry, resolves
//! identifiers, checks argument counts, and evaluates formulas from positional
//! `f64` arguments.
//!
//! # Identifiers
//!
//! A formula's identifier is `"module.name"`, where `name` is the name the formula
//! has always been published under in the catalogue (e.g. `"rmr.revisedHbMale"`,
//! `"surfacearea.mosteller"`). Lookups also accept the bare name when exactly one
//! module defines it.
//!
//! # Example
//!
//! ```rust
//! use exphys::{Catalogue, FormulaOutput};
//!
//! let catalogue = Catalogue::global();
//! let bmi = catalogue.evaluate("indices.bmi", &[70.0, 175.0]).unwrap();
//! assert!(matches!(bmi, FormulaOutput::Scalar(v) if (v - 22.857).abs() < 1e-3));
//! ```

use crate::error::{FormulaError, Result};
use crate::models::HeartRateZones;
use crate::units::Unit;
use crate::validation::{self, Domain, ValidationConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Declare a [`FormulaDescriptor`] in a module's static table
///
/// ```text
/// formula!("module", "name", Category, Arity(function),
///     ("param": Unit / Domain, ...) -> ReturnUnit,
///     "citation")
/// ```
macro_rules! formula {
    (
        $module:literal, $name:literal, $category:ident, $kind:ident($func:path),
        ($($param:literal : $unit:ident / $domain:ident),* $(,)?) -> $returns:ident,
        $citation:literal $(,)?
    ) => {
        $crate::catalogue::FormulaDescriptor {
            module: $module,
            name: $name,
            category: $crate::catalogue::Category::$category,
            function: $crate::catalogue::FormulaFn::$kind($func),
            params: &[$(
                $crate::catalogue::ParameterSpec {
                    name: $param,
                    unit: $crate::units::Unit::$unit,
                    domain: $crate::validation::Domain::$domain,
                }
            ),*],
            returns: $crate::units::Unit::$returns,
            citation: $citation,
        }
    };
}

/// Broad grouping of formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cardiovascular,
    Composition,
    StrengthPower,
    RunningModel,
}

/// Name, unit and valid domain of one positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub unit: Unit,
    pub domain: Domain,
}

/// Function pointer tagged with its arity
#[derive(Clone, Copy)]
pub enum FormulaFn {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Ternary(fn(f64, f64, f64) -> f64),
    Quaternary(fn(f64, f64, f64, f64) -> f64),
    Quinary(fn(f64, f64, f64, f64, f64) -> f64),
    Senary(fn(f64, f64, f64, f64, f64, f64) -> f64),
    Zones(fn(f64) -> Option<HeartRateZones>),
}

impl FormulaFn {
    pub fn arity(&self) -> usize {
        match self {
            FormulaFn::Unary(_) | FormulaFn::Zones(_) => 1,
            FormulaFn::Binary(_) => 2,
            FormulaFn::Ternary(_) => 3,
            FormulaFn::Quaternary(_) => 4,
            FormulaFn::Quinary(_) => 5,
            FormulaFn::Senary(_) => 6,
        }
    }

    /// Apply to positional arguments; `None` when the count is wrong
    pub fn call(&self, args: &[f64]) -> Option<FormulaOutput> {
        let output = match (self, args) {
            (FormulaFn::Unary(f), &[a]) => FormulaOutput::Scalar(f(a)),
            (FormulaFn::Binary(f), &[a, b]) => FormulaOutput::Scalar(f(a, b)),
            (FormulaFn::Ternary(f), &[a, b, c]) => FormulaOutput::Scalar(f(a, b, c)),
            (FormulaFn::Quaternary(f), &[a, b, c, d]) => FormulaOutput::Scalar(f(a, b, c, d)),
            (FormulaFn::Quinary(f), &[a, b, c, d, e]) => {
                FormulaOutput::Scalar(f(a, b, c, d, e))
            }
            (FormulaFn::Senary(f), &[a, b, c, d, e, g]) => {
                FormulaOutput::Scalar(f(a, b, c, d, e, g))
            }
            (FormulaFn::Zones(f), &[a]) => FormulaOutput::Zones(f(a)),
            _ => return None,
        };
        Some(output)
    }
}

impl std::fmt::Debug for FormulaFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FormulaFn(arity={})", self.arity())
    }
}

/// Result of evaluating a formula through the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaOutput {
    Scalar(f64),
    Zones(Option<HeartRateZones>),
}

impl FormulaOutput {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            FormulaOutput::Scalar(v) => Some(*v),
            FormulaOutput::Zones(_) => None,
        }
    }

    pub fn as_zones(&self) -> Option<&HeartRateZones> {
        match self {
            FormulaOutput::Zones(zones) => zones.as_ref(),
            FormulaOutput::Scalar(_) => None,
        }
    }
}

/// Registration record for one formula
#[derive(Debug, Clone, Copy)]
pub struct FormulaDescriptor {
    pub module: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub function: FormulaFn,
    pub params: &'static [ParameterSpec],
    pub returns: Unit,
    pub citation: &'static str,
}

impl FormulaDescriptor {
    /// Qualified identifier, `"module.name"`
    pub fn id(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }

    pub fn arity(&self) -> usize {
        self.function.arity()
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            id: self.id(),
            category: self.category,
            params: self.params.to_vec(),
            returns: self.returns,
            citation: self.citation,
        }
    }
}

/// Serialisable view of a descriptor, without the function pointer
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorSummary {
    pub id: String,
    pub category: Category,
    pub params: Vec<ParameterSpec>,
    pub returns: Unit,
    pub citation: &'static str,
}

/// Read-only registry of every formula
pub struct Catalogue {
    entries: Vec<&'static FormulaDescriptor>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<&'static str, Vec<usize>>,
}

static GLOBAL: OnceLock<Catalogue> = OnceLock::new();

impl Catalogue {
    /// Build a catalogue from descriptor tables
    ///
    /// A repeated identifier keeps its first registration.
    pub fn from_tables(tables: &[&'static [FormulaDescriptor]]) -> Self {
        let mut catalogue = Catalogue {
            entries: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };

        for descriptor in tables.iter().flat_map(|table| table.iter()) {
            let id = descriptor.id();
            if catalogue.by_id.contains_key(&id) {
                tracing::warn!(formula = %id, "Duplicate formula identifier ignored");
                continue;
            }
            let index = catalogue.entries.len();
            catalogue.entries.push(descriptor);
            catalogue.by_id.insert(id, index);
            catalogue
                .by_name
                .entry(descriptor.name)
                .or_default()
                .push(index);
        }

        tracing::debug!(formulas = catalogue.entries.len(), "Formula catalogue built");
        catalogue
    }

    /// Process-wide catalogue of every formula in the crate
    pub fn global() -> &'static Catalogue {
        GLOBAL.get_or_init(|| Catalogue::from_tables(crate::all_formula_tables()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'static FormulaDescriptor> + '_ {
        self.entries.iter().copied()
    }

    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static FormulaDescriptor> + '_ {
        self.iter().filter(move |d| d.category == category)
    }

    /// Resolve a qualified identifier or an unambiguous bare name
    pub fn get(&self, id_or_name: &str) -> Result<&'static FormulaDescriptor> {
        if let Some(&index) = self.by_id.get(id_or_name) {
            return Ok(self.entries[index]);
        }

        match self.by_name.get(id_or_name).map(Vec::as_slice) {
            Some(&[index]) => Ok(self.entries[index]),
            Some(indices) if !indices.is_empty() => Err(FormulaError::AmbiguousFormula {
                name: id_or_name.to_string(),
                candidates: indices.iter().map(|&i| self.entries[i].id()).collect(),
            }),
            _ => Err(FormulaError::UnknownFormula {
                id: id_or_name.to_string(),
            }),
        }
    }

    /// Evaluate with positional arguments
    ///
    /// Only the argument count is checked; values pass through to the formula
    /// unvalidated.
    pub fn evaluate(&self, id_or_name: &str, args: &[f64]) -> Result<FormulaOutput> {
        let descriptor = self.get(id_or_name)?;
        Self::apply(descriptor, args)
    }

    /// Evaluate a formula that returns a single value
    pub fn evaluate_scalar(&self, id_or_name: &str, args: &[f64]) -> Result<f64> {
        let descriptor = self.get(id_or_name)?;
        Self::apply(descriptor, args)?
            .as_scalar()
            .ok_or_else(|| FormulaError::NotScalar {
                formula: descriptor.id(),
            })
    }

    /// Evaluate behind the validating wrapper
    pub fn evaluate_checked(
        &self,
        id_or_name: &str,
        args: &[f64],
        config: &ValidationConfig,
    ) -> Result<FormulaOutput> {
        let descriptor = self.get(id_or_name)?;
        check_arity(descriptor, args)?;

        if config.enforce_domains {
            validation::check_arguments(descriptor, args)?;
        }

        let output = Self::apply(descriptor, args)?;
        if config.reject_non_finite {
            if let FormulaOutput::Scalar(value) = output {
                validation::check_result(descriptor, value)?;
            }
        }
        Ok(output)
    }

    /// Evaluate one formula over many argument rows in parallel
    pub fn evaluate_many(&self, id_or_name: &str, rows: &[Vec<f64>]) -> Result<Vec<FormulaOutput>> {
        let descriptor = self.get(id_or_name)?;
        rows.par_iter()
            .map(|args| Self::apply(descriptor, args))
            .collect()
    }

    /// JSON listing of every descriptor
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let summaries: Vec<DescriptorSummary> = self.iter().map(|d| d.summary()).collect();
        serde_json::to_value(summaries)
    }

    fn apply(descriptor: &FormulaDescriptor, args: &[f64]) -> Result<FormulaOutput> {
        check_arity(descriptor, args)?;
        let output = descriptor
            .function
            .call(args)
            .ok_or_else(|| arity_error(descriptor, args))?;
        tracing::trace!(formula = %descriptor.id(), ?args, ?output, "Formula evaluated");
        Ok(output)
    }
}

fn check_arity(descriptor: &FormulaDescriptor, args: &[f64]) -> Result<()> {
    if args.len() == descriptor.arity() {
        Ok(())
    } else {
        Err(arity_error(descriptor, args))
    }
}

fn arity_error(descriptor: &FormulaDescriptor, args: &[f64]) -> FormulaError {
    FormulaError::ArityMismatch {
        formula: descriptor.id(),
        expected: descriptor.arity(),
        actual: args.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: f64) -> f64 {
        x * 2.0
    }

    fn sum(a: f64, b: f64) -> f64 {
        a + b
    }

    static TABLE_A: &[FormulaDescriptor] = &[
        formula!("alpha", "double", Cardiovascular, Unary(double),
            ("x": Dimensionless / Positive) -> Dimensionless,
            "test"),
        formula!("alpha", "sum", Composition, Binary(sum),
            ("a": Dimensionless / Any, "b": Dimensionless / Any) -> Dimensionless,
            "test"),
    ];

    static TABLE_B: &[FormulaDescriptor] = &[
        formula!("beta", "sum", Composition, Binary(sum),
            ("a": Dimensionless / Any, "b": Dimensionless / Any) -> Dimensionless,
            "test"),
        formula!("alpha", "double", Cardiovascular, Unary(sum_first),
            ("x": Dimensionless / Any) -> Dimensionless,
            "duplicate"),
    ];

    fn sum_first(x: f64) -> f64 {
        x
    }

    fn catalogue() -> Catalogue {
        Catalogue::from_tables(&[TABLE_A, TABLE_B])
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalogue = catalogue();
        assert_eq!(catalogue.len(), 3);
        let output = catalogue.evaluate("alpha.double", &[4.0]).unwrap();
        assert_eq!(output, FormulaOutput::Scalar(8.0));
    }

    #[test]
    fn test_bare_name_resolution() {
        let catalogue = catalogue();
        assert_eq!(catalogue.get("double").unwrap().id(), "alpha.double");

        match catalogue.get("sum") {
            Err(FormulaError::AmbiguousFormula { candidates, .. }) => {
                assert_eq!(candidates, vec!["alpha.sum", "beta.sum"]);
            }
            other => panic!("expected ambiguity, got {:?}", other.map(|d| d.id())),
        }

        assert!(matches!(
            catalogue.get("gamma.sum"),
            Err(FormulaError::UnknownFormula { .. })
        ));
    }

    #[test]
    fn test_arity_checked_before_evaluation() {
        let catalogue = catalogue();
        let err = catalogue.evaluate("beta.sum", &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::ArityMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn test_checked_evaluation() {
        let catalogue = catalogue();
        let config = ValidationConfig::default();

        let err = catalogue
            .evaluate_checked("alpha.double", &[-1.0], &config)
            .unwrap_err();
        assert!(matches!(err, FormulaError::InvalidDomain { ref parameter, .. } if parameter == "x"));

        // the unchecked path passes the same value straight through
        assert_eq!(
            catalogue.evaluate_scalar("alpha.double", &[-1.0]).unwrap(),
            -2.0
        );
    }

    #[test]
    fn test_evaluate_many() {
        let catalogue = catalogue();
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let outputs = catalogue.evaluate_many("alpha.sum", &rows).unwrap();
        let values: Vec<f64> = outputs.iter().filter_map(|o| o.as_scalar()).collect();
        assert_eq!(values, vec![3.0, 7.0, 11.0]);

        let bad = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(catalogue.evaluate_many("alpha.sum", &bad).is_err());
    }

    #[test]
    fn test_json_listing() {
        let json = catalogue().to_json().unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["id"], "alpha.double");
        assert_eq!(entries[0]["params"][0]["domain"], "positive");
    }
}
