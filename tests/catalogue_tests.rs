use exphys::{Catalogue, Category, FormulaError, FormulaOutput, Unit, ValidationConfig};
use std::collections::HashSet;

/// Registry-wide checks against the process catalogue

#[cfg(test)]
mod catalogue_tests {
    use super::*;

    #[test]
    fn test_identifiers_are_unique() {
        let catalogue = Catalogue::global();
        let ids: HashSet<String> = catalogue.iter().map(|d| d.id()).collect();
        assert_eq!(ids.len(), catalogue.len());
    }

    #[test]
    fn test_parameter_lists_match_arity() {
        for descriptor in Catalogue::global().iter() {
            assert_eq!(
                descriptor.params.len(),
                descriptor.arity(),
                "{} declares {} parameters for arity {}",
                descriptor.id(),
                descriptor.params.len(),
                descriptor.arity()
            );
            assert!(!descriptor.citation.is_empty(), "{} has no citation", descriptor.id());
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalogue = Catalogue::global();
        for category in [
            Category::Cardiovascular,
            Category::Composition,
            Category::StrengthPower,
            Category::RunningModel,
        ] {
            assert!(
                catalogue.by_category(category).count() > 5,
                "{:?} has too few formulas",
                category
            );
        }
    }

    #[test]
    fn test_bmi_through_catalogue() {
        let bmi = Catalogue::global()
            .evaluate_scalar("indices.bmi", &[70.0, 175.0])
            .unwrap();
        assert!((bmi - 22.857).abs() < 1e-3);
    }

    #[test]
    fn test_matches_direct_calls() {
        let catalogue = Catalogue::global();

        let via_catalogue = catalogue
            .evaluate_scalar("cameron.predictTime", &[300.0, 1.0, 26.2188])
            .unwrap();
        assert_eq!(via_catalogue, exphys::running::cameron::cameron_predict_time(300.0, 1.0, 26.2188));

        let via_catalogue = catalogue.evaluate_scalar("purdy.points", &[1500.0, 240.0]).unwrap();
        assert_eq!(via_catalogue, exphys::running::purdy::purdy_points(1500.0, 240.0));

        let via_catalogue = catalogue.evaluate_scalar("rm.brzycki", &[1.0, 100.0]).unwrap();
        assert_eq!(via_catalogue, 100.0);
    }

    #[test]
    fn test_surface_areas_share_units() {
        let catalogue = Catalogue::global();
        let bsa: Vec<_> = catalogue.iter().filter(|d| d.module == "surfacearea").collect();
        assert!(bsa.len() >= 9);
        for descriptor in &bsa {
            assert_eq!(descriptor.params[0].unit, Unit::Centimeters, "{}", descriptor.id());
            assert_eq!(descriptor.params[1].unit, Unit::Kilograms, "{}", descriptor.id());
            assert_eq!(descriptor.returns, Unit::SquareMeters);
        }

        let boyd = catalogue.evaluate_scalar("surfacearea.boyd", &[175.0, 70.0]).unwrap();
        let dubois = catalogue.evaluate_scalar("surfacearea.dubois", &[175.0, 70.0]).unwrap();
        assert!((boyd - dubois).abs() < 0.1);
    }

    #[test]
    fn test_load_forms_through_catalogue() {
        let catalogue = Catalogue::global();
        let rm = catalogue.evaluate_scalar("rm.wathen", &[6.0, 90.0]).unwrap();
        let load = catalogue.evaluate_scalar("rm.wathenLoad", &[6.0, rm]).unwrap();
        assert!((load - 90.0).abs() < 1e-9);

        let bosco = catalogue.get("bosco").unwrap();
        assert_eq!(bosco.returns, Unit::WattsPerKilogram);
    }

    #[test]
    fn test_bare_name_lookup() {
        let catalogue = Catalogue::global();
        assert_eq!(catalogue.get("mosteller").unwrap().id(), "surfacearea.mosteller");
        assert_eq!(catalogue.get("pointsLS").unwrap().id(), "purdy.pointsLS");
        assert!(matches!(
            catalogue.get("no_such_formula"),
            Err(FormulaError::UnknownFormula { .. })
        ));
    }

    #[test]
    fn test_hr_zones_through_catalogue() {
        let catalogue = Catalogue::global();

        let output = catalogue.evaluate("hr.hr_zones", &[200.0]).unwrap();
        let zones = output.as_zones().unwrap();
        assert_eq!(zones.low.min, 100.0);
        assert_eq!(zones.redline.max, 200.0);

        let output = catalogue.evaluate("hr.hr_zones", &[0.0]).unwrap();
        assert_eq!(output, FormulaOutput::Zones(None));

        assert!(matches!(
            catalogue.evaluate_scalar("hr.hr_zones", &[200.0]),
            Err(FormulaError::NotScalar { .. })
        ));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let err = Catalogue::global()
            .evaluate("riegel.predict_time", &[1200.0, 5000.0])
            .unwrap_err();
        match err {
            FormulaError::ArityMismatch {
                formula,
                expected,
                actual,
            } => {
                assert_eq!(formula, "riegel.predict_time");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_names_parameter() {
        let config = ValidationConfig::default();
        let err = Catalogue::global()
            .evaluate_checked("indices.bmi", &[70.0, -175.0], &config)
            .unwrap_err();
        assert!(matches!(
            err,
            FormulaError::InvalidDomain { ref parameter, .. } if parameter == "height"
        ));
        assert!(err.user_message().contains("height"));
    }

    #[test]
    fn test_unchecked_path_propagates_ieee_values() {
        let catalogue = Catalogue::global();
        let bmi = catalogue.evaluate_scalar("indices.bmi", &[70.0, 0.0]).unwrap();
        assert!(bmi.is_infinite());

        let err = catalogue
            .evaluate_checked("indices.bmi", &[70.0, 0.0], &ValidationConfig::default())
            .unwrap_err();
        assert!(matches!(err, FormulaError::InvalidDomain { .. }));
    }

    #[test]
    fn test_non_finite_rejection_is_configurable() {
        let catalogue = Catalogue::global();
        let config = ValidationConfig {
            enforce_domains: false,
            reject_non_finite: true,
        };
        let err = catalogue
            .evaluate_checked("indices.bmi", &[70.0, 0.0], &config)
            .unwrap_err();
        assert!(matches!(err, FormulaError::NonFiniteResult { .. }));

        let output = catalogue
            .evaluate_checked("indices.bmi", &[70.0, 0.0], &ValidationConfig::permissive())
            .unwrap();
        assert!(output.as_scalar().unwrap().is_infinite());
    }

    #[test]
    fn test_zero_sentinel_passes_validation() {
        let output = Catalogue::global()
            .evaluate_checked("riegel.predict_time", &[0.0, 10.0, 20.0], &ValidationConfig::default())
            .unwrap();
        assert_eq!(output, FormulaOutput::Scalar(0.0));
    }

    #[test]
    fn test_evaluate_many_over_rows() {
        let rows: Vec<Vec<f64>> = (1..=10).map(|reps| vec![reps as f64, 100.0]).collect();
        let outputs = Catalogue::global().evaluate_many("rm.epley", &rows).unwrap();
        assert_eq!(outputs.len(), 10);
        assert!((outputs[0].as_scalar().unwrap() - 103.3).abs() < 1e-9);
    }

    #[test]
    fn test_json_listing() {
        let json = Catalogue::global().to_json().unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), Catalogue::global().len());

        let riegel = entries
            .iter()
            .find(|e| e["id"] == "riegel.predict_time")
            .unwrap();
        assert_eq!(riegel["category"], "running_model");
        assert_eq!(riegel["params"].as_array().unwrap().len(), 3);
    }
}
