use exphys::cardio::energy::{carbohydrate, fat};
use exphys::cardio::heart_rate::hr_zones;
use exphys::composition::indices::bmi;
use exphys::running::riegel::{predict_distance, predict_time};
use exphys::strength::lifting::{sinclair_female, sinclair_male};
use exphys::Catalogue;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_formulas_are_deterministic(weight in 30.0f64..200.0, height in 120.0f64..220.0) {
        let first = bmi(weight, height);
        let second = bmi(weight, height);
        prop_assert_eq!(first.to_bits(), second.to_bits());

        let via_catalogue = Catalogue::global()
            .evaluate_scalar("indices.bmi", &[weight, height])
            .unwrap();
        prop_assert_eq!(first.to_bits(), via_catalogue.to_bits());
    }

    #[test]
    fn prop_riegel_distance_inverts_time(
        t1 in 60.0f64..20000.0,
        d1 in 100.0f64..50000.0,
        d2 in 100.0f64..50000.0,
    ) {
        let t2 = predict_time(t1, d1, d2);
        let recovered = predict_distance(t1, d1, t2);
        prop_assert!((recovered - d2).abs() / d2 < 1e-9, "{} != {}", recovered, d2);
    }

    #[test]
    fn prop_riegel_zero_sentinel(
        bad in -1000.0f64..=0.0,
        good in 1.0f64..10000.0,
    ) {
        prop_assert_eq!(predict_time(bad, good, good), 0.0);
        prop_assert_eq!(predict_time(good, bad, good), 0.0);
        prop_assert_eq!(predict_time(good, good, bad), 0.0);
        prop_assert_eq!(predict_distance(bad, good, good), 0.0);
        prop_assert_eq!(predict_distance(good, bad, good), 0.0);
        prop_assert_eq!(predict_distance(good, good, bad), 0.0);
    }

    #[test]
    fn prop_substrate_fractions_sum_to_one(percent_vo2 in 0.0f64..=1.0) {
        let total = carbohydrate(percent_vo2) + fat(percent_vo2);
        prop_assert!((total - 1.0).abs() < 1e-3);
    }

    #[test]
    fn prop_hr_zones_are_contiguous(max_hr in 100.0f64..230.0) {
        let zones = hr_zones(max_hr).unwrap();
        let bands = [zones.low, zones.weight_control, zones.aerobic, zones.anaerobic, zones.redline];
        for pair in bands.windows(2) {
            prop_assert_eq!(pair[0].max, pair[1].min);
        }
        prop_assert_eq!(zones.redline.max, max_hr);
        prop_assert!(bands.iter().all(|b| b.min < b.max));
    }

    #[test]
    fn prop_sinclair_clamps_at_reference_weight(
        heavy in 174.393f64..300.0,
        light in 40.0f64..174.0,
        total in 0.0f64..500.0,
    ) {
        prop_assert_eq!(sinclair_male(heavy, total), 1.0);
        let coefficient = sinclair_male(light, total);
        prop_assert!(coefficient > 0.0 && coefficient < 1.0);
        prop_assert!(sinclair_female(light.min(148.0), total) < 1.0);
    }
}
