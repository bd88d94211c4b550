use dossier_core::Confidence;
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_always_lands_in_unit_interval(v in -10.0f64..10.0) {
        let c = Confidence::new(v);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn in_range_values_pass_through_exactly(v in 0.0f64..=1.0) {
        let c = Confidence::new(v);
        prop_assert_eq!(c.value(), v);
    }

    #[test]
    fn percent_conversion_stays_close(pct in 0u8..=100) {
        let c = Confidence::from_percent(pct);
        let expected = f64::from(pct) / 100.0;
        prop_assert!((c.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn label_matches_thresholds(v in 0.0f64..=1.0) {
        let label = Confidence::new(v).label();
        if v >= Confidence::HIGH {
            prop_assert_eq!(label, "high");
        } else if v >= Confidence::MEDIUM {
            prop_assert_eq!(label, "medium");
        } else {
            prop_assert_eq!(label, "low");
        }
    }
}
