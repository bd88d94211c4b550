//! Property suite for ledger classification and the similarity heuristic.

use proptest::prelude::*;

use dossier_core::config::LedgerConfig;
use dossier_core::graph::{ChangeType, Confidence};
use dossier_store::ledger;

proptest! {
    #[test]
    fn similarity_ratio_stays_in_unit_range(a in ".{0,60}", b in ".{0,60}") {
        let ratio = ledger::similarity_ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn identical_strings_are_fully_similar(a in ".{0,60}") {
        prop_assert_eq!(ledger::similarity_ratio(&a, &a), 1.0);
    }

    #[test]
    fn similarity_is_symmetric(a in ".{0,40}", b in ".{0,40}") {
        let forward = ledger::similarity_ratio(&a, &b);
        let backward = ledger::similarity_ratio(&b, &a);
        prop_assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn confidence_delta_always_outranks_content(
        prev in 0.0f64..=1.0,
        next in 0.0f64..=1.0,
        old_text in "[a-z ]{1,40}",
        new_text in "[a-z ]{1,40}",
    ) {
        prop_assume!(prev != next);
        let change = ledger::classify(
            Confidence::new(prev),
            Confidence::new(next),
            &old_text,
            &new_text,
            &LedgerConfig::default(),
        );
        let expected = if next > prev {
            ChangeType::ConfidenceIncrease
        } else {
            ChangeType::ConfidenceDecrease
        };
        prop_assert_eq!(change, expected);
    }

    #[test]
    fn equal_confidence_classifies_by_content_only(
        value in 0.0f64..=1.0,
        old_text in "[a-z ]{1,40}",
        new_text in "[a-z ]{1,40}",
    ) {
        let change = ledger::classify(
            Confidence::new(value),
            Confidence::new(value),
            &old_text,
            &new_text,
            &LedgerConfig::default(),
        );
        prop_assert!(matches!(
            change,
            ChangeType::ContentRefined | ChangeType::ContentChanged
        ));
    }
}
