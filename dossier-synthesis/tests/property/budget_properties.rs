//! Property suite for budget enforcement: no generated graph and no budget
//! combination may produce a document exceeding its character allowance.

use proptest::prelude::*;

use dossier_core::config::SynthesisConfig;
use dossier_synthesis::ContextSynthesizer;
use test_fixtures::GraphFixture;

fn content_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{1,120}"
}

proptest! {
    #[test]
    fn document_never_exceeds_the_character_allowance(
        facts in prop::collection::vec(content_strategy(), 0..15),
        beliefs in prop::collection::vec((content_strategy(), 0.0f64..=1.0), 0..15),
        insights in prop::collection::vec((content_strategy(), 0.0f64..=1.0), 0..10),
        token_budget in 1usize..2000,
        chars_per_token in 1usize..8,
    ) {
        let fx = GraphFixture::new("prop");
        for content in &facts {
            fx.fact(content);
        }
        for (content, confidence) in &beliefs {
            fx.belief(content, *confidence);
        }
        for (content, confidence) in &insights {
            fx.insight(content, *confidence);
        }

        let config = SynthesisConfig {
            token_budget,
            chars_per_token,
            ..Default::default()
        };
        let doc = ContextSynthesizer::new(config).synthesize(&fx.store.snapshot());

        prop_assert!(doc.text.chars().count() <= token_budget * chars_per_token);
        prop_assert!(doc.token_estimate <= token_budget);
    }

    #[test]
    fn section_usage_always_matches_the_emitted_text(
        beliefs in prop::collection::vec((content_strategy(), 0.0f64..=1.0), 1..10),
        token_budget in 50usize..1000,
    ) {
        let fx = GraphFixture::new("prop");
        for (content, confidence) in &beliefs {
            fx.belief(content, *confidence);
        }

        let config = SynthesisConfig {
            token_budget,
            ..Default::default()
        };
        let doc = ContextSynthesizer::new(config).synthesize(&fx.store.snapshot());

        let total: usize = doc.sections.iter().map(|s| s.chars_used).sum();
        prop_assert_eq!(total, doc.text.chars().count());
    }
}
