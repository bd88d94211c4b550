use dossier_core::config::SynthesisConfig;
use dossier_core::graph::EdgeType;
use dossier_review::ReviewEngine;
use dossier_synthesis::ContextSynthesizer;
use test_fixtures::GraphFixture;

fn populated_fixture() -> GraphFixture {
    let fx = GraphFixture::new("p1");
    let fact = fx.fact("latency doubled after the June deploy");
    let belief = fx.belief("the June deploy introduced a regression", 0.75);
    fx.belief("the vendor API is stable", 0.3);
    fx.insight("deploys cluster before quarter close", 0.6);
    fx.edge(&fact, &belief, EdgeType::Supports, 0.8);
    fx
}

#[test]
fn document_fits_within_the_character_allowance() {
    let fx = populated_fixture();
    let config = SynthesisConfig {
        token_budget: 50,
        ..Default::default()
    };
    let synthesizer = ContextSynthesizer::new(config.clone());

    let doc = synthesizer.synthesize(&fx.store.snapshot());
    assert!(doc.text.chars().count() <= config.token_budget * config.chars_per_token);
    assert!(doc.token_estimate <= config.token_budget);
}

#[test]
fn resynthesis_of_unchanged_graph_is_byte_identical() {
    let fx = populated_fixture();
    let synthesizer = ContextSynthesizer::default();
    let snapshot = fx.store.snapshot();

    let first = synthesizer.synthesize(&snapshot);
    let second = synthesizer.synthesize(&snapshot);
    assert_eq!(first.text, second.text);
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.synthesized_at, second.synthesized_at);
}

#[test]
fn mutation_produces_a_new_document() {
    let fx = populated_fixture();
    let synthesizer = ContextSynthesizer::default();

    let first = synthesizer.synthesize(&fx.store.snapshot());
    fx.fact("the rollback restored latency");
    let second = synthesizer.synthesize(&fx.store.snapshot());

    assert!(second.graph_version > first.graph_version);
    assert_ne!(first.fingerprint, second.fingerprint);
}

#[test]
fn current_reports_staleness_after_mutation() {
    let fx = populated_fixture();
    let synthesizer = ContextSynthesizer::default();

    assert!(synthesizer.current(&fx.store.snapshot()).is_none());

    synthesizer.synthesize(&fx.store.snapshot());
    let fresh = synthesizer.current(&fx.store.snapshot()).unwrap();
    assert!(!fresh.stale);

    fx.fact("new finding lands");
    let outdated = synthesizer.current(&fx.store.snapshot()).unwrap();
    assert!(outdated.stale);
}

#[test]
fn zero_interval_marks_documents_stale_immediately() {
    let fx = populated_fixture();
    let config = SynthesisConfig {
        staleness_interval_secs: 0,
        ..Default::default()
    };
    let synthesizer = ContextSynthesizer::new(config);

    synthesizer.synthesize(&fx.store.snapshot());
    let doc = synthesizer.current(&fx.store.snapshot()).unwrap();
    assert!(doc.stale);
}

#[test]
fn sections_come_in_fixed_order() {
    let fx = populated_fixture();
    let doc = ContextSynthesizer::default().synthesize(&fx.store.snapshot());

    let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Key Facts", "Current Beliefs", "Insights"]);

    let facts_at = doc.text.find("## Key Facts").unwrap();
    let beliefs_at = doc.text.find("## Current Beliefs").unwrap();
    let insights_at = doc.text.find("## Insights").unwrap();
    assert!(facts_at < beliefs_at && beliefs_at < insights_at);
}

#[test]
fn beliefs_render_strongest_first_with_status_markers() {
    let fx = GraphFixture::new("p1");
    let strong = fx.belief("pricing pressure is the core risk", 0.9);
    fx.belief("the sales team is understaffed", 0.4);
    ReviewEngine::new(fx.store.clone())
        .confirm(&strong.id, None)
        .unwrap();

    let doc = ContextSynthesizer::default().synthesize(&fx.store.snapshot());
    let strong_at = doc.text.find("pricing pressure").unwrap();
    let weak_at = doc.text.find("understaffed").unwrap();
    assert!(strong_at < weak_at);
    assert!(doc.text.contains("[90% high]"));
    assert!(doc.text.contains("[confirmed]"));
}

#[test]
fn lower_priority_sections_starve_under_a_tight_budget() {
    let fx = GraphFixture::new("p1");
    for i in 0..20 {
        fx.fact(&format!("finding number {i} with some supporting detail"));
    }
    fx.insight("this insight should not fit", 0.9);

    let config = SynthesisConfig {
        token_budget: 80,
        ..Default::default()
    };
    let doc = ContextSynthesizer::new(config).synthesize(&fx.store.snapshot());

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, "Key Facts");
    assert!(!doc.text.contains("should not fit"));
}

#[test]
fn section_usage_accounts_for_the_whole_text() {
    let fx = populated_fixture();
    let doc = ContextSynthesizer::default().synthesize(&fx.store.snapshot());

    let total: usize = doc.sections.iter().map(|s| s.chars_used).sum();
    assert_eq!(total, doc.text.chars().count());
    let entries: usize = doc.sections.iter().map(|s| s.entry_count).sum();
    assert_eq!(entries, 4);
}

#[test]
fn empty_graph_yields_an_empty_document() {
    let fx = GraphFixture::new("p1");
    let doc = ContextSynthesizer::default().synthesize(&fx.store.snapshot());
    assert!(doc.text.is_empty());
    assert!(doc.sections.is_empty());
    assert_eq!(doc.token_estimate, 0);
}
