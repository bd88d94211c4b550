use dossier_core::errors::{DossierError, GraphError};
use dossier_core::{ChangeType, ConsultantStatus};
use dossier_review::ReviewEngine;
use test_fixtures::GraphFixture;

fn engine(fx: &GraphFixture) -> ReviewEngine {
    ReviewEngine::new(fx.store.clone())
}

#[test]
fn confirm_transitions_from_none_without_history() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("the CFO owns the final decision", 0.7);

    let outcome = engine(&fx).confirm(&belief.id, None).unwrap();
    assert!(outcome.changed);
    assert_eq!(
        outcome.belief.as_belief().unwrap().consultant_status,
        ConsultantStatus::Confirmed
    );
    assert!(fx.store.history(&belief.id).unwrap().is_empty());
}

#[test]
fn second_confirm_is_a_noop() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("the CFO owns the final decision", 0.7);
    let reviewer = engine(&fx);

    reviewer.confirm(&belief.id, None).unwrap();
    let outcome = reviewer.confirm(&belief.id, None).unwrap();
    assert!(!outcome.changed);
    assert_eq!(
        outcome.belief.as_belief().unwrap().consultant_status,
        ConsultantStatus::Confirmed
    );
    assert!(fx.store.history(&belief.id).unwrap().is_empty());
}

#[test]
fn confirm_after_dispute_is_rejected() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("scope creep is the root cause", 0.6);
    let reviewer = engine(&fx);

    reviewer.dispute(&belief.id, None).unwrap();
    let result = reviewer.confirm(&belief.id, None);
    assert!(matches!(
        result,
        Err(DossierError::Graph(GraphError::ValidationError { .. }))
    ));
}

#[test]
fn note_is_stored_verbatim() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("the staging environment mirrors prod", 0.5);

    let outcome = engine(&fx)
        .dispute(&belief.id, Some("prod has 3x the data volume".to_string()))
        .unwrap();
    assert_eq!(
        outcome.belief.as_belief().unwrap().consultant_note.as_deref(),
        Some("prod has 3x the data volume")
    );
}

#[test]
fn archive_records_history_and_deactivates() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("superseded assumption", 0.4);

    let outcome = engine(&fx)
        .archive(&belief.id, Some("no longer relevant".to_string()))
        .unwrap();
    assert!(outcome.changed);
    assert_eq!(
        outcome.belief.as_belief().unwrap().consultant_status,
        ConsultantStatus::Archived
    );

    let history = fx.store.history(&belief.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].change_type, ChangeType::Archived);
    assert_eq!(history[0].change_reason, "no longer relevant");

    // Archived beliefs drop out of the default snapshot but stay auditable.
    assert!(fx.store.snapshot().node(&belief.id).is_none());
    assert!(fx.store.snapshot_full().node(&belief.id).is_some());
}

#[test]
fn archive_is_allowed_from_confirmed_and_disputed() {
    let fx = GraphFixture::new("p1");
    let confirmed = fx.belief("confirmed then archived", 0.6);
    let disputed = fx.belief("disputed then archived", 0.6);
    let reviewer = engine(&fx);

    reviewer.confirm(&confirmed.id, None).unwrap();
    reviewer.dispute(&disputed.id, None).unwrap();

    assert!(reviewer.archive(&confirmed.id, None).unwrap().changed);
    assert!(reviewer.archive(&disputed.id, None).unwrap().changed);
}

#[test]
fn rearchive_is_a_noop_and_never_unarchives() {
    let fx = GraphFixture::new("p1");
    let belief = fx.belief("archived once", 0.4);
    let reviewer = engine(&fx);

    reviewer.archive(&belief.id, None).unwrap();
    let outcome = reviewer.archive(&belief.id, None).unwrap();
    assert!(!outcome.changed);
    assert_eq!(
        outcome.belief.as_belief().unwrap().consultant_status,
        ConsultantStatus::Archived
    );
    // Still exactly one archived entry.
    assert_eq!(fx.store.history(&belief.id).unwrap().len(), 1);
}

#[test]
fn review_actions_reject_facts() {
    let fx = GraphFixture::new("p1");
    let fact = fx.fact("facts are not reviewable");

    let result = engine(&fx).confirm(&fact.id, None);
    assert!(matches!(
        result,
        Err(DossierError::Graph(GraphError::WrongVariant { .. }))
    ));
}
