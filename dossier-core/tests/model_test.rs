use dossier_core::graph::{
    BeliefDraft, FactDraft, NodeDraft, SourceType,
};
use dossier_core::{BeliefDomain, NodeType};

#[test]
fn node_serializes_with_snake_case_tag() {
    let node = NodeDraft::Fact(FactDraft {
        content: "client signed the SOW on 2026-08-12".to_string(),
        summary: "SOW signed".to_string(),
        source_type: SourceType::Document,
        linked_entity: None,
    })
    .into_node("proj-1");

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["node_type"], "fact");
    assert_eq!(json["data"]["source_type"], "document");
    assert_eq!(json["active"], true);
}

#[test]
fn belief_json_round_trips() {
    let node = NodeDraft::Belief(BeliefDraft {
        content: "the team prefers weekly releases".to_string(),
        summary: "weekly releases".to_string(),
        confidence: 0.73,
        domain: BeliefDomain::Process,
    })
    .into_node("proj-1");

    let json = serde_json::to_string(&node).unwrap();
    let back: dossier_core::KnowledgeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, node.id);
    assert_eq!(back.node_type(), NodeType::Belief);
    assert_eq!(back.confidence().unwrap().value(), 0.73);
}

#[test]
fn unknown_domain_is_rejected_at_deserialization() {
    let result: Result<BeliefDomain, _> = serde_json::from_str("\"astrology\"");
    assert!(result.is_err());
}
