//! Property suite for layout determinism and structural guarantees over
//! randomly generated graphs.

use proptest::prelude::*;

use dossier_core::graph::EdgeType;
use dossier_core::models::LayoutFilter;
use dossier_layout::LayoutEngine;
use test_fixtures::GraphFixture;

#[derive(Debug, Clone)]
struct GenEdge {
    from: usize,
    to: usize,
    edge_type: EdgeType,
    strength: f64,
}

fn edge_type_strategy() -> impl Strategy<Value = EdgeType> {
    prop::sample::select(EdgeType::ALL.to_vec())
}

fn edge_strategy(node_count: usize) -> impl Strategy<Value = GenEdge> {
    (
        0..node_count,
        0..node_count,
        edge_type_strategy(),
        0.0f64..=1.0,
    )
        .prop_map(|(from, to, edge_type, strength)| GenEdge {
            from,
            to,
            edge_type,
            strength,
        })
}

fn build_fixture(confidences: &[f64], edges: &[GenEdge]) -> GraphFixture {
    let fx = GraphFixture::new("prop");
    let nodes: Vec<_> = confidences
        .iter()
        .enumerate()
        .map(|(i, c)| fx.belief(&format!("generated claim {i}"), *c))
        .collect();
    for e in edges {
        if e.from != e.to {
            fx.edge(
                &nodes[e.from],
                &nodes[e.to],
                e.edge_type,
                e.strength,
            );
        }
    }
    fx
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identical_inputs_yield_identical_layouts(
        confidences in prop::collection::vec(0.0f64..=1.0, 2..8),
        edges in prop::collection::vec(edge_strategy(8), 0..12),
    ) {
        let edges: Vec<GenEdge> = edges
            .into_iter()
            .filter(|e| e.from < confidences.len() && e.to < confidences.len())
            .collect();
        let fx = build_fixture(&confidences, &edges);
        let engine = LayoutEngine::default();
        let snapshot = fx.store.snapshot();

        let first = engine.layout(&snapshot, &LayoutFilter::default()).unwrap();
        let second = engine.layout(&snapshot, &LayoutFilter::default()).unwrap();
        prop_assert_eq!(first.positions, second.positions);
    }

    #[test]
    fn every_node_is_positioned_exactly_once(
        confidences in prop::collection::vec(0.0f64..=1.0, 1..8),
        edges in prop::collection::vec(edge_strategy(8), 0..12),
    ) {
        let edges: Vec<GenEdge> = edges
            .into_iter()
            .filter(|e| e.from < confidences.len() && e.to < confidences.len())
            .collect();
        let fx = build_fixture(&confidences, &edges);
        let snapshot = fx.store.snapshot();

        let layout = LayoutEngine::default()
            .layout(&snapshot, &LayoutFilter::default())
            .unwrap();
        prop_assert_eq!(layout.positions.len(), snapshot.nodes.len());
        for node in &snapshot.nodes {
            prop_assert!(layout.position(&node.id).is_some());
        }
    }

    #[test]
    fn no_two_nodes_share_coordinates(
        confidences in prop::collection::vec(0.0f64..=1.0, 2..8),
        edges in prop::collection::vec(edge_strategy(8), 0..12),
    ) {
        let edges: Vec<GenEdge> = edges
            .into_iter()
            .filter(|e| e.from < confidences.len() && e.to < confidences.len())
            .collect();
        let fx = build_fixture(&confidences, &edges);

        let layout = LayoutEngine::default()
            .layout(&fx.store.snapshot(), &LayoutFilter::default())
            .unwrap();
        for (i, a) in layout.positions.iter().enumerate() {
            for b in &layout.positions[i + 1..] {
                prop_assert!(a.x != b.x || a.y != b.y);
            }
        }
    }
}
