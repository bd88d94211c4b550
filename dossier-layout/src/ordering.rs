//! Barycenter crossing reduction: order nodes within each rank by the mean
//! position of their neighbors in the adjacent rank, a fixed number of
//! alternating down/up sweeps.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::rank::Ranked;

/// Per-rank node ordering, rank ascending, each rank's nodes left to right.
pub type RankOrder = BTreeMap<usize, Vec<String>>;

pub fn order_ranks(ranked: &Ranked, sweeps: usize) -> RankOrder {
    let mut order: RankOrder = BTreeMap::new();
    for id in &ranked.node_ids {
        let rank = ranked.ranks.get(id).copied().unwrap_or(0);
        order.entry(rank).or_default().push(id.clone());
    }
    // Initial order within a rank: node id, for a stable starting point.
    for ids in order.values_mut() {
        ids.sort();
    }

    // Adjacency restricted to ranked (DAG) edges.
    let mut upward: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut downward: HashMap<&str, Vec<&str>> = HashMap::new();
    for (from, to) in &ranked.dag_edges {
        upward.entry(to.as_str()).or_default().push(from.as_str());
        downward.entry(from.as_str()).or_default().push(to.as_str());
    }

    let rank_keys: Vec<usize> = order.keys().copied().collect();
    for _ in 0..sweeps {
        // Downward pass: order each rank by barycenter of predecessors.
        for &rank in &rank_keys {
            if let Some(prev) = rank_keys.iter().copied().filter(|r| *r < rank).max() {
                let positions = position_map(&order[&prev]);
                if let Some(ids) = order.get_mut(&rank) {
                    reorder(ids, &upward, &positions);
                }
            }
        }
        // Upward pass: order each rank by barycenter of successors.
        for &rank in rank_keys.iter().rev() {
            if let Some(next) = rank_keys.iter().copied().filter(|r| *r > rank).min() {
                let positions = position_map(&order[&next]);
                if let Some(ids) = order.get_mut(&rank) {
                    reorder(ids, &downward, &positions);
                }
            }
        }
    }

    order
}

fn position_map(ids: &[String]) -> HashMap<String, usize> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect()
}

/// Stable sort by (barycenter, current position, id). Nodes with no
/// neighbors in the adjacent rank keep their current position as the
/// barycenter so they do not drift.
fn reorder(
    ids: &mut Vec<String>,
    neighbors: &HashMap<&str, Vec<&str>>,
    adjacent_positions: &HashMap<String, usize>,
) {
    let mut keyed: Vec<(f64, usize, String)> = ids
        .iter()
        .enumerate()
        .map(|(pos, id)| {
            let linked: Vec<usize> = neighbors
                .get(id.as_str())
                .into_iter()
                .flatten()
                .filter_map(|n| adjacent_positions.get(*n).copied())
                .collect();
            let barycenter = if linked.is_empty() {
                pos as f64
            } else {
                linked.iter().sum::<usize>() as f64 / linked.len() as f64
            };
            (barycenter, pos, id.clone())
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    *ids = keyed.into_iter().map(|(_, _, id)| id).collect();
}
