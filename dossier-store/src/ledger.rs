//! Confidence history ledger: deterministic classification of belief
//! transitions. Entries are append-only; the store commits them in the same
//! critical section as the node write.

use chrono::Utc;

use dossier_core::config::LedgerConfig;
use dossier_core::graph::{ChangeType, Confidence, HistoryEntry};

/// Classify one belief transition.
///
/// Confidence delta wins over content comparison; equal confidence with
/// different content is a refinement when the texts stay similar enough
/// (normalized edit distance), otherwise a rewrite.
pub fn classify(
    previous_confidence: Confidence,
    new_confidence: Confidence,
    previous_content: &str,
    new_content: &str,
    config: &LedgerConfig,
) -> ChangeType {
    if new_confidence > previous_confidence {
        ChangeType::ConfidenceIncrease
    } else if new_confidence < previous_confidence {
        ChangeType::ConfidenceDecrease
    } else if similarity_ratio(previous_content, new_content) > config.refinement_ratio {
        ChangeType::ContentRefined
    } else {
        ChangeType::ContentChanged
    }
}

/// Build a ledger entry. `created_at` is stamped here; ordering within a
/// belief's history follows insertion order, which the store serializes.
#[allow(clippy::too_many_arguments)]
pub fn build_entry(
    belief_id: &str,
    previous_confidence: Confidence,
    new_confidence: Confidence,
    previous_content: &str,
    new_content: &str,
    change_type: ChangeType,
    change_reason: String,
    triggered_by_node_id: Option<String>,
) -> HistoryEntry {
    HistoryEntry {
        id: uuid::Uuid::new_v4().to_string(),
        belief_id: belief_id.to_string(),
        previous_confidence,
        new_confidence,
        previous_content: previous_content.to_string(),
        new_content: new_content.to_string(),
        change_type,
        change_reason,
        triggered_by_node_id,
        created_at: Utc::now(),
    }
}

/// Normalized similarity in [0,1]: 1.0 for identical strings, 0.0 for a
/// full rewrite.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let dist = levenshtein(a, b);
    1.0 - (dist as f64 / max_len as f64)
}

/// Simple Levenshtein distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
