//! Fixed per-entry text shapes for the three digest sections. Rendering is
//! deterministic: no timestamps, no randomness, so identical snapshots
//! produce identical text.

use dossier_core::{KnowledgeNode, NodeBody};

pub const FACTS_TITLE: &str = "Key Facts";
pub const BELIEFS_TITLE: &str = "Current Beliefs";
pub const INSIGHTS_TITLE: &str = "Insights";

pub fn section_header(title: &str) -> String {
    format!("## {title}\n\n")
}

/// One digest line per node, shaped by variant.
pub fn render(node: &KnowledgeNode) -> String {
    match &node.body {
        NodeBody::Fact(f) => {
            format!("- ({}) {}\n", f.source_type.as_str(), f.content)
        }
        NodeBody::Belief(b) => {
            let pct = (b.confidence.value() * 100.0).round() as u32;
            let mut line = format!(
                "- [{pct}% {}] ({}) {}",
                b.confidence.label(),
                b.domain.as_str(),
                b.content
            );
            match b.consultant_status {
                dossier_core::ConsultantStatus::Confirmed => line.push_str(" [confirmed]"),
                dossier_core::ConsultantStatus::Disputed => line.push_str(" [disputed]"),
                _ => {}
            }
            line.push('\n');
            line
        }
        NodeBody::Insight(i) => {
            let pct = (i.confidence.value() * 100.0).round() as u32;
            format!("- [{}, {pct}%] {}\n", i.insight_type.as_str(), i.content)
        }
    }
}
