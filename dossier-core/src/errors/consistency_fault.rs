/// Internal-consistency fault: a read-side computation found an edge whose
/// endpoint is absent from the snapshot it was handed. This indicates the
/// persistence collaborator violated the Graph Store's invariants, so it is
/// reported separately from the normal, caller-correctable errors.
#[derive(Debug, thiserror::Error)]
#[error("graph inconsistency: edge {edge_id} references missing node {node_id}")]
pub struct ConsistencyFault {
    pub edge_id: String,
    pub node_id: String,
}
