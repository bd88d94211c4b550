/// Caller-correctable errors raised by Graph Store mutations.
/// None of these leaves a partial mutation behind.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid node: {reason}")]
    InvalidNode { reason: String },

    #[error("dangling edge: node {endpoint} not found in project {project_id}")]
    DanglingEdge { project_id: String, endpoint: String },

    #[error("node not found: {id}")]
    NotFound { id: String },

    #[error("wrong node variant for {id}: expected {expected}, got {actual}")]
    WrongVariant {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("validation error: {reason}")]
    ValidationError { reason: String },
}
