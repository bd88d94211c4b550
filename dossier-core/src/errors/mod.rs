mod consistency_fault;
mod graph_error;

pub use consistency_fault::ConsistencyFault;
pub use graph_error::GraphError;

/// Umbrella error for the dossier engine.
#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyFault),

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Result alias used across the workspace.
pub type DossierResult<T> = Result<T, DossierError>;
