mod causal_chain;
mod context_document;
mod layout;
mod snapshot;

pub use causal_chain::{CausalChain, CausalLink};
pub use context_document::{ContextDocument, SectionUsage};
pub use layout::{GraphLayout, LayoutFilter, NodePosition};
pub use snapshot::{GraphSnapshot, GraphStats};
