//! # dossier-store
//!
//! The Graph Store owns the canonical node/edge set per project and is the
//! single shared-mutable resource of the engine. Every mutation passes
//! through it so structural invariants and the history ledger stay
//! consistent. The Confidence History Ledger lives here too: it is derived
//! from store mutations and must commit atomically with them.

pub mod engine;
pub mod ledger;
pub mod registry;
pub mod stats;

pub use engine::{ProjectStore, ReviewTransition};
pub use registry::ProjectRegistry;
