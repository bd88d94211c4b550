//! # dossier-synthesis
//!
//! Compresses a project graph into a single text document under a token
//! budget, for injection into a downstream reasoning process. Pure
//! read-side: synthesis never mutates graph state, so a slow synthesis
//! cannot block store writers.

pub mod engine;
pub mod sections;
pub mod tokens;

pub use engine::ContextSynthesizer;
pub use tokens::TokenEstimator;
