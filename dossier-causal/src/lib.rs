//! # dossier-causal
//!
//! Pure read-side view: given a belief, derive the facts/beliefs that
//! support it, those that contradict it, and what it leads to. Resolution
//! is one hop only, so results stay bounded and explainable.

pub mod adjacency;
pub mod resolver;

pub use resolver::{resolve, top_beliefs};
