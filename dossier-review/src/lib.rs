//! # dossier-review
//!
//! Human-review actions on beliefs. This is the only path by which a
//! belief's consultant status changes; evidence-driven confidence updates
//! arrive as ordinary `update_belief` calls from producers instead.

pub mod transitions;

pub use transitions::{ReviewAction, ReviewEngine, ReviewOutcome};
