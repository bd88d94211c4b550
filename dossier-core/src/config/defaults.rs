//! Named defaults for all config sections.

/// Similarity ratio above which a same-confidence content change counts as
/// a refinement rather than a rewrite.
pub const DEFAULT_REFINEMENT_RATIO: f64 = 0.5;

/// Token budget for a synthesized context document.
pub const DEFAULT_TOKEN_BUDGET: usize = 4000;

/// Characters per token used by the budget heuristic.
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;

/// Age after which a synthesized document is considered stale (seconds).
pub const DEFAULT_STALENESS_INTERVAL_SECS: u64 = 300;

/// Horizontal spacing between neighbouring nodes in one layout rank.
pub const DEFAULT_NODE_SPACING_X: f64 = 180.0;

/// Vertical spacing between layout ranks.
pub const DEFAULT_NODE_SPACING_Y: f64 = 120.0;

/// Number of barycenter crossing-reduction sweeps.
pub const DEFAULT_BARYCENTER_SWEEPS: usize = 4;
