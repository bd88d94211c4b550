/// Dossier engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of beliefs returned by a top-beliefs query.
pub const TOP_BELIEF_LIMIT: usize = 10;

/// Minimum length of a manually entered belief statement.
pub const MIN_STATEMENT_CHARS: usize = 5;

/// Upper bound for the manual-entry confidence percentage.
pub const MAX_CONFIDENCE_PERCENT: u8 = 100;
