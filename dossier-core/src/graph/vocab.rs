//! Closed vocabularies. Unknown values are rejected at deserialization,
//! which is what makes `InvalidNode` enforceable at the type level.

use serde::{Deserialize, Serialize};

/// Semantic category of a belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeliefDomain {
    Requirements,
    Technical,
    Business,
    UserExperience,
    Process,
    Stakeholder,
    Market,
    Risk,
}

impl BeliefDomain {
    pub const COUNT: usize = 8;

    /// All variants for iteration.
    pub const ALL: [BeliefDomain; 8] = [
        Self::Requirements,
        Self::Technical,
        Self::Business,
        Self::UserExperience,
        Self::Process,
        Self::Stakeholder,
        Self::Market,
        Self::Risk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Technical => "technical",
            Self::Business => "business",
            Self::UserExperience => "user_experience",
            Self::Process => "process",
            Self::Stakeholder => "stakeholder",
            Self::Market => "market",
            Self::Risk => "risk",
        }
    }
}

/// Kind of derived observation an insight captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Behavioral,
    Contradiction,
    Evolution,
    Risk,
    Opportunity,
}

impl InsightType {
    pub const ALL: [InsightType; 5] = [
        Self::Behavioral,
        Self::Contradiction,
        Self::Evolution,
        Self::Risk,
        Self::Opportunity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Behavioral => "behavioral",
            Self::Contradiction => "contradiction",
            Self::Evolution => "evolution",
            Self::Risk => "risk",
            Self::Opportunity => "opportunity",
        }
    }
}

/// Where a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Signal,
    Document,
    Inferred,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signal => "signal",
            Self::Document => "document",
            Self::Inferred => "inferred",
        }
    }
}

/// Human-review outcome attached to a belief.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultantStatus {
    #[default]
    None,
    Confirmed,
    Disputed,
    Archived,
}

impl ConsultantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Confirmed => "confirmed",
            Self::Disputed => "disputed",
            Self::Archived => "archived",
        }
    }
}
