//! Value types shared by the Foresight engines.
//! Closed vocabulary enums, evidence records, comparable outcomes.

pub mod collections;
pub mod evidence;
pub mod outcome;
pub mod vocabulary;

pub use collections::FxHashMap;
pub use evidence::{EvidenceDataPoint, TrendDataPoint};
pub use outcome::{
    contributions_from_matrix, ComparableOutcome, ContributionEntry, Discriminator,
    Discriminators, VariableContribution,
};
pub use vocabulary::{
    ConfidenceLevel, DecisionStatus, MarketCondition, ReliabilityGrade, TrendDirection,
};
