//! Repositories supplying evidence, trends, score matrices and outcomes.
//!
//! Implementations live outside this workspace (database-backed in
//! production, in-memory fakes in tests). The calculators never call these
//! directly; only the `ForecastEngine` facade does.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SourceResult;
use crate::types::{
    contributions_from_matrix, ComparableOutcome, ContributionEntry, EvidenceDataPoint,
    TrendDataPoint, VariableContribution,
};

/// Priced evidence records.
pub trait EvidenceSource: Send + Sync {
    /// Evidence attached to a project, optionally restricted to a category.
    fn project_evidence(
        &self,
        project_id: &str,
        category: Option<&str>,
    ) -> SourceResult<Vec<EvidenceDataPoint>>;

    /// The market-wide pool used when project evidence is too thin.
    fn market_evidence(&self, category: Option<&str>) -> SourceResult<Vec<EvidenceDataPoint>>;
}

/// Trend snapshots per category.
pub trait TrendSource: Send + Sync {
    fn trends(&self, category: Option<&str>) -> SourceResult<Vec<TrendDataPoint>>;
}

/// A project's composite score and per-variable contributions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    pub composite_score: f64,
    #[serde(default)]
    pub variable_contributions: BTreeMap<String, ContributionEntry>,
}

impl ScoreMatrix {
    /// The contribution map as an ordered list.
    pub fn contributions(&self) -> Vec<VariableContribution> {
        contributions_from_matrix(&self.variable_contributions)
    }
}

/// Score matrices produced by the (external) scoring engine.
pub trait ScoreMatrixSource: Send + Sync {
    fn score_matrix(&self, project_id: &str) -> SourceResult<ScoreMatrix>;
}

/// Historical project outcomes.
pub trait OutcomeSource: Send + Sync {
    fn comparable_outcomes(&self) -> SourceResult<Vec<ComparableOutcome>>;
}
