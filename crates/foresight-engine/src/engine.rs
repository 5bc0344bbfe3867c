//! ForecastEngine: chains the three predictors over the repository traits.
//!
//! Cost range first, then outcome, then a projection seeded with the cost
//! range's P50 and trend. Only repository access can fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use foresight_core::config::ForesightConfig;
use foresight_core::errors::SourceResult;
use foresight_core::traits::{EvidenceSource, OutcomeSource, ScoreMatrixSource, TrendSource};
use foresight_core::types::{Discriminators, MarketCondition};

use crate::cost_range::{CostRangeOptions, CostRangePrediction, CostRangePredictor};
use crate::outcome::{OutcomeOptions, OutcomePrediction, OutcomePredictor};
use crate::projection::{ProjectionInput, ScenarioCostProjector, ScenarioProjection};

/// The repositories a forecast reads from.
#[derive(Clone, Copy)]
pub struct ForecastSources<'a> {
    pub evidence: &'a dyn EvidenceSource,
    pub trends: &'a dyn TrendSource,
    pub scores: &'a dyn ScoreMatrixSource,
    pub outcomes: &'a dyn OutcomeSource,
}

/// What to forecast for one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastRequest {
    pub project_id: String,
    pub category: Option<String>,
    pub geography: Option<String>,
    /// Consult the market-wide evidence pool when project evidence is thin.
    pub use_market_fallback: bool,
    pub currency: Option<String>,
    pub typology: Option<String>,
    pub tier: Option<String>,
    #[serde(flatten)]
    pub discriminators: Discriminators,
    pub gfa: f64,
    pub market_condition: MarketCondition,
    pub horizon_months: u32,
    /// Reference instant for evidence recency. Defaults to now.
    pub as_of: Option<DateTime<Utc>>,
}

/// All three predictions for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectForecast {
    pub project_id: String,
    pub cost_range: CostRangePrediction,
    pub outcome: OutcomePrediction,
    pub projection: ScenarioProjection,
}

/// Facade over the cost range, outcome and projection predictors.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    cost_range: CostRangePredictor,
    outcome: OutcomePredictor,
    projection: ScenarioCostProjector,
}

impl ForecastEngine {
    /// Build an engine from a resolved configuration.
    pub fn new(config: &ForesightConfig) -> Self {
        Self {
            cost_range: CostRangePredictor::new(config.cost_range.clone()),
            outcome: OutcomePredictor::new(config.outcome.clone()),
            projection: ScenarioCostProjector::new(config.projection.clone()),
        }
    }

    pub fn cost_range_predictor(&self) -> &CostRangePredictor {
        &self.cost_range
    }

    pub fn outcome_predictor(&self) -> &OutcomePredictor {
        &self.outcome
    }

    pub fn projector(&self) -> &ScenarioCostProjector {
        &self.projection
    }

    /// Run all three predictions for `request`.
    pub fn forecast(
        &self,
        sources: ForecastSources<'_>,
        request: &ForecastRequest,
    ) -> SourceResult<ProjectForecast> {
        let category = request.category.as_deref();

        let evidence = sources.evidence.project_evidence(&request.project_id, category)?;
        let market_pool = if request.use_market_fallback {
            Some(sources.evidence.market_evidence(category)?)
        } else {
            None
        };
        let trends = sources.trends.trends(category)?;
        debug!(
            project_id = %request.project_id,
            evidence = evidence.len(),
            trends = trends.len(),
            "forecast: evidence loaded"
        );

        let cost_options = CostRangeOptions {
            category: request.category.clone(),
            geography: request.geography.clone(),
            uae_wide_evidence: market_pool.as_deref(),
            currency: request.currency.clone(),
            as_of: request.as_of,
        };
        let cost_range = self.cost_range.predict(&evidence, &trends, &cost_options);

        let matrix = sources.scores.score_matrix(&request.project_id)?;
        let outcomes = sources.outcomes.comparable_outcomes()?;
        let outcome_options = OutcomeOptions {
            typology: request.typology.clone(),
            tier: request.tier.clone(),
            geography: request.geography.clone(),
            discriminators: request.discriminators.clone(),
        };
        let outcome = self.outcome.predict(
            matrix.composite_score,
            &outcomes,
            &matrix.contributions(),
            &outcome_options,
        );

        let projection = self.projection.project(&ProjectionInput {
            base_cost_per_sqm: cost_range.p50,
            gfa: request.gfa,
            trend_percent_change: cost_range.trend_adjustment,
            trend_direction: cost_range.trend_direction,
            market_condition: request.market_condition,
            horizon_months: request.horizon_months,
            currency: Some(cost_range.currency.clone()),
        });

        info!(
            project_id = %request.project_id,
            cost_confidence = %cost_range.confidence,
            p50 = cost_range.p50,
            success_likelihood = outcome.success_likelihood,
            outcome_confidence = %outcome.confidence_level,
            horizon_months = projection.horizon_months,
            "forecast complete"
        );

        Ok(ProjectForecast {
            project_id: request.project_id.clone(),
            cost_range,
            outcome,
            projection,
        })
    }
}
