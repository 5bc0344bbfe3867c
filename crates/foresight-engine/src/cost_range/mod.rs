//! Cost Range Predictor: weighted P15/P50/P85/P95 cost bands.
//!
//! Evidence is weighted by reliability grade plus a recency bonus; each
//! percentile is read off a weighted step function (no interpolation).
//! Thin local evidence falls back to a market-wide pool for the category.

pub mod percentile;
pub mod predictor;
pub mod types;

pub use percentile::{weighted_percentile, WeightedValue};
pub use predictor::CostRangePredictor;
pub use types::{CostRangeOptions, CostRangePrediction};

use foresight_core::types::{EvidenceDataPoint, TrendDataPoint};

/// Predict a cost range with the compiled default configuration.
pub fn predict_cost_range(
    evidence: &[EvidenceDataPoint],
    trends: &[TrendDataPoint],
    options: &CostRangeOptions<'_>,
) -> CostRangePrediction {
    CostRangePredictor::default().predict(evidence, trends, options)
}
