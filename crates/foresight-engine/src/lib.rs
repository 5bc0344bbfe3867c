//! # foresight-engine
//!
//! Predictive intelligence over sparse, heterogeneous project evidence.
//!
//! ## 3 Predictors
//!
//! | Predictor | Input | Output |
//! |-----------|-------|--------|
//! | Cost range | Priced evidence + trend signals | Weighted P15/P50/P85/P95 bands |
//! | Outcome | Composite score + comparable outcomes + contributions | Success likelihood (5-95) |
//! | Scenario projection | Base cost/sqm + trend + market condition | Low/mid/high trajectories |
//!
//! All three are pure and synchronous. None of them fail: unusable input is
//! reported through `insufficient` confidence labels and zeroed figures.
//! `ForecastEngine` chains them over the repository traits in
//! `foresight_core::traits`.

pub mod cost_range;
pub mod engine;
pub mod numeric;
pub mod outcome;
pub mod projection;

pub use cost_range::{predict_cost_range, CostRangeOptions, CostRangePrediction, CostRangePredictor};
pub use engine::{ForecastEngine, ForecastRequest, ForecastSources, ProjectForecast};
pub use outcome::{predict_outcome, OutcomeOptions, OutcomePrediction, OutcomePredictor};
pub use projection::{
    project_scenario_cost, ProjectionInput, ProjectionPoint, ScenarioCostProjector,
    ScenarioProjection,
};
