//! Projection input and scenario output.

use serde::{Deserialize, Serialize};

use foresight_core::types::{MarketCondition, TrendDirection};

/// Inputs for a scenario cost projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub base_cost_per_sqm: f64,
    /// Gross floor area.
    pub gfa: f64,
    /// Signed, annualized percentage.
    pub trend_percent_change: f64,
    pub trend_direction: TrendDirection,
    #[serde(default)]
    pub market_condition: MarketCondition,
    /// 0 selects the default horizon; larger values are clamped.
    #[serde(default)]
    pub horizon_months: u32,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Projected cost at one milestone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub cost_per_sqm: f64,
    pub total_cost: f64,
    /// Percentage change against the scenario's own base cost.
    pub cumulative_change: f64,
}

/// Low/mid/high cost trajectories over the projection horizon.
///
/// Figures are rounded to 2 decimals, so `low < mid < high` holds strictly
/// only while the scenario costs differ by more than 0.01. Very small bases
/// can round to equal values; the order is never inverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub base_cost_per_sqm: f64,
    pub base_total_cost: f64,
    pub low_scenario: Vec<ProjectionPoint>,
    pub mid_scenario: Vec<ProjectionPoint>,
    pub high_scenario: Vec<ProjectionPoint>,
    pub monthly_rate: f64,
    pub market_factor: f64,
    pub market_condition: MarketCondition,
    pub annualized_trend: f64,
    /// Horizon after defaulting and clamping.
    pub horizon_months: u32,
    pub currency: String,
}

impl ScenarioProjection {
    /// Milestone months shared by all three scenarios.
    pub fn milestones(&self) -> Vec<u32> {
        self.mid_scenario.iter().map(|p| p.month).collect()
    }
}
