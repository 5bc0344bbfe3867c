//! ScenarioCostProjector: sanitation, monthly compounding, milestones.

use tracing::warn;

use foresight_core::config::ProjectionConfig;
use foresight_core::constants::{DEFAULT_CURRENCY, PROJECTION_MILESTONES};
use foresight_core::types::TrendDirection;

use super::types::{ProjectionInput, ProjectionPoint, ScenarioProjection};
use crate::numeric::{finite_or_zero, round_to};

/// Compounding scenario cost projector.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCostProjector {
    config: ProjectionConfig,
}

impl ScenarioCostProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project low/mid/high trajectories. Never fails; every output is finite
    /// for finite inputs.
    pub fn project(&self, input: &ProjectionInput) -> ScenarioProjection {
        let cost = finite_or_zero(input.base_cost_per_sqm);
        let gfa = finite_or_zero(input.gfa);
        let trend = match input.trend_direction {
            TrendDirection::InsufficientData => 0.0,
            _ => finite_or_zero(input.trend_percent_change),
        };
        let horizon = self.clamp_horizon(input.horizon_months);

        let market_factor = self.config.effective_market_factor(input.market_condition);
        let monthly_rate = monthly_rate(trend);
        let milestones = milestones(horizon);

        let path = |base: f64| project_path(base, monthly_rate, market_factor, gfa, &milestones);

        ScenarioProjection {
            base_cost_per_sqm: cost,
            base_total_cost: cost * gfa,
            low_scenario: path(cost * self.config.effective_low_scenario_multiplier()),
            mid_scenario: path(cost),
            high_scenario: path(cost * self.config.effective_high_scenario_multiplier()),
            monthly_rate: round_to(monthly_rate, 6),
            market_factor,
            market_condition: input.market_condition,
            annualized_trend: trend,
            horizon_months: horizon,
            currency: input
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }

    /// 0 selects the default horizon; the result lies in [1, max].
    pub fn clamp_horizon(&self, horizon_months: u32) -> u32 {
        let requested = if horizon_months == 0 {
            self.config.effective_default_horizon_months()
        } else {
            horizon_months
        };
        let max = self.config.effective_max_horizon_months().max(1);
        if requested > max {
            warn!(requested, max, "projection: horizon clamped");
        }
        requested.clamp(1, max)
    }
}

/// Convert an annualized percentage into a monthly compounding rate.
///
/// The growth base is floored at zero so declines of 100% or more compound to
/// zero instead of producing NaN.
pub fn monthly_rate(annual_percent: f64) -> f64 {
    (1.0 + annual_percent / 100.0).max(0.0).powf(1.0 / 12.0) - 1.0
}

/// The fixed milestones plus the horizon, ascending and de-duplicated.
pub fn milestones(horizon: u32) -> Vec<u32> {
    let mut months: Vec<u32> = PROJECTION_MILESTONES.to_vec();
    months.push(horizon);
    months.sort_unstable();
    months.dedup();
    months
}

fn project_path(
    base: f64,
    monthly_rate: f64,
    market_factor: f64,
    gfa: f64,
    milestones: &[u32],
) -> Vec<ProjectionPoint> {
    milestones
        .iter()
        .map(|&month| {
            let compounded = base * (1.0 + monthly_rate).powi(month as i32) * market_factor;
            let cumulative_change = if base > 0.0 {
                (compounded - base) / base * 100.0
            } else {
                0.0
            };
            ProjectionPoint {
                month,
                cost_per_sqm: round_to(compounded, 2),
                total_cost: round_to(compounded * gfa, 2),
                cumulative_change: round_to(cumulative_change, 2),
            }
        })
        .collect()
}
