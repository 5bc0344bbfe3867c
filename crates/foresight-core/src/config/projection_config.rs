//! Scenario cost projector configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::MarketCondition;

/// Configuration for the compounding scenario cost projector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Horizon used when a caller passes 0 months. Default: 18.
    pub default_horizon_months: Option<u32>,
    /// Upper clamp for the horizon. Default: 120.
    pub max_horizon_months: Option<u32>,
    /// Market factor for a tight market. Default: 1.05.
    pub tight_market_factor: Option<f64>,
    /// Market factor for a soft market. Default: 0.95.
    pub soft_market_factor: Option<f64>,
    /// Base cost multiplier for the low scenario. Default: 0.9.
    pub low_scenario_multiplier: Option<f64>,
    /// Base cost multiplier for the high scenario. Default: 1.15.
    pub high_scenario_multiplier: Option<f64>,
}

impl ProjectionConfig {
    pub fn effective_default_horizon_months(&self) -> u32 {
        self.default_horizon_months
            .unwrap_or(constants::DEFAULT_HORIZON_MONTHS)
    }

    pub fn effective_max_horizon_months(&self) -> u32 {
        self.max_horizon_months
            .unwrap_or(constants::DEFAULT_MAX_HORIZON_MONTHS)
    }

    /// Returns the multiplier applied for a market condition.
    pub fn effective_market_factor(&self, condition: MarketCondition) -> f64 {
        match condition {
            MarketCondition::Tight => self
                .tight_market_factor
                .unwrap_or(constants::DEFAULT_TIGHT_MARKET_FACTOR),
            MarketCondition::Soft => self
                .soft_market_factor
                .unwrap_or(constants::DEFAULT_SOFT_MARKET_FACTOR),
            MarketCondition::Balanced => 1.0,
        }
    }

    pub fn effective_low_scenario_multiplier(&self) -> f64 {
        self.low_scenario_multiplier
            .unwrap_or(constants::DEFAULT_LOW_SCENARIO_MULTIPLIER)
    }

    pub fn effective_high_scenario_multiplier(&self) -> f64 {
        self.high_scenario_multiplier
            .unwrap_or(constants::DEFAULT_HIGH_SCENARIO_MULTIPLIER)
    }
}
