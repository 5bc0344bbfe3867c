//! Outcome predictor configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the comparable-based outcome predictor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutcomeConfig {
    /// Typology assumed when a query names none. Default: "Residential".
    pub default_typology: Option<String>,
    /// Tier assumed when a query names none. Default: "Mid".
    pub default_tier: Option<String>,
    /// Success likelihood floor. Default: 5.0.
    pub min_likelihood: Option<f64>,
    /// Success likelihood ceiling. Default: 95.0.
    pub max_likelihood: Option<f64>,
    /// Maximum risk / success factors listed. Default: 5.
    pub max_factors: Option<usize>,
}

impl OutcomeConfig {
    pub fn effective_default_typology(&self) -> &str {
        self.default_typology
            .as_deref()
            .unwrap_or(constants::DEFAULT_TYPOLOGY)
    }

    pub fn effective_default_tier(&self) -> &str {
        self.default_tier.as_deref().unwrap_or(constants::DEFAULT_TIER)
    }

    pub fn effective_min_likelihood(&self) -> f64 {
        self.min_likelihood.unwrap_or(constants::DEFAULT_MIN_LIKELIHOOD)
    }

    pub fn effective_max_likelihood(&self) -> f64 {
        self.max_likelihood.unwrap_or(constants::DEFAULT_MAX_LIKELIHOOD)
    }

    pub fn effective_max_factors(&self) -> usize {
        self.max_factors.unwrap_or(constants::DEFAULT_MAX_FACTORS)
    }
}
