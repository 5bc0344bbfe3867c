//! Outcome query options and prediction result.

use std::fmt;

use serde::{Deserialize, Serialize};

use foresight_core::types::{ConfidenceLevel, Discriminators, VariableContribution};

/// Attributes of the project being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeOptions {
    /// Defaults to the configured typology ("Residential").
    pub typology: Option<String>,
    /// Defaults to the configured tier ("Mid").
    pub tier: Option<String>,
    pub geography: Option<String>,
    #[serde(flatten)]
    pub discriminators: Discriminators,
}

impl OutcomeOptions {
    pub fn new(typology: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            typology: Some(typology.into()),
            tier: Some(tier.into()),
            ..Default::default()
        }
    }

    pub fn with_geography(mut self, geography: impl Into<String>) -> Self {
        self.geography = Some(geography.into());
        self
    }

    pub fn with_discriminators(mut self, discriminators: Discriminators) -> Self {
        self.discriminators = discriminators;
        self
    }
}

/// Which comparability rule produced the comparable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparabilityLevel {
    /// Typology, tier, geography and every supplied discriminator.
    Exact,
    TypologyTierGeography,
    TypologyTier,
    Typology,
    /// The unfiltered outcome pool.
    AllOutcomes,
    /// No outcomes and no contributions; nothing was compared.
    Insufficient,
}

impl ComparabilityLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::TypologyTierGeography => "typology_tier_geography",
            Self::TypologyTier => "typology_tier",
            Self::Typology => "typology",
            Self::AllOutcomes => "all_outcomes",
            Self::Insufficient => "insufficient",
        }
    }
}

impl fmt::Display for ComparabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Success likelihood and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrediction {
    /// Percentage in [5, 95]; 0 only for the insufficient-data result.
    pub success_likelihood: f64,
    pub confidence_level: ConfidenceLevel,
    pub comparable_count: usize,
    pub validated_rate: f64,
    pub conditional_rate: f64,
    pub not_validated_rate: f64,
    /// Most negative contributions first.
    pub key_risk_factors: Vec<VariableContribution>,
    /// Most positive contributions first.
    pub key_success_factors: Vec<VariableContribution>,
    pub prediction_basis: String,
    pub comparability: ComparabilityLevel,
}
