//! Cost range options and prediction result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use foresight_core::types::{ConfidenceLevel, EvidenceDataPoint, TrendDirection};

/// Scope and fallback settings for a cost range prediction.
#[derive(Debug, Clone, Default)]
pub struct CostRangeOptions<'a> {
    /// Restrict evidence (and trend preference) to this category.
    pub category: Option<String>,
    /// Restrict local evidence to this geography.
    pub geography: Option<String>,
    /// Market-wide pool consulted when local evidence is too thin.
    pub uae_wide_evidence: Option<&'a [EvidenceDataPoint]>,
    /// Currency label for the result. Defaults to the configured currency.
    pub currency: Option<String>,
    /// Reference instant for the recency bonus. Defaults to now.
    pub as_of: Option<DateTime<Utc>>,
}

impl<'a> CostRangeOptions<'a> {
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn with_geography(mut self, geography: impl Into<String>) -> Self {
        self.geography = Some(geography.into());
        self
    }

    pub fn with_wide_evidence(mut self, pool: &'a [EvidenceDataPoint]) -> Self {
        self.uae_wide_evidence = Some(pool);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn as_of(mut self, instant: DateTime<Utc>) -> Self {
        self.as_of = Some(instant);
        self
    }
}

/// Weighted percentile cost bands for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRangePrediction {
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p95: f64,
    pub unit: String,
    pub currency: String,
    /// Annualized trend percentage applied to the adjusted bands.
    pub trend_adjustment: f64,
    pub trend_direction: TrendDirection,
    pub confidence: ConfidenceLevel,
    pub data_point_count: usize,
    pub grade_a_count: usize,
    pub fallback_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p15: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p85: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p95: Option<f64>,
}

impl CostRangePrediction {
    /// Validate the ordering invariant: p15 <= p50 <= p85 <= p95.
    pub fn is_monotonic(&self) -> bool {
        self.p15 <= self.p50 && self.p50 <= self.p85 && self.p85 <= self.p95
    }

    pub fn is_insufficient(&self) -> bool {
        self.confidence == ConfidenceLevel::Insufficient
    }
}
