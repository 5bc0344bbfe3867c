//! Priced evidence records and per-category trend signals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vocabulary::{ConfidenceLevel, ReliabilityGrade, TrendDirection};

/// One priced observation, sourced externally and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDataPoint {
    pub price_min: f64,
    /// Typical price. `None` or `0.0` means "use the min/max midpoint".
    #[serde(default)]
    pub price_typical: Option<f64>,
    pub price_max: f64,
    /// Unit tag, e.g. `"AED/sqm"`.
    pub unit: String,
    pub reliability_grade: ReliabilityGrade,
    /// Source confidence (0-100). Informational only.
    #[serde(default)]
    pub confidence_score: f64,
    pub capture_date: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub geography: Option<String>,
}

impl EvidenceDataPoint {
    /// The representative value of this observation.
    pub fn representative_value(&self) -> f64 {
        match self.price_typical {
            Some(typical) if typical != 0.0 => typical,
            _ => (self.price_min + self.price_max) / 2.0,
        }
    }

    pub fn is_grade_a(&self) -> bool {
        self.reliability_grade == ReliabilityGrade::A
    }
}

/// A directional cost signal for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub category: String,
    pub direction: TrendDirection,
    /// Signed, annualized percentage change.
    pub percent_change: f64,
    pub confidence: ConfidenceLevel,
}
