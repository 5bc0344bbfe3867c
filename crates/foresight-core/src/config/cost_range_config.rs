//! Cost range predictor configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::ReliabilityGrade;

/// Configuration for the weighted-percentile cost range predictor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CostRangeConfig {
    /// Minimum evidence points before a range is reported. Default: 3.
    pub min_data_points: Option<usize>,
    /// Age (days) under which evidence earns the recency bonus. Default: 90.
    pub recency_window_days: Option<i64>,
    /// Weight added to recent evidence. Default: 1.0.
    pub recency_bonus: Option<f64>,
    /// Weight of grade-A evidence. Default: 3.0.
    pub grade_a_weight: Option<f64>,
    /// Weight of grade-B evidence. Default: 2.0.
    pub grade_b_weight: Option<f64>,
    /// Weight of grade-C evidence. Default: 1.0.
    pub grade_c_weight: Option<f64>,
    /// Weight of evidence with an unrecognised grade. Default: 1.0.
    pub ungraded_weight: Option<f64>,
    /// Points required for `high` confidence. Default: 15.
    pub high_confidence_points: Option<usize>,
    /// Grade-A points required for `high` confidence. Default: 2.
    pub high_confidence_grade_a: Option<usize>,
    /// Points required for `medium` confidence. Default: 8.
    pub medium_confidence_points: Option<usize>,
    /// Unit reported when evidence units are empty or tied. Default: "AED/sqm".
    pub default_unit: Option<String>,
    /// Currency reported when the caller names none. Default: "AED".
    pub default_currency: Option<String>,
}

impl CostRangeConfig {
    pub fn effective_min_data_points(&self) -> usize {
        self.min_data_points
            .unwrap_or(constants::DEFAULT_MIN_DATA_POINTS)
    }

    pub fn effective_recency_window_days(&self) -> i64 {
        self.recency_window_days
            .unwrap_or(constants::DEFAULT_RECENCY_WINDOW_DAYS)
    }

    pub fn effective_recency_bonus(&self) -> f64 {
        self.recency_bonus.unwrap_or(constants::DEFAULT_RECENCY_BONUS)
    }

    /// Returns the effective weight for a reliability grade.
    pub fn effective_grade_weight(&self, grade: ReliabilityGrade) -> f64 {
        match grade {
            ReliabilityGrade::A => self.grade_a_weight.unwrap_or(constants::DEFAULT_GRADE_A_WEIGHT),
            ReliabilityGrade::B => self.grade_b_weight.unwrap_or(constants::DEFAULT_GRADE_B_WEIGHT),
            ReliabilityGrade::C => self.grade_c_weight.unwrap_or(constants::DEFAULT_GRADE_C_WEIGHT),
            ReliabilityGrade::Unknown => {
                self.ungraded_weight.unwrap_or(constants::DEFAULT_UNGRADED_WEIGHT)
            }
        }
    }

    pub fn effective_high_confidence_points(&self) -> usize {
        self.high_confidence_points
            .unwrap_or(constants::DEFAULT_HIGH_CONFIDENCE_POINTS)
    }

    pub fn effective_high_confidence_grade_a(&self) -> usize {
        self.high_confidence_grade_a
            .unwrap_or(constants::DEFAULT_HIGH_CONFIDENCE_GRADE_A)
    }

    pub fn effective_medium_confidence_points(&self) -> usize {
        self.medium_confidence_points
            .unwrap_or(constants::DEFAULT_MEDIUM_CONFIDENCE_POINTS)
    }

    pub fn effective_default_unit(&self) -> &str {
        self.default_unit.as_deref().unwrap_or(constants::DEFAULT_UNIT)
    }

    pub fn effective_default_currency(&self) -> &str {
        self.default_currency
            .as_deref()
            .unwrap_or(constants::DEFAULT_CURRENCY)
    }
}
