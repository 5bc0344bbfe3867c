//! CostRangePredictor: filtering, fallback, weighting, percentiles, trend.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use foresight_core::config::CostRangeConfig;
use foresight_core::constants::COST_PERCENTILES;
use foresight_core::types::{
    ConfidenceLevel, EvidenceDataPoint, FxHashMap, TrendDataPoint, TrendDirection,
};

use super::percentile::{sort_by_value, weighted_percentile, WeightedValue};
use super::types::{CostRangeOptions, CostRangePrediction};
use crate::numeric::round_to;

/// Weighted-percentile cost range predictor.
#[derive(Debug, Clone, Default)]
pub struct CostRangePredictor {
    config: CostRangeConfig,
}

impl CostRangePredictor {
    pub fn new(config: CostRangeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CostRangeConfig {
        &self.config
    }

    /// Predict the cost range for the scope described by `options`.
    ///
    /// Never fails. Fewer usable points than the configured minimum (after
    /// the market-wide fallback) yields a zeroed `insufficient` result.
    pub fn predict(
        &self,
        evidence: &[EvidenceDataPoint],
        trends: &[TrendDataPoint],
        options: &CostRangeOptions<'_>,
    ) -> CostRangePrediction {
        let now = options.as_of.unwrap_or_else(Utc::now);
        let min_points = self.config.effective_min_data_points();
        let category = options.category.as_deref();
        let geography = options.geography.as_deref();

        let mut selected: Vec<&EvidenceDataPoint> = evidence
            .iter()
            .filter(|e| in_category(e, category) && in_geography(e, geography))
            .collect();
        let mut fallback_reason = None;

        if selected.len() < min_points {
            if let Some(pool) = options.uae_wide_evidence {
                let wide: Vec<&EvidenceDataPoint> =
                    pool.iter().filter(|e| in_category(e, category)).collect();
                if wide.len() >= min_points {
                    let reason = format!(
                        "Only {} local data point(s) matched; used {} UAE-wide data points{}",
                        selected.len(),
                        wide.len(),
                        category.map(|c| format!(" for {c}")).unwrap_or_default(),
                    );
                    debug!(local = selected.len(), wide = wide.len(), "cost range: fallback to wide pool");
                    fallback_reason = Some(reason);
                    selected = wide;
                }
            }
        }

        let unit = self.dominant_unit(&selected);
        let currency = options
            .currency
            .clone()
            .unwrap_or_else(|| self.config.effective_default_currency().to_string());
        let grade_a_count = selected.iter().filter(|e| e.is_grade_a()).count();

        if selected.len() < min_points {
            debug!(found = selected.len(), min_points, "cost range: insufficient evidence");
            return CostRangePrediction {
                p15: 0.0,
                p50: 0.0,
                p85: 0.0,
                p95: 0.0,
                unit,
                currency,
                trend_adjustment: 0.0,
                trend_direction: TrendDirection::InsufficientData,
                confidence: ConfidenceLevel::Insufficient,
                data_point_count: selected.len(),
                grade_a_count,
                fallback_used: false,
                fallback_reason: None,
                adjusted_p15: None,
                adjusted_p50: None,
                adjusted_p85: None,
                adjusted_p95: None,
            };
        }

        let mut weighted: Vec<WeightedValue> = selected
            .iter()
            .map(|e| WeightedValue {
                value: e.representative_value(),
                weight: self.weight(e, now),
            })
            .collect();
        sort_by_value(&mut weighted);
        let [p15, p50, p85, p95] = COST_PERCENTILES.map(|p| weighted_percentile(&weighted, p));

        let trend = select_trend(trends, category);
        let trend_adjustment = trend.map(|t| t.percent_change).unwrap_or(0.0);
        let trend_direction = trend
            .map(|t| t.direction)
            .unwrap_or(TrendDirection::InsufficientData);
        let adjust = |p: f64| Some(round_to(p * (1.0 + trend_adjustment / 100.0), 2));

        CostRangePrediction {
            p15,
            p50,
            p85,
            p95,
            unit,
            currency,
            trend_adjustment,
            trend_direction,
            confidence: self.confidence_for(selected.len(), grade_a_count),
            data_point_count: selected.len(),
            grade_a_count,
            fallback_used: fallback_reason.is_some(),
            fallback_reason,
            adjusted_p15: adjust(p15),
            adjusted_p50: adjust(p50),
            adjusted_p85: adjust(p85),
            adjusted_p95: adjust(p95),
        }
    }

    /// Evidence weight: grade weight plus the recency bonus.
    pub fn weight(&self, point: &EvidenceDataPoint, now: DateTime<Utc>) -> f64 {
        let window = Duration::days(self.config.effective_recency_window_days());
        let recent = now.signed_duration_since(point.capture_date) <= window;
        let bonus = if recent {
            self.config.effective_recency_bonus()
        } else {
            0.0
        };
        self.config.effective_grade_weight(point.reliability_grade) + bonus
    }

    /// Confidence label for `n` usable points of which `grade_a` are grade A.
    pub fn confidence_for(&self, n: usize, grade_a: usize) -> ConfidenceLevel {
        if n >= self.config.effective_high_confidence_points()
            && grade_a >= self.config.effective_high_confidence_grade_a()
        {
            ConfidenceLevel::High
        } else if n >= self.config.effective_medium_confidence_points() {
            ConfidenceLevel::Medium
        } else if n >= self.config.effective_min_data_points() {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::Insufficient
        }
    }

    /// The single most frequent unit; the default unit on a tie or no data.
    fn dominant_unit(&self, points: &[&EvidenceDataPoint]) -> String {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for point in points {
            *counts.entry(point.unit.as_str()).or_insert(0) += 1;
        }
        let Some(top) = counts.values().copied().max() else {
            return self.config.effective_default_unit().to_string();
        };
        let mut leaders = counts.iter().filter(|&(_, &count)| count == top);
        match (leaders.next(), leaders.next()) {
            (Some((unit, _)), None) => unit.to_string(),
            _ => self.config.effective_default_unit().to_string(),
        }
    }
}

fn in_category(point: &EvidenceDataPoint, category: Option<&str>) -> bool {
    category.map_or(true, |c| point.category == c)
}

fn in_geography(point: &EvidenceDataPoint, geography: Option<&str>) -> bool {
    geography.map_or(true, |g| point.geography.as_deref() == Some(g))
}

/// Prefer a usable trend for `category`, else the first usable trend.
fn select_trend<'t>(
    trends: &'t [TrendDataPoint],
    category: Option<&str>,
) -> Option<&'t TrendDataPoint> {
    let usable = |t: &&TrendDataPoint| t.confidence.is_usable();
    category
        .and_then(|c| trends.iter().filter(usable).find(|t| t.category == c))
        .or_else(|| trends.iter().find(usable))
}
