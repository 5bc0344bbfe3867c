//! OutcomePredictor: likelihood, rates, confidence and ranked factors.

use tracing::debug;

use foresight_core::config::OutcomeConfig;
use foresight_core::constants::{COMPARABLE_BONUS_MIN, INSUFFICIENT_DATA_BASIS};
use foresight_core::types::{
    ComparableOutcome, ConfidenceLevel, DecisionStatus, VariableContribution,
};

use super::comparability::{default_cascade, select_comparables, ComparabilityQuery, ComparabilityRule};
use super::types::{ComparabilityLevel, OutcomeOptions, OutcomePrediction};
use crate::numeric::{finite_or_zero, round_to};

/// Comparable-based outcome predictor.
#[derive(Debug, Clone)]
pub struct OutcomePredictor {
    config: OutcomeConfig,
    cascade: Vec<ComparabilityRule>,
}

impl OutcomePredictor {
    pub fn new(config: OutcomeConfig) -> Self {
        Self {
            config,
            cascade: default_cascade(),
        }
    }

    /// Replace the comparability cascade.
    pub fn with_cascade(mut self, cascade: Vec<ComparabilityRule>) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn cascade(&self) -> &[ComparabilityRule] {
        &self.cascade
    }

    /// Predict the success likelihood of a project scored `composite_score`.
    pub fn predict(
        &self,
        composite_score: f64,
        outcomes: &[ComparableOutcome],
        contributions: &[VariableContribution],
        options: &OutcomeOptions,
    ) -> OutcomePrediction {
        if outcomes.is_empty() && contributions.is_empty() {
            debug!("outcome: no comparables and no contributions");
            return insufficient_prediction();
        }

        let query = ComparabilityQuery {
            typology: options
                .typology
                .as_deref()
                .unwrap_or_else(|| self.config.effective_default_typology()),
            tier: options
                .tier
                .as_deref()
                .unwrap_or_else(|| self.config.effective_default_tier()),
            geography: options.geography.as_deref(),
            discriminators: &options.discriminators,
        };
        let selection = select_comparables(&self.cascade, outcomes, &query);
        let comparable_count = selection.comparables.len();

        let total = comparable_count.max(1) as f64;
        let rate = |status: DecisionStatus| {
            let count = selection
                .comparables
                .iter()
                .filter(|o| o.decision_status == status)
                .count();
            round_to(count as f64 / total * 100.0, 1)
        };
        let validated_rate = rate(DecisionStatus::Validated);
        let conditional_rate = rate(DecisionStatus::Conditional);
        let not_validated_rate = rate(DecisionStatus::NotValidated);

        let base = finite_or_zero(composite_score) / 100.0 * 60.0 + 20.0;
        let bonus = if comparable_count >= COMPARABLE_BONUS_MIN {
            (validated_rate - 50.0) * 0.2
        } else {
            0.0
        };
        // max/min rather than clamp: an unvalidated config may invert the bounds
        let success_likelihood = round_to(base + bonus, 1)
            .max(self.config.effective_min_likelihood())
            .min(self.config.effective_max_likelihood());

        let prediction_basis = if comparable_count >= COMPARABLE_BONUS_MIN {
            format!(
                "Based on {} comparable projects ({} match) and {} variable contributions",
                comparable_count,
                selection.level,
                contributions.len()
            )
        } else {
            format!(
                "Based on composite score alone: {} comparable project(s) found, {} variable contributions considered",
                comparable_count,
                contributions.len()
            )
        };

        let (key_risk_factors, key_success_factors) = self.rank_factors(contributions);

        OutcomePrediction {
            success_likelihood,
            confidence_level: confidence_level(comparable_count, contributions.len()),
            comparable_count,
            validated_rate,
            conditional_rate,
            not_validated_rate,
            key_risk_factors,
            key_success_factors,
            prediction_basis,
            comparability: selection.level,
        }
    }

    /// Split contributions into (risk, success), each ranked by magnitude and
    /// capped at the configured factor count. Zero contributions are dropped.
    pub fn rank_factors(
        &self,
        contributions: &[VariableContribution],
    ) -> (Vec<VariableContribution>, Vec<VariableContribution>) {
        let max = self.config.effective_max_factors();

        let mut risks: Vec<VariableContribution> = contributions
            .iter()
            .filter(|c| c.contribution < 0.0)
            .cloned()
            .collect();
        risks.sort_by(|a, b| a.contribution.total_cmp(&b.contribution));
        risks.truncate(max);

        let mut successes: Vec<VariableContribution> = contributions
            .iter()
            .filter(|c| c.contribution > 0.0)
            .cloned()
            .collect();
        successes.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
        successes.truncate(max);

        (risks, successes)
    }
}

impl Default for OutcomePredictor {
    fn default() -> Self {
        Self::new(OutcomeConfig::default())
    }
}

/// Confidence from the sizes of the comparable set and the contribution list.
pub fn confidence_level(comparables: usize, contributions: usize) -> ConfidenceLevel {
    if comparables >= 10 && contributions >= 10 {
        ConfidenceLevel::High
    } else if comparables >= 5 || contributions >= 5 {
        ConfidenceLevel::Medium
    } else if comparables >= 1 || contributions >= 1 {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::Insufficient
    }
}

fn insufficient_prediction() -> OutcomePrediction {
    OutcomePrediction {
        success_likelihood: 0.0,
        confidence_level: ConfidenceLevel::Insufficient,
        comparable_count: 0,
        validated_rate: 0.0,
        conditional_rate: 0.0,
        not_validated_rate: 0.0,
        key_risk_factors: Vec::new(),
        key_success_factors: Vec::new(),
        prediction_basis: INSUFFICIENT_DATA_BASIS.to_string(),
        comparability: ComparabilityLevel::Insufficient,
    }
}
