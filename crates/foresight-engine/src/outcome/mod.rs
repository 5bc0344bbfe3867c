//! Outcome Predictor: success likelihood from comparable past projects.
//!
//! Comparables are chosen by a cascade of matcher rules that relaxes from
//! "same typology, tier, geography and every supplied discriminator" down to
//! "the whole pool". The likelihood maps the composite score onto 20..80 and
//! nudges it by the comparables' validated rate.

pub mod comparability;
pub mod predictor;
pub mod types;

pub use comparability::{
    default_cascade, select_comparables, ComparabilityQuery, ComparabilityRule,
    ComparableSelection,
};
pub use predictor::OutcomePredictor;
pub use types::{ComparabilityLevel, OutcomeOptions, OutcomePrediction};

use foresight_core::types::{ComparableOutcome, VariableContribution};

/// Predict a project outcome with the compiled default configuration.
pub fn predict_outcome(
    composite_score: f64,
    outcomes: &[ComparableOutcome],
    variable_contributions: &[VariableContribution],
    options: &OutcomeOptions,
) -> OutcomePrediction {
    OutcomePredictor::default().predict(composite_score, outcomes, variable_contributions, options)
}
