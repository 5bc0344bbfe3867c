//! Scenario Cost Projector: compounding low/mid/high cost trajectories.
//!
//! The annualized trend is converted to a monthly compounding rate and
//! applied from three base costs (90%, 100% and 115% of the input) at the
//! fixed 3/6/12-month milestones plus the horizon.

pub mod projector;
pub mod types;

pub use projector::ScenarioCostProjector;
pub use types::{ProjectionInput, ProjectionPoint, ScenarioProjection};

/// Project scenario costs with the compiled default configuration.
pub fn project_scenario_cost(input: &ProjectionInput) -> ScenarioProjection {
    ScenarioCostProjector::default().project(input)
}
