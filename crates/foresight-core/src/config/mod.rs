//! Configuration system for Foresight.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod cost_range_config;
pub mod foresight_config;
pub mod outcome_config;
pub mod projection_config;

pub use cost_range_config::CostRangeConfig;
pub use foresight_config::{ConfigOverrides, ForesightConfig};
pub use outcome_config::OutcomeConfig;
pub use projection_config::ProjectionConfig;
