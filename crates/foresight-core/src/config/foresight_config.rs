//! Top-level Foresight configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CostRangeConfig, OutcomeConfig, ProjectionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `ConfigOverrides`)
/// 2. Environment variables (`FORESIGHT_*`)
/// 3. Project config (`foresight.toml` in the project root)
/// 4. User config (`~/.foresight/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForesightConfig {
    pub cost_range: CostRangeConfig,
    pub outcome: OutcomeConfig,
    pub projection: ProjectionConfig,
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_data_points: Option<usize>,
    pub default_currency: Option<String>,
    pub default_horizon_months: Option<u32>,
    pub max_horizon_months: Option<u32>,
}

/// Environment variables read by `ForesightConfig::load`.
pub const ENV_VARS: [&str; 8] = [
    "FORESIGHT_COST_MIN_DATA_POINTS",
    "FORESIGHT_COST_RECENCY_WINDOW_DAYS",
    "FORESIGHT_COST_DEFAULT_CURRENCY",
    "FORESIGHT_OUTCOME_DEFAULT_TYPOLOGY",
    "FORESIGHT_OUTCOME_DEFAULT_TIER",
    "FORESIGHT_OUTCOME_MAX_FACTORS",
    "FORESIGHT_PROJECTION_DEFAULT_HORIZON_MONTHS",
    "FORESIGHT_PROJECTION_MAX_HORIZON_MONTHS",
];

impl ForesightConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                if let Err(err) = Self::merge_toml_file(&mut config, &user_config_path) {
                    if err.is_parse_failure() {
                        return Err(err);
                    }
                }
            }
        }

        let project_config_path = root.join("foresight.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ForesightConfig) -> Result<(), ConfigError> {
        let cost = &config.cost_range;
        if cost.effective_min_data_points() == 0 {
            return Err(validation("cost_range.min_data_points", "must be at least 1"));
        }
        if cost.effective_recency_window_days() < 0 {
            return Err(validation("cost_range.recency_window_days", "must not be negative"));
        }
        for (field, value) in [
            ("cost_range.recency_bonus", cost.recency_bonus),
            ("cost_range.grade_a_weight", cost.grade_a_weight),
            ("cost_range.grade_b_weight", cost.grade_b_weight),
            ("cost_range.grade_c_weight", cost.grade_c_weight),
            ("cost_range.ungraded_weight", cost.ungraded_weight),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(validation(field, "must be a finite, non-negative number"));
                }
            }
        }
        if cost.effective_medium_confidence_points() > cost.effective_high_confidence_points() {
            return Err(validation(
                "cost_range.medium_confidence_points",
                "must not exceed high_confidence_points",
            ));
        }

        let outcome = &config.outcome;
        let (min, max) = (
            outcome.effective_min_likelihood(),
            outcome.effective_max_likelihood(),
        );
        if !(0.0..=100.0).contains(&min) || !(0.0..=100.0).contains(&max) || min > max {
            return Err(validation(
                "outcome.min_likelihood",
                "likelihood bounds must satisfy 0 <= min <= max <= 100",
            ));
        }

        let projection = &config.projection;
        let max_horizon = projection.effective_max_horizon_months();
        if max_horizon == 0 {
            return Err(validation("projection.max_horizon_months", "must be at least 1"));
        }
        let default_horizon = projection.effective_default_horizon_months();
        if default_horizon == 0 || default_horizon > max_horizon {
            return Err(validation(
                "projection.default_horizon_months",
                "must be between 1 and max_horizon_months",
            ));
        }
        for (field, value) in [
            ("projection.tight_market_factor", projection.tight_market_factor),
            ("projection.soft_market_factor", projection.soft_market_factor),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(validation(field, "must be a finite, positive number"));
                }
            }
        }
        let low = projection.effective_low_scenario_multiplier();
        if !(low > 0.0 && low < 1.0) {
            return Err(validation(
                "projection.low_scenario_multiplier",
                "must be between 0.0 and 1.0 (exclusive)",
            ));
        }
        let high = projection.effective_high_scenario_multiplier();
        if !(high.is_finite() && high > 1.0) {
            return Err(validation(
                "projection.high_scenario_multiplier",
                "must be a finite number greater than 1.0",
            ));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.foresight/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".foresight").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ForesightConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ForesightConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        debug!(path = %path.display(), "config: merged file");
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ForesightConfig, other: &ForesightConfig) {
        let (b, o) = (&mut base.cost_range, &other.cost_range);
        overlay(&mut b.min_data_points, &o.min_data_points);
        overlay(&mut b.recency_window_days, &o.recency_window_days);
        overlay(&mut b.recency_bonus, &o.recency_bonus);
        overlay(&mut b.grade_a_weight, &o.grade_a_weight);
        overlay(&mut b.grade_b_weight, &o.grade_b_weight);
        overlay(&mut b.grade_c_weight, &o.grade_c_weight);
        overlay(&mut b.ungraded_weight, &o.ungraded_weight);
        overlay(&mut b.high_confidence_points, &o.high_confidence_points);
        overlay(&mut b.high_confidence_grade_a, &o.high_confidence_grade_a);
        overlay(&mut b.medium_confidence_points, &o.medium_confidence_points);
        overlay(&mut b.default_unit, &o.default_unit);
        overlay(&mut b.default_currency, &o.default_currency);

        let (b, o) = (&mut base.outcome, &other.outcome);
        overlay(&mut b.default_typology, &o.default_typology);
        overlay(&mut b.default_tier, &o.default_tier);
        overlay(&mut b.min_likelihood, &o.min_likelihood);
        overlay(&mut b.max_likelihood, &o.max_likelihood);
        overlay(&mut b.max_factors, &o.max_factors);

        let (b, o) = (&mut base.projection, &other.projection);
        overlay(&mut b.default_horizon_months, &o.default_horizon_months);
        overlay(&mut b.max_horizon_months, &o.max_horizon_months);
        overlay(&mut b.tight_market_factor, &o.tight_market_factor);
        overlay(&mut b.soft_market_factor, &o.soft_market_factor);
        overlay(&mut b.low_scenario_multiplier, &o.low_scenario_multiplier);
        overlay(&mut b.high_scenario_multiplier, &o.high_scenario_multiplier);
    }

    /// Apply environment variable overrides.
    /// Pattern: `FORESIGHT_<SECTION>_<FIELD>`.
    fn apply_env_overrides(config: &mut ForesightConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse("FORESIGHT_COST_MIN_DATA_POINTS")? {
            config.cost_range.min_data_points = Some(v);
        }
        if let Some(v) = env_parse("FORESIGHT_COST_RECENCY_WINDOW_DAYS")? {
            config.cost_range.recency_window_days = Some(v);
        }
        if let Ok(val) = std::env::var("FORESIGHT_COST_DEFAULT_CURRENCY") {
            config.cost_range.default_currency = Some(val);
        }
        if let Ok(val) = std::env::var("FORESIGHT_OUTCOME_DEFAULT_TYPOLOGY") {
            config.outcome.default_typology = Some(val);
        }
        if let Ok(val) = std::env::var("FORESIGHT_OUTCOME_DEFAULT_TIER") {
            config.outcome.default_tier = Some(val);
        }
        if let Some(v) = env_parse("FORESIGHT_OUTCOME_MAX_FACTORS")? {
            config.outcome.max_factors = Some(v);
        }
        if let Some(v) = env_parse("FORESIGHT_PROJECTION_DEFAULT_HORIZON_MONTHS")? {
            config.projection.default_horizon_months = Some(v);
        }
        if let Some(v) = env_parse("FORESIGHT_PROJECTION_MAX_HORIZON_MONTHS")? {
            config.projection.max_horizon_months = Some(v);
        }
        Ok(())
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut ForesightConfig, overrides: &ConfigOverrides) {
        overlay(&mut config.cost_range.min_data_points, &overrides.min_data_points);
        overlay(&mut config.cost_range.default_currency, &overrides.default_currency);
        overlay(
            &mut config.projection.default_horizon_months,
            &overrides.default_horizon_months,
        );
        overlay(
            &mut config.projection.max_horizon_months,
            &overrides.max_horizon_months,
        );
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Parse an environment variable, rejecting values of the wrong shape.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {val:?}"),
            }
        }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
