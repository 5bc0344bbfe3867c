//! Shared constants for the Foresight prediction engine.

// ---- Cost range ----

/// Minimum evidence points for a usable cost range.
pub const DEFAULT_MIN_DATA_POINTS: usize = 3;

/// Evidence captured within this many days earns the recency bonus.
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 90;

/// Weight added to recent evidence.
pub const DEFAULT_RECENCY_BONUS: f64 = 1.0;

/// Grade weights: A, B, C, unknown.
pub const DEFAULT_GRADE_A_WEIGHT: f64 = 3.0;
pub const DEFAULT_GRADE_B_WEIGHT: f64 = 2.0;
pub const DEFAULT_GRADE_C_WEIGHT: f64 = 1.0;
pub const DEFAULT_UNGRADED_WEIGHT: f64 = 1.0;

/// Point count required for `high` cost confidence.
pub const DEFAULT_HIGH_CONFIDENCE_POINTS: usize = 15;

/// Grade-A count required for `high` cost confidence.
pub const DEFAULT_HIGH_CONFIDENCE_GRADE_A: usize = 2;

/// Point count required for `medium` cost confidence.
pub const DEFAULT_MEDIUM_CONFIDENCE_POINTS: usize = 8;

/// Unit reported when evidence units are empty or tied.
pub const DEFAULT_UNIT: &str = "AED/sqm";

/// Currency reported when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "AED";

/// Percentiles reported by the cost range predictor.
pub const COST_PERCENTILES: [f64; 4] = [15.0, 50.0, 85.0, 95.0];

// ---- Outcome ----

/// Typology assumed when the caller does not name one.
pub const DEFAULT_TYPOLOGY: &str = "Residential";

/// Tier assumed when the caller does not name one.
pub const DEFAULT_TIER: &str = "Mid";

/// Success likelihood floor for non-insufficient predictions.
pub const DEFAULT_MIN_LIKELIHOOD: f64 = 5.0;

/// Success likelihood ceiling.
pub const DEFAULT_MAX_LIKELIHOOD: f64 = 95.0;

/// Maximum risk / success factors listed.
pub const DEFAULT_MAX_FACTORS: usize = 5;

/// Comparable count at which the validated-rate bonus applies.
pub const COMPARABLE_BONUS_MIN: usize = 3;

/// Basis string for the insufficient-data short-circuit.
pub const INSUFFICIENT_DATA_BASIS: &str = "insufficient_data";

// ---- Projection ----

/// Horizon used when the caller passes 0.
pub const DEFAULT_HORIZON_MONTHS: u32 = 18;

/// Upper clamp for the projection horizon.
pub const DEFAULT_MAX_HORIZON_MONTHS: u32 = 120;

/// Fixed projection milestones (the horizon is added per call).
pub const PROJECTION_MILESTONES: [u32; 3] = [3, 6, 12];

/// Market factor for a tight market.
pub const DEFAULT_TIGHT_MARKET_FACTOR: f64 = 1.05;

/// Market factor for a soft market.
pub const DEFAULT_SOFT_MARKET_FACTOR: f64 = 0.95;

/// Base cost multiplier for the low scenario.
pub const DEFAULT_LOW_SCENARIO_MULTIPLIER: f64 = 0.9;

/// Base cost multiplier for the high scenario.
pub const DEFAULT_HIGH_SCENARIO_MULTIPLIER: f64 = 1.15;
