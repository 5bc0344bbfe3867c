//! Closed vocabulary shared by all three engines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Graduated confidence label.
///
/// Used for cost range confidence, outcome confidence, and the confidence of
/// an incoming trend signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Insufficient,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Whether this label carries any usable signal.
    pub fn is_usable(&self) -> bool {
        !matches!(self, Self::Insufficient)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a per-category cost trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
    InsufficientData,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source-quality label on an evidence record. A > B > C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReliabilityGrade {
    A,
    B,
    C,
    /// Any grade label the engine does not recognise.
    #[serde(other)]
    Unknown,
}

impl ReliabilityGrade {
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReliabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Final decision recorded against a past project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Validated,
    Conditional,
    NotValidated,
}

impl DecisionStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validated => "validated",
            Self::Conditional => "conditional",
            Self::NotValidated => "not_validated",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supply/demand condition of the construction market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    Tight,
    Soft,
    /// Also the landing spot for any unrecognised label.
    #[default]
    #[serde(other)]
    Balanced,
}

impl MarketCondition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Balanced => "balanced",
            Self::Soft => "soft",
        }
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
