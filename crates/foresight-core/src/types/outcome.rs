//! Historical project outcomes and per-variable score contributions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::vocabulary::DecisionStatus;

/// Optional categorical attributes used to narrow comparable projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discriminator {
    SalesStrategy,
    YieldTarget,
    HandoverCondition,
    BrandedStatus,
    SalesChannel,
    LifecycleFocus,
    BrandStandardConstraints,
    TimelineFlexibility,
    TargetValueAdd,
}

impl Discriminator {
    /// All discriminators, in matching order.
    pub const ALL: &'static [Discriminator] = &[
        Self::SalesStrategy,
        Self::YieldTarget,
        Self::HandoverCondition,
        Self::BrandedStatus,
        Self::SalesChannel,
        Self::LifecycleFocus,
        Self::BrandStandardConstraints,
        Self::TimelineFlexibility,
        Self::TargetValueAdd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SalesStrategy => "sales_strategy",
            Self::YieldTarget => "yield_target",
            Self::HandoverCondition => "handover_condition",
            Self::BrandedStatus => "branded_status",
            Self::SalesChannel => "sales_channel",
            Self::LifecycleFocus => "lifecycle_focus",
            Self::BrandStandardConstraints => "brand_standard_constraints",
            Self::TimelineFlexibility => "timeline_flexibility",
            Self::TargetValueAdd => "target_value_add",
        }
    }
}

impl std::fmt::Display for Discriminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of the optional discriminators, on a project or in a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discriminators {
    pub sales_strategy: Option<String>,
    pub yield_target: Option<String>,
    pub handover_condition: Option<String>,
    pub branded_status: Option<String>,
    pub sales_channel: Option<String>,
    pub lifecycle_focus: Option<String>,
    pub brand_standard_constraints: Option<String>,
    pub timeline_flexibility: Option<String>,
    pub target_value_add: Option<String>,
}

impl Discriminators {
    pub fn get(&self, discriminator: Discriminator) -> Option<&str> {
        let value = match discriminator {
            Discriminator::SalesStrategy => &self.sales_strategy,
            Discriminator::YieldTarget => &self.yield_target,
            Discriminator::HandoverCondition => &self.handover_condition,
            Discriminator::BrandedStatus => &self.branded_status,
            Discriminator::SalesChannel => &self.sales_channel,
            Discriminator::LifecycleFocus => &self.lifecycle_focus,
            Discriminator::BrandStandardConstraints => &self.brand_standard_constraints,
            Discriminator::TimelineFlexibility => &self.timeline_flexibility,
            Discriminator::TargetValueAdd => &self.target_value_add,
        };
        value.as_deref()
    }

    /// Discriminators that carry a value, in matching order.
    pub fn supplied(&self) -> impl Iterator<Item = (Discriminator, &str)> + '_ {
        Discriminator::ALL
            .iter()
            .filter_map(move |d| self.get(*d).map(|v| (*d, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.supplied().next().is_none()
    }
}

/// A previously evaluated project used as a reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableOutcome {
    pub project_id: String,
    /// Composite score (0-100) the project received.
    pub composite_score: f64,
    pub decision_status: DecisionStatus,
    pub typology: String,
    pub tier: String,
    #[serde(default)]
    pub geography: Option<String>,
    #[serde(flatten)]
    pub discriminators: Discriminators,
}

/// A signed weight a single variable contributes toward (or against) success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableContribution {
    pub variable: String,
    pub contribution: f64,
    /// Scoring dimension the variable belongs to.
    pub dimension: String,
}

/// One entry of a score-matrix contribution map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub contribution: f64,
    pub dimension: String,
}

/// Flatten a score-matrix map (variable id to entry) into an ordered list.
///
/// Ordering follows the variable id so results do not depend on map iteration.
pub fn contributions_from_matrix(
    matrix: &BTreeMap<String, ContributionEntry>,
) -> Vec<VariableContribution> {
    matrix
        .iter()
        .map(|(variable, entry)| VariableContribution {
            variable: variable.clone(),
            contribution: entry.contribution,
            dimension: entry.dimension.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplied_skips_missing_discriminators() {
        let d = Discriminators {
            sales_strategy: Some("off_plan".into()),
            sales_channel: Some("broker".into()),
            ..Default::default()
        };
        let supplied: Vec<_> = d.supplied().collect();
        assert_eq!(
            supplied,
            vec![
                (Discriminator::SalesStrategy, "off_plan"),
                (Discriminator::SalesChannel, "broker"),
            ]
        );
        assert!(!d.is_empty());
        assert!(Discriminators::default().is_empty());
    }

    #[test]
    fn matrix_flattens_in_variable_order() {
        let mut matrix = BTreeMap::new();
        matrix.insert(
            "zoning".to_string(),
            ContributionEntry { contribution: -2.0, dimension: "risk".into() },
        );
        matrix.insert(
            "amenities".to_string(),
            ContributionEntry { contribution: 4.5, dimension: "market".into() },
        );
        let list = contributions_from_matrix(&matrix);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].variable, "amenities");
        assert_eq!(list[1].variable, "zoning");
        assert_eq!(list[1].contribution, -2.0);
    }

    #[test]
    fn outcome_discriminators_flatten_in_json() {
        let json = r#"{
            "project_id": "p-1",
            "composite_score": 72.0,
            "decision_status": "validated",
            "typology": "Residential",
            "tier": "Mid",
            "sales_channel": "direct"
        }"#;
        let outcome: ComparableOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.discriminators.get(Discriminator::SalesChannel), Some("direct"));
        assert_eq!(outcome.geography, None);
    }
}
