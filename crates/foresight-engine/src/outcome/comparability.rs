//! Comparability cascade: ordered matcher rules with minimum-count thresholds.
//!
//! | # | Rule | Minimum |
//! |---|------|---------|
//! | 1 | typology + tier + geography + supplied discriminators | 3 |
//! | 2 | typology + tier + geography | 5 |
//! | 3 | typology + tier | 5 |
//! | 4 | typology | 3 |
//! | 5 | whole pool | 0 |
//!
//! Geography only constrains a rule when the query names one.

use tracing::debug;

use foresight_core::types::{ComparableOutcome, Discriminators};

use super::types::ComparabilityLevel;

/// The project attributes a cascade rule matches against.
#[derive(Debug, Clone, Copy)]
pub struct ComparabilityQuery<'a> {
    pub typology: &'a str,
    pub tier: &'a str,
    pub geography: Option<&'a str>,
    pub discriminators: &'a Discriminators,
}

type Matcher = fn(&ComparableOutcome, &ComparabilityQuery<'_>) -> bool;

/// One step of the relaxation ladder.
#[derive(Clone, Copy)]
pub struct ComparabilityRule {
    pub level: ComparabilityLevel,
    /// Matches required for this rule to be accepted.
    pub min_matches: usize,
    matcher: Matcher,
}

impl ComparabilityRule {
    pub fn new(level: ComparabilityLevel, min_matches: usize, matcher: Matcher) -> Self {
        Self {
            level,
            min_matches,
            matcher,
        }
    }

    pub fn matches(&self, outcome: &ComparableOutcome, query: &ComparabilityQuery<'_>) -> bool {
        (self.matcher)(outcome, query)
    }
}

impl std::fmt::Debug for ComparabilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparabilityRule")
            .field("level", &self.level)
            .field("min_matches", &self.min_matches)
            .finish()
    }
}

/// The comparables chosen for a query.
#[derive(Debug, Clone)]
pub struct ComparableSelection<'o> {
    pub level: ComparabilityLevel,
    pub comparables: Vec<&'o ComparableOutcome>,
}

/// The standard five-step cascade, most specific first.
pub fn default_cascade() -> Vec<ComparabilityRule> {
    vec![
        ComparabilityRule::new(ComparabilityLevel::Exact, 3, |o, q| {
            typology_tier_geography(o, q) && discriminators_match(o, q.discriminators)
        }),
        ComparabilityRule::new(
            ComparabilityLevel::TypologyTierGeography,
            5,
            typology_tier_geography,
        ),
        ComparabilityRule::new(ComparabilityLevel::TypologyTier, 5, |o, q| {
            o.typology == q.typology && o.tier == q.tier
        }),
        ComparabilityRule::new(ComparabilityLevel::Typology, 3, |o, q| {
            o.typology == q.typology
        }),
        ComparabilityRule::new(ComparabilityLevel::AllOutcomes, 0, |_, _| true),
    ]
}

/// Walk `rules` in order and return the first selection meeting its minimum.
///
/// If no rule is satisfied the whole pool is returned.
pub fn select_comparables<'o>(
    rules: &[ComparabilityRule],
    outcomes: &'o [ComparableOutcome],
    query: &ComparabilityQuery<'_>,
) -> ComparableSelection<'o> {
    for rule in rules {
        let comparables: Vec<&ComparableOutcome> =
            outcomes.iter().filter(|o| rule.matches(o, query)).collect();
        if comparables.len() >= rule.min_matches {
            debug!(
                level = rule.level.name(),
                matched = comparables.len(),
                "outcome: comparability rule accepted"
            );
            return ComparableSelection {
                level: rule.level,
                comparables,
            };
        }
    }
    ComparableSelection {
        level: ComparabilityLevel::AllOutcomes,
        comparables: outcomes.iter().collect(),
    }
}

fn typology_tier_geography(outcome: &ComparableOutcome, query: &ComparabilityQuery<'_>) -> bool {
    outcome.typology == query.typology
        && outcome.tier == query.tier
        && query
            .geography
            .map_or(true, |g| outcome.geography.as_deref() == Some(g))
}

fn discriminators_match(outcome: &ComparableOutcome, wanted: &Discriminators) -> bool {
    wanted
        .supplied()
        .all(|(d, value)| outcome.discriminators.get(d) == Some(value))
}
