use chrono::{Duration, TimeZone, Utc};
use foresight_core::types::{
    ComparableOutcome, ConfidenceLevel, DecisionStatus, Discriminators, EvidenceDataPoint,
    MarketCondition, ReliabilityGrade, TrendDataPoint, TrendDirection, VariableContribution,
};
use foresight_engine::{
    predict_cost_range, predict_outcome, project_scenario_cost, CostRangeOptions,
    OutcomeOptions, ProjectionInput,
};
use proptest::prelude::*;

fn grade() -> impl Strategy<Value = ReliabilityGrade> {
    prop_oneof![
        Just(ReliabilityGrade::A),
        Just(ReliabilityGrade::B),
        Just(ReliabilityGrade::C),
        Just(ReliabilityGrade::Unknown),
    ]
}

fn evidence_point() -> impl Strategy<Value = EvidenceDataPoint> {
    (1.0f64..10_000.0, 0.0f64..500.0, grade(), 0i64..400).prop_map(|(typical, spread, grade, age)| {
        let anchor = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        EvidenceDataPoint {
            price_min: typical - spread,
            price_typical: Some(typical),
            price_max: typical + spread,
            unit: "AED/sqm".to_string(),
            reliability_grade: grade,
            confidence_score: 50.0,
            capture_date: anchor - Duration::days(age),
            category: "fitout".to_string(),
            geography: None,
        }
    })
}

fn decision_status() -> impl Strategy<Value = DecisionStatus> {
    prop_oneof![
        Just(DecisionStatus::Validated),
        Just(DecisionStatus::Conditional),
        Just(DecisionStatus::NotValidated),
    ]
}

fn comparable() -> impl Strategy<Value = ComparableOutcome> {
    (decision_status(), prop_oneof![Just("Residential"), Just("Office")], prop_oneof![Just("Mid"), Just("Luxury")])
        .prop_map(|(status, typology, tier)| ComparableOutcome {
            project_id: "p".to_string(),
            composite_score: 50.0,
            decision_status: status,
            typology: typology.to_string(),
            tier: tier.to_string(),
            geography: None,
            discriminators: Discriminators::default(),
        })
}

fn market() -> impl Strategy<Value = MarketCondition> {
    prop_oneof![
        Just(MarketCondition::Tight),
        Just(MarketCondition::Balanced),
        Just(MarketCondition::Soft),
    ]
}

proptest! {
    #[test]
    fn percentiles_are_monotonic(points in prop::collection::vec(evidence_point(), 0..60), pct in -30.0f64..30.0) {
        let trends = vec![TrendDataPoint {
            category: "fitout".to_string(),
            direction: TrendDirection::Stable,
            percent_change: pct,
            confidence: ConfidenceLevel::Medium,
        }];
        let result = predict_cost_range(&points, &trends, &CostRangeOptions::for_category("fitout"));
        prop_assert!(result.is_monotonic(), "{:?}", result);
        if points.len() < 3 {
            prop_assert!(result.is_insufficient());
            prop_assert_eq!(result.p95, 0.0);
        } else {
            prop_assert!(!result.is_insufficient());
        }
    }

    #[test]
    fn likelihood_stays_in_bounds(
        score in -50.0f64..200.0,
        outcomes in prop::collection::vec(comparable(), 0..30),
        weights in prop::collection::vec(-10.0f64..10.0, 0..20),
    ) {
        let contributions: Vec<VariableContribution> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| VariableContribution {
                variable: format!("v{i}"),
                contribution: *w,
                dimension: "d".to_string(),
            })
            .collect();
        let prediction = predict_outcome(score, &outcomes, &contributions, &OutcomeOptions::default());
        if outcomes.is_empty() && contributions.is_empty() {
            prop_assert_eq!(prediction.success_likelihood, 0.0);
        } else {
            prop_assert!((5.0..=95.0).contains(&prediction.success_likelihood));
            prop_assert!(prediction.key_risk_factors.len() <= 5);
            prop_assert!(prediction.key_success_factors.len() <= 5);
        }
        prop_assert!(prediction.comparable_count <= outcomes.len());
    }

    #[test]
    fn scenarios_ordered_and_finite(
        base in 100.0f64..50_000.0,
        gfa in 0.0f64..1_000_000.0,
        trend in -20.0f64..100.0,
        condition in market(),
        horizon in 0u32..1_000,
    ) {
        let projection = project_scenario_cost(&ProjectionInput {
            base_cost_per_sqm: base,
            gfa,
            trend_percent_change: trend,
            trend_direction: TrendDirection::Rising,
            market_condition: condition,
            horizon_months: horizon,
            currency: None,
        });
        prop_assert!((1..=120).contains(&projection.horizon_months));
        let months = projection.milestones();
        prop_assert!(months.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(months.last().copied(), Some(projection.horizon_months.max(12)));
        for ((low, mid), high) in projection
            .low_scenario
            .iter()
            .zip(&projection.mid_scenario)
            .zip(&projection.high_scenario)
        {
            prop_assert!(low.cost_per_sqm < mid.cost_per_sqm);
            prop_assert!(mid.cost_per_sqm < high.cost_per_sqm);
            prop_assert!(high.total_cost.is_finite() && high.cumulative_change.is_finite());
        }
    }
}
