use foresight_core::config::ProjectionConfig;
use foresight_core::types::{MarketCondition, TrendDirection};
use foresight_engine::{
    project_scenario_cost, ProjectionInput, ProjectionPoint, ScenarioCostProjector,
};

fn input(base: f64, gfa: f64, trend: f64) -> ProjectionInput {
    ProjectionInput {
        base_cost_per_sqm: base,
        gfa,
        trend_percent_change: trend,
        trend_direction: if trend > 0.0 {
            TrendDirection::Rising
        } else if trend < 0.0 {
            TrendDirection::Falling
        } else {
            TrendDirection::Stable
        },
        market_condition: MarketCondition::Balanced,
        horizon_months: 0,
        currency: None,
    }
}

fn months(points: &[ProjectionPoint]) -> Vec<u32> {
    points.iter().map(|p| p.month).collect()
}

fn all_finite(points: &[ProjectionPoint]) -> bool {
    points
        .iter()
        .all(|p| p.cost_per_sqm.is_finite() && p.total_cost.is_finite() && p.cumulative_change.is_finite())
}

// ── Milestones & horizon ──────────────────────────────────────────────────

#[test]
fn twelve_month_horizon_has_three_milestones() {
    let mut req = input(1_000.0, 500.0, 6.0);
    req.horizon_months = 12;
    let projection = project_scenario_cost(&req);
    assert_eq!(months(&projection.mid_scenario), vec![3, 6, 12]);
    assert_eq!(months(&projection.low_scenario), vec![3, 6, 12]);
    assert_eq!(months(&projection.high_scenario), vec![3, 6, 12]);
}

#[test]
fn default_horizon_appends_eighteen() {
    let projection = project_scenario_cost(&input(1_000.0, 500.0, 6.0));
    assert_eq!(projection.horizon_months, 18);
    assert_eq!(projection.milestones(), vec![3, 6, 12, 18]);
}

#[test]
fn oversized_horizon_is_clamped() {
    let mut req = input(1_000.0, 500.0, 6.0);
    req.horizon_months = 999;
    let projection = project_scenario_cost(&req);
    assert_eq!(projection.horizon_months, 120);
    assert_eq!(projection.milestones(), vec![3, 6, 12, 120]);
}

#[test]
fn short_horizon_sorts_before_fixed_milestones() {
    let mut req = input(1_000.0, 500.0, 6.0);
    req.horizon_months = 2;
    let projection = project_scenario_cost(&req);
    assert_eq!(projection.milestones(), vec![2, 3, 6, 12]);
}

// ── Growth & market ───────────────────────────────────────────────────────

#[test]
fn tight_market_without_trend_is_flat_five_percent() {
    let mut req = input(1_000.0, 200.0, 0.0);
    req.market_condition = MarketCondition::Tight;
    let projection = project_scenario_cost(&req);

    assert_eq!(projection.market_factor, 1.05);
    assert_eq!(projection.monthly_rate, 0.0);
    for point in &projection.mid_scenario {
        assert!((point.cost_per_sqm - 1_050.0).abs() < 0.01, "{point:?}");
        assert!((point.total_cost - 210_000.0).abs() < 0.01, "{point:?}");
        assert!((point.cumulative_change - 5.0).abs() < 0.01, "{point:?}");
    }
}

#[test]
fn soft_market_discounts() {
    let mut req = input(1_000.0, 1.0, 0.0);
    req.market_condition = MarketCondition::Soft;
    let projection = project_scenario_cost(&req);
    assert_eq!(projection.market_factor, 0.95);
    assert_eq!(projection.mid_scenario[0].cost_per_sqm, 950.0);
}

#[test]
fn twelve_percent_trend_compounds_to_one_year() {
    let mut req = input(1_000.0, 1.0, 12.0);
    req.horizon_months = 12;
    let projection = project_scenario_cost(&req);
    let year = projection.mid_scenario.last().unwrap();
    assert_eq!(year.month, 12);
    assert!((year.cost_per_sqm - 1_120.0).abs() < 0.01, "{year:?}");
    assert!((year.cumulative_change - 12.0).abs() < 0.01, "{year:?}");
    assert!(projection.monthly_rate > 0.0094 && projection.monthly_rate < 0.0095);
}

#[test]
fn scenarios_are_strictly_ordered() {
    let projection = project_scenario_cost(&input(850.0, 1_200.0, -4.0));
    for ((low, mid), high) in projection
        .low_scenario
        .iter()
        .zip(&projection.mid_scenario)
        .zip(&projection.high_scenario)
    {
        assert!(low.cost_per_sqm < mid.cost_per_sqm);
        assert!(mid.cost_per_sqm < high.cost_per_sqm);
    }
    assert!((projection.low_scenario[0].cost_per_sqm / projection.mid_scenario[0].cost_per_sqm - 0.9).abs() < 0.001);
}

#[test]
fn tiny_base_rounds_but_never_inverts_order() {
    let projection = project_scenario_cost(&input(0.01, 1.0, 0.0));
    for ((low, mid), high) in projection
        .low_scenario
        .iter()
        .zip(&projection.mid_scenario)
        .zip(&projection.high_scenario)
    {
        assert_eq!(mid.cost_per_sqm, 0.01);
        assert!(low.cost_per_sqm <= mid.cost_per_sqm);
        assert!(mid.cost_per_sqm <= high.cost_per_sqm);
    }
}

#[test]
fn insufficient_trend_direction_ignores_percent() {
    let mut req = input(1_000.0, 1.0, 30.0);
    req.trend_direction = TrendDirection::InsufficientData;
    let projection = project_scenario_cost(&req);
    assert_eq!(projection.annualized_trend, 0.0);
    assert_eq!(projection.monthly_rate, 0.0);
    assert!(projection.mid_scenario.iter().all(|p| p.cost_per_sqm == 1_000.0));
}

// ── Degenerate input ──────────────────────────────────────────────────────

#[test]
fn zero_base_cost_yields_zero_costs() {
    let projection = project_scenario_cost(&input(0.0, 1_000.0, 8.0));
    assert_eq!(projection.base_total_cost, 0.0);
    for scenario in [&projection.low_scenario, &projection.mid_scenario, &projection.high_scenario] {
        assert!(scenario.iter().all(|p| p.cost_per_sqm == 0.0 && p.total_cost == 0.0));
        assert!(scenario.iter().all(|p| p.cumulative_change == 0.0));
    }
}

#[test]
fn zero_gfa_yields_zero_totals() {
    let projection = project_scenario_cost(&input(1_000.0, 0.0, 8.0));
    assert_eq!(projection.base_total_cost, 0.0);
    assert!(projection.mid_scenario.iter().all(|p| p.total_cost == 0.0));
    assert!(projection.mid_scenario.iter().all(|p| p.cost_per_sqm > 1_000.0));
}

#[test]
fn non_finite_input_stays_finite() {
    let mut req = input(f64::NAN, f64::INFINITY, 0.0);
    req.trend_percent_change = f64::NAN;
    let projection = project_scenario_cost(&req);
    assert!(projection.base_total_cost.is_finite());
    assert!(projection.monthly_rate.is_finite());
    assert!(all_finite(&projection.mid_scenario));
    assert!(all_finite(&projection.high_scenario));
}

#[test]
fn total_collapse_is_finite() {
    let projection = project_scenario_cost(&input(1_000.0, 10.0, -150.0));
    assert_eq!(projection.monthly_rate, -1.0);
    assert!(all_finite(&projection.mid_scenario));
    assert!(projection.mid_scenario.iter().all(|p| p.cost_per_sqm == 0.0));
}

// ── Configuration & output ────────────────────────────────────────────────

#[test]
fn configured_horizon_limits_apply() {
    let projector = ScenarioCostProjector::new(ProjectionConfig {
        default_horizon_months: Some(24),
        max_horizon_months: Some(36),
        ..Default::default()
    });
    assert_eq!(projector.project(&input(100.0, 1.0, 0.0)).horizon_months, 24);

    let mut req = input(100.0, 1.0, 0.0);
    req.horizon_months = 48;
    assert_eq!(projector.project(&req).horizon_months, 36);
}

#[test]
fn currency_defaults_and_echoes() {
    let projection = project_scenario_cost(&input(100.0, 1.0, 0.0));
    assert_eq!(projection.currency, "AED");

    let mut req = input(100.0, 1.0, 0.0);
    req.currency = Some("SAR".to_string());
    req.market_condition = MarketCondition::Tight;
    let projection = project_scenario_cost(&req);
    assert_eq!(projection.currency, "SAR");
    assert_eq!(projection.market_condition, MarketCondition::Tight);
}

#[test]
fn input_deserializes_with_defaults() {
    let req: ProjectionInput = serde_json::from_str(
        r#"{"base_cost_per_sqm": 900.0, "gfa": 10.0, "trend_percent_change": 3.0,
            "trend_direction": "rising", "market_condition": "frothy"}"#,
    )
    .unwrap();
    assert_eq!(req.market_condition, MarketCondition::Balanced);
    assert_eq!(req.horizon_months, 0);
    assert_eq!(project_scenario_cost(&req).horizon_months, 18);
}
