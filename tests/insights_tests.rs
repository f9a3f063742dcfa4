// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{Row, approx, dataset};
use finscope::FinscopeError;
use finscope::filter::{self, Dimension, FilterSelection, FilteredView};
use finscope::insights::{self, Insight};

fn scenario_row(scenario: &str, savings: f64) -> Row {
    Row {
        scenario: scenario.into(),
        savings,
        ..Row::default()
    }
}

#[test]
fn inflation_only_view_has_no_recession_gap() {
    let ds = dataset(&[
        scenario_row("inflation", 800.0),
        scenario_row("inflation", 600.0),
    ]);
    let view = FilteredView::full(&ds);
    let out = insights::compute(&view, &view);

    assert_eq!(out.recession_savings_gap, None);
    match out.insight("economic_impact").unwrap() {
        Insight::InsufficientData { reason, .. } => {
            assert!(reason.contains("normal"));
            assert!(reason.contains("recession"));
        }
        other => panic!("expected insufficient data, got {:?}", other),
    }
    // The other insights still render.
    assert!(out.insight("savings_goal_achievement").unwrap().is_ready());
    assert!(out.insight("credit_profile").unwrap().is_ready());

    match insights::recession_savings_gap(&view) {
        Err(FinscopeError::InsufficientComparisonData { missing, .. }) => {
            assert_eq!(missing, vec!["normal".to_string(), "recession".to_string()])
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn gap_needs_both_scenarios_in_the_filtered_view() {
    let ds = dataset(&[
        scenario_row("normal", 1200.0),
        scenario_row("normal", 1000.0),
        scenario_row("recession", 700.0),
    ]);
    let full = FilteredView::full(&ds);
    let out = insights::compute(&full, &full);
    assert!(approx(out.recession_savings_gap.unwrap(), 400.0));
    let text = out.insight("economic_impact").unwrap().text();
    assert!(text.contains("$400"), "{}", text);

    let sel = FilterSelection::all(&ds).with(Dimension::Scenario, ["normal"]);
    let view = filter::apply(&ds, &sel);
    let out = insights::compute(&view, &full);
    assert_eq!(out.recession_savings_gap, None);
    assert!(!out.insight("economic_impact").unwrap().is_ready());
}

#[test]
fn kpis_compare_against_full_population() {
    let ds = dataset(&[
        Row {
            income: 4000.0,
            category: "Rent".into(),
            goal: 1,
            cash_flow: "Positive".into(),
            credit: 700,
            fraud: 0,
            ..Row::default()
        },
        Row {
            income: 6000.0,
            category: "Travel".into(),
            goal: 0,
            cash_flow: "Negative".into(),
            credit: 600,
            fraud: 1,
            ..Row::default()
        },
    ]);
    let full = FilteredView::full(&ds);
    let sel = FilterSelection::all(&ds).with(Dimension::Category, ["Travel"]);
    let view = filter::apply(&ds, &sel);
    let out = insights::compute(&view, &full);

    let income = out.kpi("avg_income").unwrap();
    assert!(approx(income.value, 6000.0));
    assert!(approx(income.baseline, 5000.0));
    assert!(approx(income.delta_pct.unwrap(), 20.0));
    assert_eq!(income.display_value(), "$6,000");
    assert_eq!(income.display_delta(), "+20.0%");

    let goal = out.kpi("goal_met_rate").unwrap();
    assert!(approx(goal.value, 0.0));
    assert!(approx(goal.delta_pct.unwrap(), -100.0));

    let fraud = out.kpi("fraud_rate").unwrap();
    assert!(approx(fraud.value, 100.0));
    assert!(approx(fraud.baseline, 50.0));

    assert!(approx(out.kpi("positive_cash_flow_rate").unwrap().value, 0.0));
    assert!(approx(out.kpi("avg_credit_score").unwrap().value, 600.0));
}

#[test]
fn zero_baseline_has_no_delta() {
    let ds = dataset(&[Row {
        fraud: 0,
        ..Row::default()
    }]);
    let view = FilteredView::full(&ds);
    let out = insights::compute(&view, &view);
    let fraud = out.kpi("fraud_rate").unwrap();
    assert_eq!(fraud.delta_pct, None);
    assert_eq!(fraud.display_delta(), "n/a");
}

#[test]
fn empty_view_reports_insufficient_data_everywhere() {
    let ds = dataset(&[Row::default()]);
    let full = FilteredView::full(&ds);
    let out = insights::compute(&FilteredView::default(), &full);
    assert!(out.kpis.is_empty());
    assert_eq!(out.recession_savings_gap, None);
    assert_eq!(out.insights.len(), 3);
    assert!(out.insights.iter().all(|i| !i.is_ready()));
}

#[test]
fn credit_profile_names_most_common_band() {
    let rows: Vec<Row> = [610, 650, 720]
        .iter()
        .map(|c| Row {
            credit: *c,
            ..Row::default()
        })
        .collect();
    let ds = dataset(&rows);
    let view = FilteredView::full(&ds);
    let text = insights::compute(&view, &view)
        .insight("credit_profile")
        .unwrap()
        .text();
    assert!(text.contains("Most common band: Fair"), "{}", text);
    assert!(text.contains("Average credit score: 660"), "{}", text);
}
