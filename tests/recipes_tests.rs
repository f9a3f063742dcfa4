// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{Row, approx, dataset, varied};
use finscope::config::Config;
use finscope::filter::FilteredView;
use finscope::models::StressLevel;
use finscope::recipes::{self, Recipe, Tables, credit, savings, scenarios, spending};

fn row(income_type: &str, income: f64) -> Row {
    Row {
        income_type: income_type.into(),
        income,
        ..Row::default()
    }
}

#[test]
fn income_by_type_is_exact_mean_per_type() {
    let ds = dataset(&[
        row("Salary", 4000.0),
        row("Freelance", 3000.0),
        row("Salary", 6000.0),
        row("Mixed", 5500.0),
    ]);
    let t = spending::income_by_type(&FilteredView::full(&ds));
    let got: Vec<(&str, f64)> = t
        .rows
        .iter()
        .map(|r| (r.income_type.as_str(), r.mean_income))
        .collect();
    assert_eq!(
        got,
        vec![("Freelance", 3000.0), ("Mixed", 5500.0), ("Salary", 5000.0)]
    );
}

#[test]
fn yearly_trend_and_goal_rate_per_year() {
    let ds = dataset(&[
        Row {
            date: "2022-01-10".into(),
            income: 6000.0,
            expense: 5000.0,
            savings: 1000.0,
            goal: 0,
            ..Row::default()
        },
        Row {
            date: "2021-05-10".into(),
            income: 4000.0,
            expense: 3000.0,
            savings: 500.0,
            goal: 1,
            ..Row::default()
        },
        Row {
            date: "2021-09-10".into(),
            income: 5000.0,
            expense: 4000.0,
            savings: 700.0,
            goal: 0,
            ..Row::default()
        },
    ]);
    let view = FilteredView::full(&ds);

    let trend = spending::yearly_trend(&view);
    assert_eq!(trend.rows.len(), 2);
    assert_eq!(trend.rows[0].year, 2021);
    assert!(approx(trend.rows[0].mean_income, 4500.0));
    assert!(approx(trend.rows[0].mean_expense, 3500.0));
    assert!(approx(trend.rows[0].mean_savings, 600.0));
    assert_eq!(trend.rows[1].year, 2022);

    let goal = savings::goal_by_year(&view);
    assert!(approx(goal.rows[0].goal_met_pct, 50.0));
    assert!(approx(goal.rows[1].goal_met_pct, 0.0));
}

#[test]
fn spending_by_category_keeps_stacked_components() {
    let ds = dataset(&[
        Row {
            category: "Rent".into(),
            expense: 3000.0,
            essential: 2000.0,
            discretionary: 1000.0,
            ..Row::default()
        },
        Row {
            category: "Rent".into(),
            expense: 5000.0,
            essential: 4000.0,
            discretionary: 1000.0,
            ..Row::default()
        },
        Row {
            category: "Dining".into(),
            ..Row::default()
        },
    ]);
    let t = spending::spending_by_category(&FilteredView::full(&ds));
    assert_eq!(t.rows[0].category, "Dining");
    let rent = &t.rows[1];
    assert_eq!(rent.category, "Rent");
    assert!(approx(rent.mean_expense_total, 4000.0));
    assert!(approx(rent.mean_essential, 3000.0));
    assert!(approx(rent.mean_discretionary, 1000.0));
}

#[test]
fn cash_flow_mix_sums_to_one() {
    let flows = ["Positive", "Positive", "Negative", "Positive"];
    let rows: Vec<Row> = flows
        .iter()
        .map(|f| Row {
            cash_flow: f.to_string(),
            ..Row::default()
        })
        .collect();
    let ds = dataset(&rows);
    let mix = spending::cash_flow_mix(&FilteredView::full(&ds));
    let labels: Vec<&str> = mix.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Negative", "Positive"]);
    assert_eq!(mix.slices[1].count, 3);
    assert!(approx(mix.slices[1].proportion, 0.75));
    let total: f64 = mix.slices.iter().map(|s| s.proportion).sum();
    assert!(approx(total, 1.0));
}

#[test]
fn stress_axes_follow_domain_order() {
    let ds = dataset(&[
        Row {
            stress: "High".into(),
            savings: 100.0,
            advice: 2.0,
            ..Row::default()
        },
        Row {
            stress: "Low".into(),
            savings: 900.0,
            advice: 8.0,
            ..Row::default()
        },
        Row {
            stress: "Medium".into(),
            savings: 500.0,
            advice: 5.0,
            ..Row::default()
        },
    ]);
    let view = FilteredView::full(&ds);

    let sav = savings::savings_by_stress_income(&view);
    let order: Vec<StressLevel> = sav.rows.iter().map(|r| r.stress_level).collect();
    assert_eq!(order, StressLevel::ALL.to_vec());
    assert!(approx(sav.rows[2].mean_savings, 100.0));

    let advice = credit::advice_by_stress(&view);
    let order: Vec<StressLevel> = advice.rows.iter().map(|r| r.stress_level).collect();
    assert_eq!(order, StressLevel::ALL.to_vec());
    assert!(approx(advice.rows[0].mean_advice_score, 8.0));
}

#[test]
fn stress_shares_sum_to_hundred_per_scenario() {
    let mk = |scenario: &str, stress: &str| Row {
        scenario: scenario.into(),
        stress: stress.into(),
        ..Row::default()
    };
    let ds = dataset(&[
        mk("normal", "Low"),
        mk("normal", "Low"),
        mk("normal", "High"),
        mk("normal", "Medium"),
        mk("inflation", "High"),
    ]);
    let t = scenarios::stress_by_scenario(&FilteredView::full(&ds));
    assert_eq!(t.rows[0].scenario, "inflation");
    assert!(approx(t.rows[0].high_pct, 100.0));
    assert!(approx(t.rows[0].low_pct, 0.0));
    let normal = &t.rows[1];
    assert_eq!(normal.records, 4);
    assert!(approx(normal.low_pct, 50.0));
    assert!(approx(normal.medium_pct, 25.0));
    assert!(approx(normal.high_pct, 25.0));
    for r in &t.rows {
        assert!(approx(r.low_pct + r.medium_pct + r.high_pct, 100.0));
    }
}

#[test]
fn scenario_metrics_and_investment_groups() {
    let ds = dataset(&[
        Row {
            scenario: "recession".into(),
            income_type: "Freelance".into(),
            investment: 100.0,
            savings: 200.0,
            ..Row::default()
        },
        Row {
            scenario: "recession".into(),
            income_type: "Freelance".into(),
            investment: 300.0,
            savings: 400.0,
            ..Row::default()
        },
        Row {
            scenario: "normal".into(),
            investment: 500.0,
            ..Row::default()
        },
    ]);
    let view = FilteredView::full(&ds);
    let m = scenarios::scenario_metrics(&view);
    assert_eq!(m.rows[0].scenario, "normal");
    assert!(approx(m.rows[1].mean_savings, 300.0));

    let inv = scenarios::investment_by_scenario_income(&view);
    assert_eq!(inv.rows.len(), 2);
    assert_eq!(inv.rows[1].scenario, "recession");
    assert_eq!(inv.rows[1].income_type, "Freelance");
    assert!(approx(inv.rows[1].mean_investment, 200.0));
}

#[test]
fn debt_to_income_box_summary() {
    let rows: Vec<Row> = [0.5, 0.1, 0.4, 0.2, 0.3]
        .iter()
        .map(|d| Row {
            dti: *d,
            ..Row::default()
        })
        .collect();
    let ds = dataset(&rows);
    let t = scenarios::debt_to_income_by_scenario(&FilteredView::full(&ds));
    assert_eq!(t.groups.len(), 1);
    let s = t.groups[0].summary;
    assert_eq!(s.count, 5);
    assert!(approx(s.min, 0.1));
    assert!(approx(s.q1, 0.2));
    assert!(approx(s.median, 0.3));
    assert!(approx(s.q3, 0.4));
    assert!(approx(s.max, 0.5));
}

#[test]
fn loan_burden_ignores_records_without_loans() {
    let mk = |income_type: &str, loan: f64| Row {
        income_type: income_type.into(),
        income: 5000.0,
        loan,
        ..Row::default()
    };
    let ds = dataset(&[
        mk("Salary", 0.0),
        mk("Salary", 500.0),
        mk("Salary", 250.0),
        mk("Freelance", 0.0),
    ]);
    let t = credit::loan_burden_by_income_type(&FilteredView::full(&ds));
    assert_eq!(t.groups.len(), 1);
    assert_eq!(t.groups[0].key, "Salary");
    let s = t.groups[0].summary;
    assert_eq!(s.count, 2);
    assert!(approx(s.min, 5.0));
    assert!(approx(s.median, 7.5));
    assert!(approx(s.max, 10.0));
}

#[test]
fn credit_band_mix_uses_band_order() {
    let rows: Vec<Row> = [810, 600, 500, 600]
        .iter()
        .map(|c| Row {
            credit: *c,
            ..Row::default()
        })
        .collect();
    let ds = dataset(&rows);
    let mix = credit::credit_band_mix(&FilteredView::full(&ds));
    let labels: Vec<&str> = mix.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Poor", "Fair", "Exceptional"]);
    assert!(approx(mix.slices[1].proportion, 0.5));
}

#[test]
fn fraud_heatmap_marks_empty_cells() {
    let mk = |category: &str, scenario: &str, fraud: u8| Row {
        category: category.into(),
        scenario: scenario.into(),
        fraud,
        ..Row::default()
    };
    let ds = dataset(&[
        mk("Groceries", "normal", 1),
        mk("Groceries", "normal", 0),
        mk("Rent", "inflation", 0),
    ]);
    let h = credit::fraud_heatmap(&FilteredView::full(&ds));
    assert_eq!(h.categories, vec!["Groceries", "Rent"]);
    assert_eq!(h.scenarios, vec!["inflation", "normal"]);
    assert_eq!(h.cell("Groceries", "normal"), Some(50.0));
    assert_eq!(h.cell("Rent", "inflation"), Some(0.0));
    assert_eq!(h.cell("Groceries", "inflation"), None);
    assert_eq!(h.cell("Travel", "normal"), None);
}

#[test]
fn subscriptions_group_by_count() {
    let mk = |subs: f64, discretionary: f64| Row {
        subs,
        discretionary,
        ..Row::default()
    };
    let ds = dataset(&[mk(5.0, 500.0), mk(3.0, 1000.0), mk(3.0, 2000.0)]);
    let t = spending::subscriptions_vs_discretionary(&FilteredView::full(&ds));
    assert_eq!(t.rows.len(), 2);
    assert!(approx(t.rows[0].subscription_services, 3.0));
    assert!(approx(t.rows[0].mean_discretionary, 1500.0));
    assert!(approx(t.rows[1].mean_discretionary, 500.0));
}

#[test]
fn net_cash_flow_by_year_and_scenario() {
    let ds = dataset(&[
        Row {
            income: 5000.0,
            expense: 4000.0,
            ..Row::default()
        },
        Row {
            income: 3000.0,
            expense: 4000.0,
            scenario: "recession".into(),
            ..Row::default()
        },
    ]);
    let t = spending::net_cash_flow_trend(&FilteredView::full(&ds));
    assert_eq!(t.zero_line, 0.0);
    assert_eq!(t.rows[0].scenario, "normal");
    assert!(approx(t.rows[0].mean_net_cash_flow, 1000.0));
    assert!(approx(t.rows[1].mean_net_cash_flow, -1000.0));
}

#[test]
fn histograms_cover_every_record() {
    let ds = dataset(&varied(90));
    let view = FilteredView::full(&ds);

    let sr = savings::savings_rate_distribution(&view, 30);
    assert_eq!(sr.bins.len(), 30);
    assert_eq!(sr.bins.iter().map(|b| b.count).sum::<usize>(), 90);
    let expected_mean = ds.records().iter().map(|r| r.raw.savings_rate).sum::<f64>() / 90.0;
    assert!(approx(sr.mean.unwrap(), expected_mean));

    let cs = credit::credit_score_distribution(&view, 40);
    assert_eq!(cs.bins.len(), 40);
    assert_eq!(cs.bins.iter().map(|b| b.count).sum::<usize>(), 90);
    assert_eq!(cs.reference_lines, [670.0, 740.0]);
}

#[test]
fn scatter_samples_are_capped_and_repeatable() {
    let ds = dataset(&varied(120));
    let view = FilteredView::full(&ds);

    let a = savings::emergency_fund_vs_savings(&view, 25, 42);
    let b = savings::emergency_fund_vs_savings(&view, 25, 42);
    assert_eq!(a.points.len(), 25);
    assert_eq!(a.population, 120);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    let all = credit::debt_vs_credit(&view, 500, 42);
    assert_eq!(all.points.len(), 120);
    assert_eq!(all.points[0].y, f64::from(ds.records()[0].raw.credit_score));
}

#[test]
fn trend_line_fits_linear_data() {
    let rows: Vec<Row> = (0..10)
        .map(|i| {
            let e = 1000.0 + i as f64 * 500.0;
            Row {
                emergency: e,
                savings: 2.0 * e + 100.0,
                ..Row::default()
            }
        })
        .collect();
    let ds = dataset(&rows);
    let s = savings::emergency_fund_vs_savings(&FilteredView::full(&ds), 500, 1);
    let t = s.trend.unwrap();
    assert!((t.slope - 2.0).abs() < 1e-6);
    assert!((t.intercept - 100.0).abs() < 1e-6);
    assert!((t.at(2000.0) - 4100.0).abs() < 1e-6);
}

#[test]
fn every_recipe_is_total_over_an_empty_view() {
    let t = Tables::compute(&FilteredView::default(), &Config::default());
    for r in Recipe::ALL {
        let table = t.get(r);
        assert!(!table.headers().is_empty(), "{}", r);
    }
    assert!(t.yearly_trend.rows.is_empty());
    assert!(t.savings_rate_distribution.bins.is_empty());
    assert_eq!(t.savings_rate_distribution.mean, None);
    assert!(t.emergency_fund_vs_savings.points.is_empty());
    assert_eq!(t.emergency_fund_vs_savings.trend, None);
    assert!(t.fraud_heatmap.cells.is_empty());
    assert!(t.credit_band_mix.slices.is_empty());
}

#[test]
fn recipe_names_round_trip() {
    for r in Recipe::ALL {
        assert_eq!(r.name().parse::<Recipe>().unwrap(), r);
    }
    assert_eq!(
        "fraud_heatmap".parse::<Recipe>().unwrap(),
        Recipe::FraudHeatmap
    );
    assert!("pie-of-pies".parse::<Recipe>().is_err());
}

#[test]
fn table_json_is_keyed_by_recipe() {
    let ds = dataset(&[row("Salary", 4000.0)]);
    let t = Tables::compute(&FilteredView::full(&ds), &Config::default());
    let v = t.to_json(Recipe::IncomeByType).unwrap();
    assert_eq!(v["rows"][0]["income_type"], "Salary");
    assert_eq!(v["rows"][0]["mean_income"], 4000.0);
    let shares = t.to_json(Recipe::CashFlowMix).unwrap();
    assert_eq!(shares["slices"][0]["proportion"], 1.0);
    let _: &dyn recipes::Tabular = t.get(Recipe::NetCashFlowTrend);
}
