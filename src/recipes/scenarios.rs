// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{GroupSummary, Tabular, summaries, summary_headers, summary_rows};
use crate::filter::FilteredView;
use crate::models::StressLevel;
use crate::stats::{self, Mean};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioMetricsRow {
    pub scenario: String,
    pub mean_income: f64,
    pub mean_expense: f64,
    pub mean_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioMetrics {
    pub rows: Vec<ScenarioMetricsRow>,
}

pub fn scenario_metrics(view: &FilteredView) -> ScenarioMetrics {
    let mut acc: BTreeMap<&str, [Mean; 3]> = BTreeMap::new();
    for r in view.iter() {
        let m = acc.entry(r.raw.financial_scenario.as_str()).or_default();
        m[0].push(r.raw.monthly_income);
        m[1].push(r.raw.monthly_expense_total);
        m[2].push(r.raw.actual_savings);
    }
    let rows = acc
        .into_iter()
        .filter_map(|(scenario, [inc, exp, sav])| {
            Some(ScenarioMetricsRow {
                scenario: scenario.to_string(),
                mean_income: inc.value()?,
                mean_expense: exp.value()?,
                mean_savings: sav.value()?,
            })
        })
        .collect();
    ScenarioMetrics { rows }
}

impl Tabular for ScenarioMetrics {
    fn headers(&self) -> Vec<String> {
        vec![
            "Scenario".into(),
            "Income".into(),
            "Expenses".into(),
            "Savings".into(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.scenario.clone(),
                    format!("{:.2}", r.mean_income),
                    format!("{:.2}", r.mean_expense),
                    format!("{:.2}", r.mean_savings),
                ]
            })
            .collect()
    }
}

/// Stress mix within one scenario; the three percentages sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressShareRow {
    pub scenario: String,
    pub records: usize,
    pub low_pct: f64,
    pub medium_pct: f64,
    pub high_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressByScenario {
    pub rows: Vec<StressShareRow>,
}

pub fn stress_by_scenario(view: &FilteredView) -> StressByScenario {
    let mut acc: BTreeMap<&str, [usize; 3]> = BTreeMap::new();
    for r in view.iter() {
        let counts = acc.entry(r.raw.financial_scenario.as_str()).or_default();
        let slot = match r.raw.financial_stress_level {
            StressLevel::Low => 0,
            StressLevel::Medium => 1,
            StressLevel::High => 2,
        };
        counts[slot] += 1;
    }
    let rows = acc
        .into_iter()
        .map(|(scenario, counts)| {
            // Every entry holds at least the record that created it.
            let total = counts.iter().sum::<usize>() as f64;
            let pct = |c: usize| c as f64 / total * 100.0;
            StressShareRow {
                scenario: scenario.to_string(),
                records: total as usize,
                low_pct: pct(counts[0]),
                medium_pct: pct(counts[1]),
                high_pct: pct(counts[2]),
            }
        })
        .collect();
    StressByScenario { rows }
}

impl Tabular for StressByScenario {
    fn headers(&self) -> Vec<String> {
        let mut h = vec!["Scenario".to_string(), "N".to_string()];
        h.extend(StressLevel::ALL.iter().map(|s| format!("{} %", s)));
        h
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.scenario.clone(),
                    r.records.to_string(),
                    format!("{:.1}", r.low_pct),
                    format!("{:.1}", r.medium_pct),
                    format!("{:.1}", r.high_pct),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtToIncomeByScenario {
    pub groups: Vec<GroupSummary>,
}

pub fn debt_to_income_by_scenario(view: &FilteredView) -> DebtToIncomeByScenario {
    DebtToIncomeByScenario {
        groups: summaries(
            view.iter()
                .map(|r| (r.raw.financial_scenario.clone(), r.raw.debt_to_income_ratio)),
        ),
    }
}

impl Tabular for DebtToIncomeByScenario {
    fn headers(&self) -> Vec<String> {
        summary_headers("Scenario")
    }

    fn rows(&self) -> Vec<Vec<String>> {
        summary_rows(&self.groups)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioIncomeRow {
    pub scenario: String,
    pub income_type: String,
    pub mean_investment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentByScenarioIncome {
    pub rows: Vec<ScenarioIncomeRow>,
}

pub fn investment_by_scenario_income(view: &FilteredView) -> InvestmentByScenarioIncome {
    let rows = stats::mean_by(view.iter().map(|r| {
        (
            (r.raw.financial_scenario.clone(), r.raw.income_type.clone()),
            r.raw.investment_amount,
        )
    }))
    .into_iter()
    .map(|((scenario, income_type), mean_investment)| ScenarioIncomeRow {
        scenario,
        income_type,
        mean_investment,
    })
    .collect();
    InvestmentByScenarioIncome { rows }
}

impl Tabular for InvestmentByScenarioIncome {
    fn headers(&self) -> Vec<String> {
        vec![
            "Scenario".into(),
            "Income Type".into(),
            "Avg Investment".into(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.scenario.clone(),
                    r.income_type.clone(),
                    format!("{:.2}", r.mean_investment),
                ]
            })
            .collect()
    }
}
