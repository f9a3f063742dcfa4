// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{ScatterPoint, ScatterSample, Tabular};
use crate::filter::FilteredView;
use crate::models::StressLevel;
use crate::stats::{self, Bin};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsRateDistribution {
    pub bins: Vec<Bin>,
    /// Drawn as a vertical reference line.
    pub mean: Option<f64>,
}

pub fn savings_rate_distribution(view: &FilteredView, bins: usize) -> SavingsRateDistribution {
    let values: Vec<f64> = view.iter().map(|r| r.raw.savings_rate).collect();
    SavingsRateDistribution {
        bins: stats::histogram(&values, bins),
        mean: stats::mean(values.iter().copied()),
    }
}

pub(crate) fn bin_rows(bins: &[Bin], dp: usize) -> Vec<Vec<String>> {
    bins.iter()
        .map(|b| {
            vec![
                format!("{:.*}", dp, b.lower),
                format!("{:.*}", dp, b.upper),
                b.count.to_string(),
            ]
        })
        .collect()
}

impl Tabular for SavingsRateDistribution {
    fn headers(&self) -> Vec<String> {
        let mean = self
            .mean
            .map(|m| format!("{:.3}", m))
            .unwrap_or_else(|| "-".into());
        vec!["From".into(), "To".into(), format!("Count (mean {})", mean)]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        bin_rows(&self.bins, 3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRow {
    pub year: i32,
    pub goal_met_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalByYear {
    pub rows: Vec<GoalRow>,
}

pub fn goal_by_year(view: &FilteredView) -> GoalByYear {
    let rows = stats::mean_by(
        view.iter()
            .map(|r| (r.year, if r.raw.savings_goal_met { 1.0 } else { 0.0 })),
    )
    .into_iter()
    .map(|(year, m)| GoalRow {
        year,
        goal_met_pct: m * 100.0,
    })
    .collect();
    GoalByYear { rows }
}

impl Tabular for GoalByYear {
    fn headers(&self) -> Vec<String> {
        vec!["Year".into(), "Goal Met %".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.year.to_string(), format!("{:.1}", r.goal_met_pct)])
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressIncomeRow {
    pub stress_level: StressLevel,
    pub income_type: String,
    pub mean_savings: f64,
}

/// Rows run Low, Medium, High; income types sorted within each level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsByStressIncome {
    pub rows: Vec<StressIncomeRow>,
}

pub fn savings_by_stress_income(view: &FilteredView) -> SavingsByStressIncome {
    let rows = stats::mean_by(view.iter().map(|r| {
        (
            (r.raw.financial_stress_level, r.raw.income_type.clone()),
            r.raw.actual_savings,
        )
    }))
    .into_iter()
    .map(|((stress_level, income_type), mean_savings)| StressIncomeRow {
        stress_level,
        income_type,
        mean_savings,
    })
    .collect();
    SavingsByStressIncome { rows }
}

impl Tabular for SavingsByStressIncome {
    fn headers(&self) -> Vec<String> {
        vec![
            "Stress".into(),
            "Income Type".into(),
            "Avg Savings".into(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.stress_level.to_string(),
                    r.income_type.clone(),
                    format!("{:.2}", r.mean_savings),
                ]
            })
            .collect()
    }
}

/// Points are grouped by cash flow status.
pub fn emergency_fund_vs_savings(view: &FilteredView, cap: usize, seed: u64) -> ScatterSample {
    ScatterSample::build(view, ("emergency_fund", "actual_savings"), cap, seed, |r| {
        ScatterPoint {
            x: r.raw.emergency_fund,
            y: r.raw.actual_savings,
            group: r.raw.cash_flow_status.clone(),
        }
    })
}
