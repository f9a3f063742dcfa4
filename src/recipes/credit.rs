// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::savings::bin_rows;
use super::{
    GroupSummary, ScatterPoint, ScatterSample, Share, Tabular, share_rows, shares, summaries,
    summary_headers, summary_rows,
};
use crate::filter::FilteredView;
use crate::models::StressLevel;
use crate::stats::{self, Bin};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Lower bounds of the Good and Very Good bands.
pub const REFERENCE_SCORES: [f64; 2] = [670.0, 740.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditScoreDistribution {
    pub bins: Vec<Bin>,
    pub reference_lines: [f64; 2],
}

pub fn credit_score_distribution(view: &FilteredView, bins: usize) -> CreditScoreDistribution {
    let values: Vec<f64> = view.iter().map(|r| f64::from(r.raw.credit_score)).collect();
    CreditScoreDistribution {
        bins: stats::histogram(&values, bins),
        reference_lines: REFERENCE_SCORES,
    }
}

impl Tabular for CreditScoreDistribution {
    fn headers(&self) -> Vec<String> {
        vec!["From".into(), "To".into(), "Count".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        bin_rows(&self.bins, 0)
    }
}

/// Slices follow band order, Poor through Exceptional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditBandMix {
    pub slices: Vec<Share>,
}

pub fn credit_band_mix(view: &FilteredView) -> CreditBandMix {
    CreditBandMix {
        slices: shares(stats::count_by(view.iter().map(|r| r.credit_band))),
    }
}

impl Tabular for CreditBandMix {
    fn headers(&self) -> Vec<String> {
        vec!["Band".into(), "Count".into(), "Share".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        share_rows(&self.slices)
    }
}

/// Points are grouped by credit band.
pub fn debt_vs_credit(view: &FilteredView, cap: usize, seed: u64) -> ScatterSample {
    ScatterSample::build(
        view,
        ("debt_to_income_ratio", "credit_score"),
        cap,
        seed,
        |r| ScatterPoint {
            x: r.raw.debt_to_income_ratio,
            y: f64::from(r.raw.credit_score),
            group: r.credit_band.to_string(),
        },
    )
}

/// Loan payment as a share of income, for borrowers only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanBurdenByIncomeType {
    pub groups: Vec<GroupSummary>,
}

pub fn loan_burden_by_income_type(view: &FilteredView) -> LoanBurdenByIncomeType {
    LoanBurdenByIncomeType {
        groups: summaries(
            view.iter()
                .filter(|r| r.raw.loan_payment > 0.0)
                .filter_map(|r| r.loan_burden_pct.map(|p| (r.raw.income_type.clone(), p))),
        ),
    }
}

impl Tabular for LoanBurdenByIncomeType {
    fn headers(&self) -> Vec<String> {
        summary_headers("Income Type")
    }

    fn rows(&self) -> Vec<Vec<String>> {
        summary_rows(&self.groups)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressAdviceRow {
    pub stress_level: StressLevel,
    pub mean_advice_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceByStress {
    pub rows: Vec<StressAdviceRow>,
}

pub fn advice_by_stress(view: &FilteredView) -> AdviceByStress {
    let rows = stats::mean_by(
        view.iter()
            .map(|r| (r.raw.financial_stress_level, r.raw.financial_advice_score)),
    )
    .into_iter()
    .map(|(stress_level, mean_advice_score)| StressAdviceRow {
        stress_level,
        mean_advice_score,
    })
    .collect();
    AdviceByStress { rows }
}

impl Tabular for AdviceByStress {
    fn headers(&self) -> Vec<String> {
        vec!["Stress".into(), "Avg Advice Score".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.stress_level.to_string(),
                    format!("{:.2}", r.mean_advice_score),
                ]
            })
            .collect()
    }
}

/// Fraud rate (%) indexed as `cells[category][scenario]`. `None` marks a
/// combination with no records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudHeatmap {
    pub categories: Vec<String>,
    pub scenarios: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl FraudHeatmap {
    pub fn cell(&self, category: &str, scenario: &str) -> Option<f64> {
        let i = self.categories.iter().position(|c| c == category)?;
        let j = self.scenarios.iter().position(|s| s == scenario)?;
        self.cells[i][j]
    }
}

pub fn fraud_heatmap(view: &FilteredView) -> FraudHeatmap {
    let rates: BTreeMap<(&str, &str), f64> = stats::mean_by(view.iter().map(|r| {
        (
            (r.raw.category.as_str(), r.raw.financial_scenario.as_str()),
            if r.raw.fraud_flag { 1.0 } else { 0.0 },
        )
    }));
    let categories: BTreeSet<&str> = rates.keys().map(|k| k.0).collect();
    let scenarios: BTreeSet<&str> = rates.keys().map(|k| k.1).collect();
    let cells = categories
        .iter()
        .map(|c| {
            scenarios
                .iter()
                .map(|s| rates.get(&(*c, *s)).map(|m| m * 100.0))
                .collect()
        })
        .collect();
    FraudHeatmap {
        categories: categories.iter().map(|c| c.to_string()).collect(),
        scenarios: scenarios.iter().map(|s| s.to_string()).collect(),
        cells,
    }
}

impl Tabular for FraudHeatmap {
    fn headers(&self) -> Vec<String> {
        let mut h = vec!["Category".to_string()];
        h.extend(self.scenarios.iter().cloned());
        h
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.categories
            .iter()
            .zip(&self.cells)
            .map(|(c, row)| {
                let mut out = vec![c.clone()];
                out.extend(row.iter().map(|v| match v {
                    Some(p) => format!("{:.2}", p),
                    None => "-".into(),
                }));
                out
            })
            .collect()
    }
}
