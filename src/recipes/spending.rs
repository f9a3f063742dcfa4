// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Share, Tabular, share_rows, shares};
use crate::filter::FilteredView;
use crate::stats::{self, Mean};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTrendRow {
    pub year: i32,
    pub mean_income: f64,
    pub mean_expense: f64,
    pub mean_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTrend {
    pub rows: Vec<YearlyTrendRow>,
}

pub fn yearly_trend(view: &FilteredView) -> YearlyTrend {
    let mut acc: BTreeMap<i32, [Mean; 3]> = BTreeMap::new();
    for r in view.iter() {
        let m = acc.entry(r.year).or_default();
        m[0].push(r.raw.monthly_income);
        m[1].push(r.raw.monthly_expense_total);
        m[2].push(r.raw.actual_savings);
    }
    let rows = acc
        .into_iter()
        .filter_map(|(year, [inc, exp, sav])| {
            Some(YearlyTrendRow {
                year,
                mean_income: inc.value()?,
                mean_expense: exp.value()?,
                mean_savings: sav.value()?,
            })
        })
        .collect();
    YearlyTrend { rows }
}

impl Tabular for YearlyTrend {
    fn headers(&self) -> Vec<String> {
        vec![
            "Year".into(),
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
                    r.year.to_string(),
                    format!("{:.2}", r.mean_income),
                    format!("{:.2}", r.mean_expense),
                    format!("{:.2}", r.mean_savings),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeTypeRow {
    pub income_type: String,
    pub mean_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeByType {
    pub rows: Vec<IncomeTypeRow>,
}

pub fn income_by_type(view: &FilteredView) -> IncomeByType {
    let rows = stats::mean_by(
        view.iter()
            .map(|r| (r.raw.income_type.clone(), r.raw.monthly_income)),
    )
    .into_iter()
    .map(|(income_type, mean_income)| IncomeTypeRow {
        income_type,
        mean_income,
    })
    .collect();
    IncomeByType { rows }
}

impl Tabular for IncomeByType {
    fn headers(&self) -> Vec<String> {
        vec!["Income Type".into(), "Avg Income".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.income_type.clone(), format!("{:.0}", r.mean_income)])
            .collect()
    }
}

/// Per-category spending; essential and discretionary are the stacked components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpendRow {
    pub category: String,
    pub mean_expense_total: f64,
    pub mean_essential: f64,
    pub mean_discretionary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    pub rows: Vec<CategorySpendRow>,
}

pub fn spending_by_category(view: &FilteredView) -> SpendingByCategory {
    let mut acc: BTreeMap<&str, [Mean; 3]> = BTreeMap::new();
    for r in view.iter() {
        let m = acc.entry(r.raw.category.as_str()).or_default();
        m[0].push(r.raw.monthly_expense_total);
        m[1].push(r.raw.essential_spending);
        m[2].push(r.raw.discretionary_spending);
    }
    let rows = acc
        .into_iter()
        .filter_map(|(category, [total, ess, disc])| {
            Some(CategorySpendRow {
                category: category.to_string(),
                mean_expense_total: total.value()?,
                mean_essential: ess.value()?,
                mean_discretionary: disc.value()?,
            })
        })
        .collect();
    SpendingByCategory { rows }
}

impl Tabular for SpendingByCategory {
    fn headers(&self) -> Vec<String> {
        vec![
            "Category".into(),
            "Avg Expenses".into(),
            "Essential".into(),
            "Discretionary".into(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    format!("{:.2}", r.mean_expense_total),
                    format!("{:.2}", r.mean_essential),
                    format!("{:.2}", r.mean_discretionary),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowMix {
    pub slices: Vec<Share>,
}

pub fn cash_flow_mix(view: &FilteredView) -> CashFlowMix {
    CashFlowMix {
        slices: shares(stats::count_by(
            view.iter().map(|r| r.raw.cash_flow_status.as_str()),
        )),
    }
}

impl Tabular for CashFlowMix {
    fn headers(&self) -> Vec<String> {
        vec!["Cash Flow".into(), "Count".into(), "Share".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        share_rows(&self.slices)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionRow {
    pub subscription_services: f64,
    pub mean_discretionary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionsVsDiscretionary {
    pub rows: Vec<SubscriptionRow>,
}

pub fn subscriptions_vs_discretionary(view: &FilteredView) -> SubscriptionsVsDiscretionary {
    let rows = stats::mean_by_numeric_key(
        view.iter()
            .map(|r| (r.raw.subscription_services, r.raw.discretionary_spending)),
    )
    .into_iter()
    .map(|(subscription_services, mean_discretionary)| SubscriptionRow {
        subscription_services,
        mean_discretionary,
    })
    .collect();
    SubscriptionsVsDiscretionary { rows }
}

impl Tabular for SubscriptionsVsDiscretionary {
    fn headers(&self) -> Vec<String> {
        vec!["Subscriptions".into(), "Avg Discretionary".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.subscription_services.to_string(),
                    format!("{:.2}", r.mean_discretionary),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetCashFlowRow {
    pub year: i32,
    pub scenario: String,
    pub mean_net_cash_flow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetCashFlowTrend {
    pub rows: Vec<NetCashFlowRow>,
    /// Fixed reference line; never derived from the data.
    pub zero_line: f64,
}

pub fn net_cash_flow_trend(view: &FilteredView) -> NetCashFlowTrend {
    let rows = stats::mean_by(
        view.iter()
            .map(|r| ((r.year, r.raw.financial_scenario.clone()), r.net_cash_flow)),
    )
    .into_iter()
    .map(|((year, scenario), mean_net_cash_flow)| NetCashFlowRow {
        year,
        scenario,
        mean_net_cash_flow,
    })
    .collect();
    NetCashFlowTrend {
        rows,
        zero_line: 0.0,
    }
}

impl Tabular for NetCashFlowTrend {
    fn headers(&self) -> Vec<String> {
        vec!["Year".into(), "Scenario".into(), "Avg Net Cash Flow".into()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.year.to_string(),
                    r.scenario.clone(),
                    format!("{:.2}", r.mean_net_cash_flow),
                ]
            })
            .collect()
    }
}
