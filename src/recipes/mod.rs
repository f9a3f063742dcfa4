// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The chart recipe catalog. Each recipe is a pure function of the filtered
//! view; none of them reads another recipe's output.

pub mod credit;
pub mod savings;
pub mod scenarios;
pub mod spending;

use crate::config::Config;
use crate::error::FinscopeError;
use crate::filter::FilteredView;
use crate::stats::{self, FiveNumberSummary, TrendLine};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use credit::{
    AdviceByStress, CreditBandMix, CreditScoreDistribution, FraudHeatmap, LoanBurdenByIncomeType,
};
pub use savings::{GoalByYear, SavingsByStressIncome, SavingsRateDistribution};
pub use scenarios::{
    DebtToIncomeByScenario, InvestmentByScenarioIncome, ScenarioMetrics, StressByScenario,
};
pub use spending::{
    CashFlowMix, IncomeByType, NetCashFlowTrend, SpendingByCategory, SubscriptionsVsDiscretionary,
    YearlyTrend,
};

/// Table shape handed to whatever renders the chart.
pub trait Tabular {
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    YearlyTrend,
    IncomeByType,
    SpendingByCategory,
    CashFlowMix,
    SavingsRateDistribution,
    GoalByYear,
    SavingsByStressIncome,
    EmergencyFundVsSavings,
    ScenarioMetrics,
    StressByScenario,
    DebtToIncomeByScenario,
    InvestmentByScenarioIncome,
    CreditScoreDistribution,
    CreditBandMix,
    DebtVsCredit,
    LoanBurdenByIncomeType,
    AdviceByStress,
    FraudHeatmap,
    SubscriptionsVsDiscretionary,
    NetCashFlowTrend,
}

impl Recipe {
    pub const ALL: [Recipe; 20] = [
        Recipe::YearlyTrend,
        Recipe::IncomeByType,
        Recipe::SpendingByCategory,
        Recipe::CashFlowMix,
        Recipe::SavingsRateDistribution,
        Recipe::GoalByYear,
        Recipe::SavingsByStressIncome,
        Recipe::EmergencyFundVsSavings,
        Recipe::ScenarioMetrics,
        Recipe::StressByScenario,
        Recipe::DebtToIncomeByScenario,
        Recipe::InvestmentByScenarioIncome,
        Recipe::CreditScoreDistribution,
        Recipe::CreditBandMix,
        Recipe::DebtVsCredit,
        Recipe::LoanBurdenByIncomeType,
        Recipe::AdviceByStress,
        Recipe::FraudHeatmap,
        Recipe::SubscriptionsVsDiscretionary,
        Recipe::NetCashFlowTrend,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Recipe::YearlyTrend => "yearly-trend",
            Recipe::IncomeByType => "income-by-type",
            Recipe::SpendingByCategory => "spending-by-category",
            Recipe::CashFlowMix => "cash-flow-mix",
            Recipe::SavingsRateDistribution => "savings-rate-distribution",
            Recipe::GoalByYear => "goal-by-year",
            Recipe::SavingsByStressIncome => "savings-by-stress-income",
            Recipe::EmergencyFundVsSavings => "emergency-fund-vs-savings",
            Recipe::ScenarioMetrics => "scenario-metrics",
            Recipe::StressByScenario => "stress-by-scenario",
            Recipe::DebtToIncomeByScenario => "debt-to-income-by-scenario",
            Recipe::InvestmentByScenarioIncome => "investment-by-scenario-income",
            Recipe::CreditScoreDistribution => "credit-score-distribution",
            Recipe::CreditBandMix => "credit-band-mix",
            Recipe::DebtVsCredit => "debt-vs-credit",
            Recipe::LoanBurdenByIncomeType => "loan-burden-by-income-type",
            Recipe::AdviceByStress => "advice-by-stress",
            Recipe::FraudHeatmap => "fraud-heatmap",
            Recipe::SubscriptionsVsDiscretionary => "subscriptions-vs-discretionary",
            Recipe::NetCashFlowTrend => "net-cash-flow-trend",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Recipe::YearlyTrend => "Yearly Trends",
            Recipe::IncomeByType => "Income by Type",
            Recipe::SpendingByCategory => "Spending by Category",
            Recipe::CashFlowMix => "Cash Flow Status",
            Recipe::SavingsRateDistribution => "Savings Rate Distribution",
            Recipe::GoalByYear => "Goal Achievement by Year",
            Recipe::SavingsByStressIncome => "Savings by Stress & Income",
            Recipe::EmergencyFundVsSavings => "Emergency Fund vs Savings",
            Recipe::ScenarioMetrics => "Metrics by Scenario",
            Recipe::StressByScenario => "Stress by Scenario",
            Recipe::DebtToIncomeByScenario => "Debt-to-Income by Scenario",
            Recipe::InvestmentByScenarioIncome => "Investment by Scenario",
            Recipe::CreditScoreDistribution => "Credit Score Distribution",
            Recipe::CreditBandMix => "Credit Bands",
            Recipe::DebtVsCredit => "Debt-to-Income vs Credit Score",
            Recipe::LoanBurdenByIncomeType => "Loan Burden by Income Type",
            Recipe::AdviceByStress => "Advice Score by Stress",
            Recipe::FraudHeatmap => "Fraud Rate by Category & Scenario",
            Recipe::SubscriptionsVsDiscretionary => "Subscriptions vs Discretionary Spending",
            Recipe::NetCashFlowTrend => "Net Cash Flow Trend",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = FinscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Recipe::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| FinscopeError::UnknownRecipe(s.to_string()))
    }
}

/// Count and proportion of one slice of a pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub proportion: f64,
}

/// Turn ordered counts into pie slices.
pub(crate) fn shares<K: ToString>(counts: BTreeMap<K, usize>) -> Vec<Share> {
    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(k, count)| Share {
            label: k.to_string(),
            count,
            proportion: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

fn share_rows(slices: &[Share]) -> Vec<Vec<String>> {
    slices
        .iter()
        .map(|s| {
            vec![
                s.label.clone(),
                s.count.to_string(),
                format!("{:.1}%", s.proportion * 100.0),
            ]
        })
        .collect()
}

/// Box-plot input for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub summary: FiveNumberSummary,
}

pub(crate) fn summaries<I>(pairs: I) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (k, v) in pairs {
        groups.entry(k).or_default().push(v);
    }
    groups
        .into_iter()
        .filter_map(|(key, values)| {
            stats::five_number_summary(&values).map(|summary| GroupSummary { key, summary })
        })
        .collect()
}

fn summary_headers(key: &str) -> Vec<String> {
    [key, "N", "Min", "Q1", "Median", "Q3", "Max"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn summary_rows(groups: &[GroupSummary]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| {
            let s = &g.summary;
            vec![
                g.key.clone(),
                s.count.to_string(),
                format!("{:.2}", s.min),
                format!("{:.2}", s.q1),
                format!("{:.2}", s.median),
                format!("{:.2}", s.q3),
                format!("{:.2}", s.max),
            ]
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: String,
}

/// Seeded, bounded sample of the view plus a least-squares line through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSample {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub population: usize,
    pub points: Vec<ScatterPoint>,
    pub trend: Option<TrendLine>,
}

impl ScatterSample {
    pub(crate) fn build<F>(
        view: &FilteredView,
        labels: (&'static str, &'static str),
        cap: usize,
        seed: u64,
        point: F,
    ) -> Self
    where
        F: Fn(&crate::models::Record) -> ScatterPoint,
    {
        let records = view.records();
        let points: Vec<ScatterPoint> = stats::sample_indices(records.len(), cap, seed)
            .into_iter()
            .map(|i| point(records[i]))
            .collect();
        let xy: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        ScatterSample {
            x_label: labels.0,
            y_label: labels.1,
            population: records.len(),
            trend: stats::least_squares(&xy),
            points,
        }
    }
}

impl Tabular for ScatterSample {
    fn headers(&self) -> Vec<String> {
        vec![
            "Points".into(),
            "Population".into(),
            "Slope".into(),
            "Intercept".into(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let (slope, intercept) = match &self.trend {
            Some(t) => (format!("{:.4}", t.slope), format!("{:.2}", t.intercept)),
            None => ("-".into(), "-".into()),
        };
        vec![vec![
            self.points.len().to_string(),
            self.population.to_string(),
            slope,
            intercept,
        ]]
    }
}

/// Every recipe evaluated against one filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tables {
    pub yearly_trend: YearlyTrend,
    pub income_by_type: IncomeByType,
    pub spending_by_category: SpendingByCategory,
    pub cash_flow_mix: CashFlowMix,
    pub savings_rate_distribution: SavingsRateDistribution,
    pub goal_by_year: GoalByYear,
    pub savings_by_stress_income: SavingsByStressIncome,
    pub emergency_fund_vs_savings: ScatterSample,
    pub scenario_metrics: ScenarioMetrics,
    pub stress_by_scenario: StressByScenario,
    pub debt_to_income_by_scenario: DebtToIncomeByScenario,
    pub investment_by_scenario_income: InvestmentByScenarioIncome,
    pub credit_score_distribution: CreditScoreDistribution,
    pub credit_band_mix: CreditBandMix,
    pub debt_vs_credit: ScatterSample,
    pub loan_burden_by_income_type: LoanBurdenByIncomeType,
    pub advice_by_stress: AdviceByStress,
    pub fraud_heatmap: FraudHeatmap,
    pub subscriptions_vs_discretionary: SubscriptionsVsDiscretionary,
    pub net_cash_flow_trend: NetCashFlowTrend,
}

impl Tables {
    pub fn compute(view: &FilteredView, cfg: &Config) -> Self {
        let sampling = &cfg.sampling;
        let bins = &cfg.histogram;
        Tables {
            yearly_trend: spending::yearly_trend(view),
            income_by_type: spending::income_by_type(view),
            spending_by_category: spending::spending_by_category(view),
            cash_flow_mix: spending::cash_flow_mix(view),
            savings_rate_distribution: savings::savings_rate_distribution(
                view,
                bins.savings_rate_bins,
            ),
            goal_by_year: savings::goal_by_year(view),
            savings_by_stress_income: savings::savings_by_stress_income(view),
            emergency_fund_vs_savings: savings::emergency_fund_vs_savings(
                view,
                sampling.cap,
                sampling.seed,
            ),
            scenario_metrics: scenarios::scenario_metrics(view),
            stress_by_scenario: scenarios::stress_by_scenario(view),
            debt_to_income_by_scenario: scenarios::debt_to_income_by_scenario(view),
            investment_by_scenario_income: scenarios::investment_by_scenario_income(view),
            credit_score_distribution: credit::credit_score_distribution(
                view,
                bins.credit_score_bins,
            ),
            credit_band_mix: credit::credit_band_mix(view),
            debt_vs_credit: credit::debt_vs_credit(view, sampling.cap, sampling.seed),
            loan_burden_by_income_type: credit::loan_burden_by_income_type(view),
            advice_by_stress: credit::advice_by_stress(view),
            fraud_heatmap: credit::fraud_heatmap(view),
            subscriptions_vs_discretionary: spending::subscriptions_vs_discretionary(view),
            net_cash_flow_trend: spending::net_cash_flow_trend(view),
        }
    }

    pub fn get(&self, recipe: Recipe) -> &dyn Tabular {
        match recipe {
            Recipe::YearlyTrend => &self.yearly_trend,
            Recipe::IncomeByType => &self.income_by_type,
            Recipe::SpendingByCategory => &self.spending_by_category,
            Recipe::CashFlowMix => &self.cash_flow_mix,
            Recipe::SavingsRateDistribution => &self.savings_rate_distribution,
            Recipe::GoalByYear => &self.goal_by_year,
            Recipe::SavingsByStressIncome => &self.savings_by_stress_income,
            Recipe::EmergencyFundVsSavings => &self.emergency_fund_vs_savings,
            Recipe::ScenarioMetrics => &self.scenario_metrics,
            Recipe::StressByScenario => &self.stress_by_scenario,
            Recipe::DebtToIncomeByScenario => &self.debt_to_income_by_scenario,
            Recipe::InvestmentByScenarioIncome => &self.investment_by_scenario_income,
            Recipe::CreditScoreDistribution => &self.credit_score_distribution,
            Recipe::CreditBandMix => &self.credit_band_mix,
            Recipe::DebtVsCredit => &self.debt_vs_credit,
            Recipe::LoanBurdenByIncomeType => &self.loan_burden_by_income_type,
            Recipe::AdviceByStress => &self.advice_by_stress,
            Recipe::FraudHeatmap => &self.fraud_heatmap,
            Recipe::SubscriptionsVsDiscretionary => &self.subscriptions_vs_discretionary,
            Recipe::NetCashFlowTrend => &self.net_cash_flow_trend,
        }
    }

    /// JSON value of a single recipe's table.
    pub fn to_json(&self, recipe: Recipe) -> serde_json::Result<serde_json::Value> {
        let all = serde_json::to_value(self)?;
        let key = recipe.name().replace('-', "_");
        Ok(all.get(&key).cloned().unwrap_or(serde_json::Value::Null))
    }
}
