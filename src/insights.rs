// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FinscopeError;
use crate::filter::FilteredView;
use crate::models::CreditBand;
use crate::stats::{self, pct_change};
use crate::utils::fmt_money;
use serde::Serialize;

pub const RECESSION: &str = "recession";
pub const NORMAL: &str = "normal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Currency,
    Percent,
    Score,
}

/// A headline number with its change against the unfiltered population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub name: &'static str,
    pub unit: Unit,
    pub value: f64,
    pub baseline: f64,
    /// Signed % change of `value` against `baseline`; `None` when the baseline is zero.
    pub delta_pct: Option<f64>,
}

impl Kpi {
    fn new(name: &'static str, unit: Unit, value: f64, baseline: f64) -> Self {
        Kpi {
            name,
            unit,
            value,
            baseline,
            delta_pct: pct_change(value, baseline),
        }
    }

    pub fn display_value(&self) -> String {
        match self.unit {
            Unit::Currency => fmt_money(self.value),
            Unit::Percent => format!("{:.1}%", self.value),
            Unit::Score => format!("{:.0}", self.value),
        }
    }

    pub fn display_delta(&self) -> String {
        match self.delta_pct {
            Some(d) => format!("{:+.1}%", d),
            None => "n/a".into(),
        }
    }
}

/// Either a formatted fact or the placeholder for a comparison that cannot be made.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Insight {
    Ready { name: &'static str, text: String },
    InsufficientData { name: &'static str, reason: String },
}

impl Insight {
    pub fn name(&self) -> &'static str {
        match self {
            Insight::Ready { name, .. } | Insight::InsufficientData { name, .. } => *name,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Insight::Ready { text, .. } => text.clone(),
            Insight::InsufficientData { reason, .. } => format!("Insufficient data: {}", reason),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Insight::Ready { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub kpis: Vec<Kpi>,
    /// Mean savings under `normal` minus mean savings under `recession`.
    pub recession_savings_gap: Option<f64>,
    pub insights: Vec<Insight>,
}

impl Insights {
    pub fn kpi(&self, name: &str) -> Option<&Kpi> {
        self.kpis.iter().find(|k| k.name == name)
    }

    pub fn insight(&self, name: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.name() == name)
    }
}

/// Scalar metrics shared by the filtered view and the baseline.
#[derive(Debug, Clone, Copy)]
struct Metrics {
    income: f64,
    expense: f64,
    savings: f64,
    goal_met_pct: f64,
    positive_cash_flow_pct: f64,
    credit_score: f64,
    fraud_pct: f64,
}

impl Metrics {
    fn of(view: &FilteredView) -> Option<Self> {
        Some(Metrics {
            income: stats::mean(view.iter().map(|r| r.raw.monthly_income))?,
            expense: stats::mean(view.iter().map(|r| r.raw.monthly_expense_total))?,
            savings: stats::mean(view.iter().map(|r| r.raw.actual_savings))?,
            goal_met_pct: stats::rate_pct(view.iter(), |r| r.raw.savings_goal_met)?,
            positive_cash_flow_pct: stats::rate_pct(view.iter(), |r| {
                r.raw.cash_flow_status == "Positive"
            })?,
            credit_score: stats::mean(view.iter().map(|r| f64::from(r.raw.credit_score)))?,
            fraud_pct: stats::rate_pct(view.iter(), |r| r.raw.fraud_flag)?,
        })
    }
}

fn scenario_savings(view: &FilteredView, scenario: &str) -> Option<f64> {
    stats::mean(
        view.iter()
            .filter(|r| r.raw.financial_scenario == scenario)
            .map(|r| r.raw.actual_savings),
    )
}

/// Normal minus recession mean savings, or the error naming the absent scenarios.
pub fn recession_savings_gap(view: &FilteredView) -> Result<f64, FinscopeError> {
    let normal = scenario_savings(view, NORMAL);
    let recession = scenario_savings(view, RECESSION);
    match (normal, recession) {
        (Some(n), Some(r)) => Ok(n - r),
        _ => {
            let missing = [(NORMAL, normal), (RECESSION, recession)]
                .into_iter()
                .filter(|(_, v)| v.is_none())
                .map(|(s, _)| s.to_string())
                .collect();
            Err(FinscopeError::InsufficientComparisonData {
                insight: "economic_impact".into(),
                missing,
            })
        }
    }
}

fn dominant_band(view: &FilteredView) -> Option<CreditBand> {
    // Ties resolve to the lower band.
    stats::count_by(view.iter().map(|r| r.credit_band))
        .into_iter()
        .fold(None, |best: Option<(CreditBand, usize)>, (band, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((band, n)),
        })
        .map(|(band, _)| band)
}

/// Compute KPIs and insight texts for `view`, comparing against `baseline`.
pub fn compute(view: &FilteredView, baseline: &FilteredView) -> Insights {
    let unavailable = |name: &'static str| Insight::InsufficientData {
        name,
        reason: FinscopeError::EmptyFilterResult.to_string(),
    };
    let (Some(cur), Some(base)) = (Metrics::of(view), Metrics::of(baseline)) else {
        return Insights {
            kpis: Vec::new(),
            recession_savings_gap: None,
            insights: vec![
                unavailable("savings_goal_achievement"),
                unavailable("economic_impact"),
                unavailable("credit_profile"),
            ],
        };
    };

    let kpis = vec![
        Kpi::new("avg_income", Unit::Currency, cur.income, base.income),
        Kpi::new("avg_expenses", Unit::Currency, cur.expense, base.expense),
        Kpi::new("avg_savings", Unit::Currency, cur.savings, base.savings),
        Kpi::new(
            "goal_met_rate",
            Unit::Percent,
            cur.goal_met_pct,
            base.goal_met_pct,
        ),
        Kpi::new(
            "positive_cash_flow_rate",
            Unit::Percent,
            cur.positive_cash_flow_pct,
            base.positive_cash_flow_pct,
        ),
        Kpi::new(
            "avg_credit_score",
            Unit::Score,
            cur.credit_score,
            base.credit_score,
        ),
        Kpi::new("fraud_rate", Unit::Percent, cur.fraud_pct, base.fraud_pct),
    ];

    let goal = Insight::Ready {
        name: "savings_goal_achievement",
        text: format!(
            "Only {:.1}% of users meet their savings goals, despite {:.0}% having positive cash flow.",
            cur.goal_met_pct, cur.positive_cash_flow_pct
        ),
    };

    let gap = recession_savings_gap(view);
    let impact = match &gap {
        Ok(g) => Insight::Ready {
            name: "economic_impact",
            text: format!(
                "Recession reduces savings by {} compared to normal periods.",
                fmt_money(*g)
            ),
        },
        Err(e) => {
            log::debug!("economic impact skipped: {}", e);
            Insight::InsufficientData {
                name: "economic_impact",
                reason: e.to_string(),
            }
        }
    };

    let band = dominant_band(view)
        .map(|b| b.to_string())
        .unwrap_or_else(|| "-".into());
    let credit = Insight::Ready {
        name: "credit_profile",
        text: format!(
            "Average credit score: {:.0}. Fraud rate: {:.2}%. Most common band: {}.",
            cur.credit_score, cur.fraud_pct, band
        ),
    };

    Insights {
        kpis,
        recession_savings_gap: gap.ok(),
        insights: vec![goal, impact, credit],
    }
}
