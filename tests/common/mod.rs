// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use finscope::dataset::Dataset;

pub const HEADER: &str = "date,user_id,monthly_income,monthly_expense_total,savings_rate,actual_savings,emergency_fund,investment_amount,loan_payment,credit_score,debt_to_income_ratio,financial_stress_level,financial_scenario,income_type,category,cash_flow_status,savings_goal_met,fraud_flag,essential_spending,discretionary_spending,subscription_services,financial_advice_score";

#[derive(Debug, Clone)]
pub struct Row {
    pub date: String,
    pub user: String,
    pub income: f64,
    pub expense: f64,
    pub savings_rate: f64,
    pub savings: f64,
    pub emergency: f64,
    pub investment: f64,
    pub loan: f64,
    pub credit: i32,
    pub dti: f64,
    pub stress: String,
    pub scenario: String,
    pub income_type: String,
    pub category: String,
    pub cash_flow: String,
    pub goal: u8,
    pub fraud: u8,
    pub essential: f64,
    pub discretionary: f64,
    pub subs: f64,
    pub advice: f64,
}

impl Default for Row {
    fn default() -> Self {
        Row {
            date: "2021-03-15".into(),
            user: "U0001".into(),
            income: 5000.0,
            expense: 4000.0,
            savings_rate: 0.2,
            savings: 1000.0,
            emergency: 3000.0,
            investment: 200.0,
            loan: 0.0,
            credit: 700,
            dti: 0.3,
            stress: "Low".into(),
            scenario: "normal".into(),
            income_type: "Salary".into(),
            category: "Groceries".into(),
            cash_flow: "Positive".into(),
            goal: 1,
            fraud: 0,
            essential: 2500.0,
            discretionary: 1500.0,
            subs: 3.0,
            advice: 6.5,
        }
    }
}

impl Row {
    pub fn line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.date,
            self.user,
            self.income,
            self.expense,
            self.savings_rate,
            self.savings,
            self.emergency,
            self.investment,
            self.loan,
            self.credit,
            self.dti,
            self.stress,
            self.scenario,
            self.income_type,
            self.category,
            self.cash_flow,
            self.goal,
            self.fraud,
            self.essential,
            self.discretionary,
            self.subs,
            self.advice
        )
    }
}

pub fn csv_text(rows: &[Row]) -> String {
    let mut s = String::from(HEADER);
    s.push('\n');
    for r in rows {
        s.push_str(&r.line());
        s.push('\n');
    }
    s
}

pub fn dataset(rows: &[Row]) -> Dataset {
    Dataset::from_reader("fixture.csv", csv_text(rows).as_bytes()).unwrap()
}

/// Deterministic spread over every dimension, `n` rows.
pub fn varied(n: usize) -> Vec<Row> {
    let years = ["2019", "2020", "2021", "2022", "2023"];
    let scenarios = ["normal", "inflation", "recession"];
    let incomes = ["Salary", "Freelance", "Mixed"];
    let stress = ["Low", "Medium", "High"];
    let categories = ["Groceries", "Rent", "Travel", "Health"];
    let flows = ["Positive", "Neutral", "Negative"];
    (0..n)
        .map(|i| {
            let income = 3000.0 + (i % 17) as f64 * 250.0;
            let expense = 2000.0 + (i % 11) as f64 * 300.0;
            Row {
                date: format!("{}-{:02}-{:02}", years[i % 5], i % 12 + 1, i % 28 + 1),
                user: format!("U{:04}", i % 23),
                income,
                expense,
                savings_rate: (i % 10) as f64 / 10.0,
                savings: (income - expense).max(0.0),
                emergency: 1000.0 + (i % 13) as f64 * 400.0,
                investment: (i % 7) as f64 * 100.0,
                loan: if i % 4 == 0 { 0.0 } else { (i % 9) as f64 * 50.0 },
                credit: 300 + ((i * 37) % 551) as i32,
                dti: (i % 8) as f64 * 0.1,
                stress: stress[(i / 2) % 3].into(),
                scenario: scenarios[(i / 3) % 3].into(),
                income_type: incomes[(i / 5) % 3].into(),
                category: categories[i % 4].into(),
                cash_flow: flows[(i / 7) % 3].into(),
                goal: (i % 3 == 0) as u8,
                fraud: (i % 19 == 0) as u8,
                essential: 1200.0 + (i % 5) as f64 * 100.0,
                discretionary: 300.0 + (i % 6) as f64 * 75.0,
                subs: (i % 5) as f64,
                advice: (i % 10) as f64,
            }
        })
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
