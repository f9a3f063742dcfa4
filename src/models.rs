// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Medium, StressLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(StressLevel::Low),
            "medium" => Ok(StressLevel::Medium),
            "high" => Ok(StressLevel::High),
            other => Err(format!("unknown stress level '{}'", other)),
        }
    }
}

/// Credit score bucket. Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CreditBand {
    Poor,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Exceptional,
}

impl CreditBand {
    pub const ALL: [CreditBand; 5] = [
        CreditBand::Poor,
        CreditBand::Fair,
        CreditBand::Good,
        CreditBand::VeryGood,
        CreditBand::Exceptional,
    ];

    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=579 => CreditBand::Poor,
            580..=669 => CreditBand::Fair,
            670..=739 => CreditBand::Good,
            740..=799 => CreditBand::VeryGood,
            _ => CreditBand::Exceptional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditBand::Poor => "Poor",
            CreditBand::Fair => "Fair",
            CreditBand::Good => "Good",
            CreditBand::VeryGood => "Very Good",
            CreditBand::Exceptional => "Exceptional",
        }
    }
}

impl fmt::Display for CreditBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the source file, exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub user_id: String,
    pub monthly_income: f64,
    pub monthly_expense_total: f64,
    pub savings_rate: f64,
    pub actual_savings: f64,
    pub emergency_fund: f64,
    pub investment_amount: f64,
    pub loan_payment: f64,
    pub credit_score: i32,
    pub debt_to_income_ratio: f64,
    pub financial_stress_level: StressLevel,
    pub financial_scenario: String,
    pub income_type: String,
    pub category: String,
    pub cash_flow_status: String,
    #[serde(with = "flag")]
    pub savings_goal_met: bool,
    #[serde(with = "flag")]
    pub fraud_flag: bool,
    pub essential_spending: f64,
    pub discretionary_spending: f64,
    pub subscription_services: f64,
    pub financial_advice_score: f64,
}

/// A raw row plus the fields derived from it at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(flatten)]
    pub raw: RawRecord,
    pub year: i32,
    pub month: u32,
    pub net_cash_flow: f64,
    pub expense_to_income_ratio: Option<f64>,
    pub loan_burden_pct: Option<f64>,
    pub credit_band: CreditBand,
    /// Every field of the source row as read, in source column order.
    #[serde(skip)]
    pub fields: Vec<String>,
}

impl Record {
    pub fn derive(raw: RawRecord, fields: Vec<String>) -> Self {
        let income = raw.monthly_income;
        let (expense_to_income_ratio, loan_burden_pct) = if income != 0.0 {
            (
                Some(raw.monthly_expense_total / income),
                Some(raw.loan_payment / income * 100.0),
            )
        } else {
            (None, None)
        };
        Record {
            year: raw.date.year(),
            month: raw.date.month(),
            net_cash_flow: income - raw.monthly_expense_total,
            expense_to_income_ratio,
            loan_burden_pct,
            credit_band: CreditBand::from_score(raw.credit_score),
            raw,
            fields,
        }
    }
}

/// Headline numbers shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub users: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

mod iso_date {
    use super::*;

    const FMT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&d.format(FMT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        let trimmed = raw.trim();
        // Accept a trailing time component, keep the calendar date only.
        let day = trimmed.get(..10).unwrap_or(trimmed);
        NaiveDate::parse_from_str(day, FMT).map_err(serde::de::Error::custom)
    }
}

mod flag {
    use super::*;

    pub fn serialize<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(u8::from(*v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "1.0" | "true" => Ok(true),
            "0" | "0.0" | "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid flag '{}', expected 0 or 1",
                other
            ))),
        }
    }
}
