// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dataset::Dataset;
use crate::error::FinscopeError;
use crate::models::{Record, StressLevel};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Year,
    Scenario,
    IncomeType,
    StressLevel,
    Category,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Year,
        Dimension::Scenario,
        Dimension::IncomeType,
        Dimension::StressLevel,
        Dimension::Category,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Year => "year",
            Dimension::Scenario => "scenario",
            Dimension::IncomeType => "income_type",
            Dimension::StressLevel => "stress_level",
            Dimension::Category => "category",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = FinscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "year" => Ok(Dimension::Year),
            "scenario" | "financial_scenario" => Ok(Dimension::Scenario),
            "income_type" => Ok(Dimension::IncomeType),
            "stress" | "stress_level" | "financial_stress_level" => Ok(Dimension::StressLevel),
            "category" => Ok(Dimension::Category),
            _ => Err(FinscopeError::UnknownDimension(s.to_string())),
        }
    }
}

/// Accepted values per dimension. Replaced wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub scenarios: BTreeSet<String>,
    pub income_types: BTreeSet<String>,
    pub stress_levels: BTreeSet<StressLevel>,
    pub categories: BTreeSet<String>,
}

impl FilterSelection {
    /// Every distinct value present in the dataset, i.e. no filtering.
    pub fn all(dataset: &Dataset) -> Self {
        let mut sel = FilterSelection::default();
        for r in dataset.records() {
            sel.years.insert(r.year);
            sel.scenarios.insert(r.raw.financial_scenario.clone());
            sel.income_types.insert(r.raw.income_type.clone());
            sel.stress_levels.insert(r.raw.financial_stress_level);
            sel.categories.insert(r.raw.category.clone());
        }
        sel
    }

    /// Copy of `self` with one dimension's set replaced by `values`.
    ///
    /// Values that cannot belong to the dimension (a non-numeric year, an unknown
    /// stress level) are dropped, so they behave like any other unmatched value.
    pub fn with<I, S>(&self, dim: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .collect();
        match dim {
            Dimension::Year => {
                next.years = values
                    .iter()
                    .filter_map(|v| match v.parse::<i32>() {
                        Ok(y) => Some(y),
                        Err(_) => {
                            log::warn!("ignoring non-numeric year '{}'", v);
                            None
                        }
                    })
                    .collect();
            }
            Dimension::StressLevel => {
                next.stress_levels = values
                    .iter()
                    .filter_map(|v| match v.parse::<StressLevel>() {
                        Ok(s) => Some(s),
                        Err(e) => {
                            log::warn!("ignoring {}", e);
                            None
                        }
                    })
                    .collect();
            }
            Dimension::Scenario => next.scenarios = values.into_iter().collect(),
            Dimension::IncomeType => next.income_types = values.into_iter().collect(),
            Dimension::Category => next.categories = values.into_iter().collect(),
        }
        next
    }

    /// Display strings of the accepted values for one dimension.
    pub fn values(&self, dim: Dimension) -> Vec<String> {
        match dim {
            Dimension::Year => self.years.iter().map(|y| y.to_string()).collect(),
            Dimension::Scenario => self.scenarios.iter().cloned().collect(),
            Dimension::IncomeType => self.income_types.iter().cloned().collect(),
            Dimension::StressLevel => self.stress_levels.iter().map(|s| s.to_string()).collect(),
            Dimension::Category => self.categories.iter().cloned().collect(),
        }
    }

    pub fn has_empty_dimension(&self) -> bool {
        self.years.is_empty()
            || self.scenarios.is_empty()
            || self.income_types.is_empty()
            || self.stress_levels.is_empty()
            || self.categories.is_empty()
    }

    pub fn accepts(&self, r: &Record) -> bool {
        self.years.contains(&r.year)
            && self.scenarios.contains(&r.raw.financial_scenario)
            && self.income_types.contains(&r.raw.income_type)
            && self.stress_levels.contains(&r.raw.financial_stress_level)
            && self.categories.contains(&r.raw.category)
    }
}

/// Records passing the current selection, borrowed from the dataset in source order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    /// The whole dataset, unfiltered.
    pub fn full(dataset: &'a Dataset) -> Self {
        FilteredView {
            records: dataset.records().iter().collect(),
        }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    if selection.has_empty_dimension() {
        log::debug!("selection has an empty dimension; view is empty");
        return FilteredView::default();
    }
    let records: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| selection.accepts(r))
        .collect();
    log::debug!("filter kept {} of {} records", records.len(), dataset.len());
    FilteredView { records }
}
