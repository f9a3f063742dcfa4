// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dimensions;
pub mod export;
pub mod preview;
pub mod report;
pub mod summary;

use crate::config::{Config, DATA_ENV};
use crate::dataset::{self, Dataset};
use crate::filter::{Dimension, FilterSelection};
use anyhow::{Context as _, Result};
use std::sync::Arc;

/// CLI flag id for each filter dimension.
const FILTER_FLAGS: [(&str, Dimension); 5] = [
    ("year", Dimension::Year),
    ("scenario", Dimension::Scenario),
    ("income-type", Dimension::IncomeType),
    ("stress", Dimension::StressLevel),
    ("category", Dimension::Category),
];

/// Loaded data, current selection and output flags for one invocation.
pub struct Context {
    pub config: Config,
    pub dataset: Arc<Dataset>,
    pub selection: FilterSelection,
    pub json: bool,
    pub jsonl: bool,
}

impl Context {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let config = Config::load().context("Load config")?;
        let path = config.resolve_data_path(
            m.get_one::<String>("data").map(String::as_str),
            std::env::var(DATA_ENV).ok(),
        );
        let dataset = dataset::load_cached(&path)?;
        Ok(Self::with_dataset(config, dataset, m))
    }

    /// Build a context around an already loaded dataset.
    pub fn with_dataset(config: Config, dataset: Arc<Dataset>, m: &clap::ArgMatches) -> Self {
        let selection = selection_from_matches(&dataset, m);
        Context {
            config,
            dataset,
            selection,
            json: m.get_flag("json"),
            jsonl: m.get_flag("jsonl"),
        }
    }
}

/// Start from every value and narrow each dimension given on the command line.
pub fn selection_from_matches(dataset: &Dataset, m: &clap::ArgMatches) -> FilterSelection {
    let mut sel = FilterSelection::all(dataset);
    for (flag, dim) in FILTER_FLAGS {
        if let Some(values) = m.get_many::<String>(flag) {
            sel = sel.with(dim, values);
        }
    }
    sel
}

pub fn handle(ctx: &Context, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "summary" => summary::handle(ctx),
        "report" => report::handle(ctx, sub),
        "dimensions" => dimensions::handle(ctx, sub),
        "preview" => preview::handle(ctx, sub),
        "export" => export::handle(ctx, sub),
        other => Err(anyhow::anyhow!("No handler for command '{}'", other)),
    }
}
