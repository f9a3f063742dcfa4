// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{FinscopeError, Result};
use crate::filter::{self, FilterSelection, FilteredView};
use crate::insights::{self, Insights};
use crate::models::DatasetSummary;
use crate::recipes::Tables;
use serde::Serialize;

/// Everything the rendering layer needs for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub dataset: DatasetSummary,
    pub selection: FilterSelection,
    pub records: usize,
    pub tables: Tables,
    pub insights: Insights,
}

/// One full pass: filter, every recipe, then insights.
///
/// Returns [`FinscopeError::EmptyFilterResult`] without running any recipe when
/// the selection matches nothing.
pub fn compute(dataset: &Dataset, selection: &FilterSelection, cfg: &Config) -> Result<Dashboard> {
    let view = filter::apply(dataset, selection);
    compute_view(dataset, selection, &view, cfg)
}

pub fn compute_view(
    dataset: &Dataset,
    selection: &FilterSelection,
    view: &FilteredView,
    cfg: &Config,
) -> Result<Dashboard> {
    if view.is_empty() {
        return Err(FinscopeError::EmptyFilterResult);
    }
    let baseline = FilteredView::full(dataset);
    let tables = Tables::compute(view, cfg);
    let insights = insights::compute(view, &baseline);
    log::debug!(
        "pipeline pass over {} records: {} insights ready",
        view.len(),
        insights.insights.iter().filter(|i| i.is_ready()).count()
    );
    Ok(Dashboard {
        dataset: dataset.summary(),
        selection: selection.clone(),
        records: view.len(),
        tables,
        insights,
    })
}
