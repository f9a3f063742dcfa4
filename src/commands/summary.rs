// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Context;
use crate::error::FinscopeError;
use crate::pipeline;
use crate::utils::{fmt_thousands, maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(ctx: &Context) -> Result<()> {
    let dash = match pipeline::compute(&ctx.dataset, &ctx.selection, &ctx.config) {
        Ok(d) => d,
        Err(FinscopeError::EmptyFilterResult) => {
            println!("{}", FinscopeError::EmptyFilterResult);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let payload = json!({
        "dataset": dash.dataset,
        "records": dash.records,
        "kpis": dash.insights.kpis,
        "insights": dash.insights.insights,
    });
    if maybe_print_json(ctx.json, ctx.jsonl, &payload)? {
        return Ok(());
    }

    let years = match (dash.dataset.first_year, dash.dataset.last_year) {
        (Some(a), Some(b)) => format!("{}-{}", a, b),
        _ => "-".into(),
    };
    println!(
        "{} records | {} users | {}",
        fmt_thousands(dash.dataset.records as f64, 0),
        fmt_thousands(dash.dataset.users as f64, 0),
        years
    );
    println!(
        "{} records displayed",
        fmt_thousands(dash.records as f64, 0)
    );

    let rows = dash
        .insights
        .kpis
        .iter()
        .map(|k| vec![k.name.to_string(), k.display_value(), k.display_delta()])
        .collect();
    let headers = ["Metric", "Value", "vs All"].map(String::from);
    println!("{}", pretty_table(&headers, rows));

    for insight in &dash.insights.insights {
        println!("- {}: {}", insight.name(), insight.text());
    }
    Ok(())
}
