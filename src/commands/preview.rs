// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Context;
use crate::error::FinscopeError;
use crate::filter;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let n: usize = *sub.get_one::<usize>("rows").unwrap_or(&100);
    let view = filter::apply(&ctx.dataset, &ctx.selection);
    if view.is_empty() {
        println!("{}", FinscopeError::EmptyFilterResult);
        return Ok(());
    }
    let head: Vec<_> = view.iter().take(n).collect();
    if maybe_print_json(ctx.json, ctx.jsonl, &head)? {
        return Ok(());
    }
    let rows = head
        .iter()
        .map(|r| {
            vec![
                r.raw.date.to_string(),
                r.raw.user_id.clone(),
                fmt_money(r.raw.monthly_income),
                fmt_money(r.raw.monthly_expense_total),
                fmt_money(r.raw.actual_savings),
                r.raw.credit_score.to_string(),
                r.credit_band.to_string(),
                r.raw.financial_scenario.clone(),
                r.raw.income_type.clone(),
                r.raw.category.clone(),
            ]
        })
        .collect();
    let headers = [
        "Date", "User", "Income", "Expenses", "Savings", "Credit", "Band", "Scenario",
        "Income Type", "Category",
    ]
    .map(String::from);
    println!("{}", pretty_table(&headers, rows));
    println!("{} of {} records shown", head.len(), view.len());
    Ok(())
}
