// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Context;
use crate::filter::{Dimension, FilterSelection};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use std::collections::BTreeMap;

pub fn handle(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let dims: Vec<Dimension> = match sub.get_one::<String>("dimension") {
        Some(name) => vec![name.parse::<Dimension>()?],
        None => Dimension::ALL.to_vec(),
    };
    let all = FilterSelection::all(&ctx.dataset);
    let map: BTreeMap<&str, Vec<String>> =
        dims.iter().map(|d| (d.name(), all.values(*d))).collect();
    if maybe_print_json(ctx.json, ctx.jsonl, &map)? {
        return Ok(());
    }
    let rows = dims
        .iter()
        .map(|d| vec![d.name().to_string(), all.values(*d).join(", ")])
        .collect();
    let headers = ["Dimension", "Values"].map(String::from);
    println!("{}", pretty_table(&headers, rows));
    Ok(())
}
