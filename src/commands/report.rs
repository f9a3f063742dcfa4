// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Context;
use crate::error::FinscopeError;
use crate::pipeline;
use crate::recipes::Recipe;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let recipes: Vec<Recipe> = if sub.get_flag("all") {
        Recipe::ALL.to_vec()
    } else {
        let name = sub
            .get_one::<String>("recipe")
            .ok_or_else(|| anyhow::anyhow!("recipe name required"))?;
        vec![name.parse::<Recipe>()?]
    };

    let dash = match pipeline::compute(&ctx.dataset, &ctx.selection, &ctx.config) {
        Ok(d) => d,
        Err(FinscopeError::EmptyFilterResult) => {
            println!("{}", FinscopeError::EmptyFilterResult);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.json || ctx.jsonl {
        let mut out = serde_json::Map::new();
        for r in &recipes {
            out.insert(r.name().to_string(), dash.tables.to_json(*r)?);
        }
        let value = if recipes.len() == 1 {
            out.into_iter()
                .next()
                .map(|(_, v)| v)
                .unwrap_or(serde_json::Value::Null)
        } else {
            serde_json::Value::Object(out)
        };
        maybe_print_json(ctx.json, ctx.jsonl, &value)?;
        return Ok(());
    }

    for r in recipes {
        let table = dash.tables.get(r);
        println!("{}", r.title());
        println!("{}", pretty_table(&table.headers(), table.rows()));
    }
    Ok(())
}

pub fn list() {
    for r in Recipe::ALL {
        println!("{:<32} {}", r.name(), r.title());
    }
}
