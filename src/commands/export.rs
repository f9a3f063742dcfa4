// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Context;
use crate::error::FinscopeError;
use crate::{exporter, filter};
use anyhow::{Context as _, Result};
use std::path::Path;

pub fn handle(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .map(|s| s.trim())
        .ok_or_else(|| anyhow::anyhow!("--out is required"))?;
    let view = filter::apply(&ctx.dataset, &ctx.selection);
    if view.is_empty() {
        return Err(FinscopeError::EmptyFilterResult.into());
    }
    exporter::export_csv(&ctx.dataset, &view, Path::new(out)).with_context(|| format!("Export to {}", out))?;
    println!("Exported {} records to {}", view.len(), out);
    Ok(())
}
