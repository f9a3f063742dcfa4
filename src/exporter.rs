// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::filter::FilteredView;
use std::io::Write;
use std::path::Path;

/// Write the source header, then every record in the view exactly as it was read.
///
/// Columns the loader does not model are carried through unchanged.
pub fn write_csv<W: Write>(dataset: &Dataset, view: &FilteredView, out: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(dataset.header())?;
    for r in view.iter() {
        wtr.write_record(&r.fields)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(dataset: &Dataset, view: &FilteredView) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(dataset, view, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_csv(dataset: &Dataset, view: &FilteredView, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(dataset, view, file)?;
    log::info!(
        "exported {} of {} records from {} to {}",
        view.len(),
        dataset.len(),
        dataset.source().display(),
        path.display()
    );
    Ok(())
}
