// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinscopeError, Result};
use crate::models::{DatasetSummary, RawRecord, Record};
use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Loaded datasets keyed by source path. Entries live until the process exits
/// or [`reload`] replaces them.
static CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<Dataset>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Immutable record collection with derived fields populated.
#[derive(Debug)]
pub struct Dataset {
    source: PathBuf,
    header: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Parse CSV text with a header row. `source` is only used for error messages.
    pub fn from_reader<R: Read>(source: impl Into<PathBuf>, rdr: R) -> Result<Self> {
        let source = source.into();
        let unavailable = |reason: String| FinscopeError::DataUnavailable {
            path: source.clone(),
            reason,
        };
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);
        let headers = rdr
            .headers()
            .map_err(|e| unavailable(format!("header: {}", e)))?
            .clone();
        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let fail = |e: csv::Error| unavailable(format!("row {}: {}", i + 2, e));
            let row = row.map_err(fail)?;
            let raw: RawRecord = row.deserialize(Some(&headers)).map_err(fail)?;
            records.push(Record::derive(raw, row.iter().map(str::to_string).collect()));
        }
        if records.is_empty() {
            return Err(unavailable("no records".into()));
        }
        Ok(Dataset {
            source,
            header: headers.iter().map(str::to_string).collect(),
            records,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FinscopeError::DataUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let ds = Self::from_reader(path, file)?;
        log::info!("loaded {} records from {}", ds.len(), path.display());
        Ok(ds)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Column names as they appear in the source, including unmodelled ones.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let users: BTreeSet<&str> = self.records.iter().map(|r| r.raw.user_id.as_str()).collect();
        DatasetSummary {
            records: self.records.len(),
            users: users.len(),
            first_year: self.records.iter().map(|r| r.year).min(),
            last_year: self.records.iter().map(|r| r.year).max(),
        }
    }
}

/// Load once per process. Later calls for the same path return the same `Arc`.
///
/// The lock is held across the parse so concurrent callers wait for the first
/// load to finish instead of parsing twice.
pub fn load_cached(path: &Path) -> Result<Arc<Dataset>> {
    let mut cache = CACHE.lock().unwrap_or_else(|p| p.into_inner());
    if let Some(ds) = cache.get(path) {
        log::debug!("dataset cache hit for {}", path.display());
        return Ok(Arc::clone(ds));
    }
    let ds = Arc::new(Dataset::load(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&ds));
    Ok(ds)
}

/// Force a fresh parse, replacing any cached copy for this path.
///
/// On failure the previous cached copy is dropped as well.
pub fn reload(path: &Path) -> Result<Arc<Dataset>> {
    let mut cache = CACHE.lock().unwrap_or_else(|p| p.into_inner());
    cache.remove(path);
    let ds = Arc::new(Dataset::load(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&ds));
    Ok(ds)
}
