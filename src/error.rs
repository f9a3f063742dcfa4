// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinscopeError {
    /// The dataset could not be located or parsed. Fatal for the session.
    #[error("Dataset unavailable at {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// The current selection matched no records.
    #[error("No data matches filters")]
    EmptyFilterResult,

    #[error("Insufficient data for '{insight}': no records for {}", missing.join(", "))]
    InsufficientComparisonData {
        insight: String,
        missing: Vec<String>,
    },

    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("Unknown filter dimension: {0}")]
    UnknownDimension(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, FinscopeError>;
