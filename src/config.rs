// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinscopeError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.finscope", "Finscope", "finscope"));

pub const DATA_ENV: &str = "FINSCOPE_DATA";
pub const DEFAULT_DATA_FILE: &str = "personal_finance_tracker_dataset.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Upper bound on points per scatter sample.
    pub cap: usize,
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { cap: 500, seed: 42 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub savings_rate_bins: usize,
    pub credit_score_bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            savings_rate_bins: 30,
            credit_score_bins: 40,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub sampling: SamplingConfig,
    pub histogram: HistogramConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.sampling.cap == 0 {
            return Err(FinscopeError::InvalidConfig(
                "sampling.cap must be at least 1".into(),
            ));
        }
        if self.histogram.savings_rate_bins == 0 || self.histogram.credit_score_bins == 0 {
            return Err(FinscopeError::InvalidConfig(
                "histogram bin counts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&text).map_err(|e| {
            FinscopeError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read `config.json` from the platform config dir, falling back to defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => {
                log::debug!("reading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Flag, then environment, then config file, then the working directory default.
    pub fn resolve_data_path(&self, flag: Option<&str>, env: Option<String>) -> PathBuf {
        if let Some(p) = flag.map(str::trim).filter(|p| !p.is_empty()) {
            return PathBuf::from(p);
        }
        if let Some(p) = env.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            return PathBuf::from(p);
        }
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.json"))
}
