// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exporter;
pub mod filter;
pub mod insights;
pub mod models;
pub mod pipeline;
pub mod recipes;
pub mod stats;
pub mod utils;

pub use error::{FinscopeError, Result};
