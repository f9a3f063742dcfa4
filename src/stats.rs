// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reduction primitives shared by the recipes and the insight calculator.
//! Every function here is total: empty input yields an empty map or `None`,
//! never a NaN.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mean {
    sum: f64,
    n: usize,
}

impl Mean {
    pub fn push(&mut self, v: f64) {
        self.sum += v;
        self.n += 1;
    }

    pub fn value(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(self.sum / self.n as f64)
        }
    }
}

pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut m = Mean::default();
    for v in values {
        m.push(v);
    }
    m.value()
}

/// Share of items satisfying a predicate, as a percentage.
pub fn rate_pct<T, I, F>(items: I, pred: F) -> Option<f64>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    mean(items.into_iter().map(|t| if pred(&t) { 1.0 } else { 0.0 })).map(|m| m * 100.0)
}

/// Mean per key. Keys come back in `Ord` order.
pub fn mean_by<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut acc: BTreeMap<K, Mean> = BTreeMap::new();
    for (k, v) in pairs {
        acc.entry(k).or_default().push(v);
    }
    acc.into_iter()
        .filter_map(|(k, m)| m.value().map(|v| (k, v)))
        .collect()
}

pub fn count_by<K, I>(keys: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut acc: BTreeMap<K, usize> = BTreeMap::new();
    for k in keys {
        *acc.entry(k).or_insert(0) += 1;
    }
    acc
}

/// Mean of `y` for each distinct `x`, ascending by `x`.
pub fn mean_by_numeric_key<I>(pairs: I) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut pairs: Vec<(f64, f64)> = pairs.into_iter().filter(|(x, _)| !x.is_nan()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut out: Vec<(f64, f64)> = Vec::new();
    let mut current: Option<(f64, Mean)> = None;
    for (x, y) in pairs {
        if let Some((k, m)) = current.as_mut() {
            if *k == x {
                m.push(y);
                continue;
            }
        }
        if let Some((k, m)) = current.take() {
            out.extend(m.value().map(|v| (k, v)));
        }
        let mut m = Mean::default();
        m.push(y);
        current = Some((x, m));
    }
    if let Some((k, m)) = current {
        out.extend(m.value().map(|v| (k, v)));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over `[min, max]`; the last bin is closed on the right.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi == lo {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Quantile by linear interpolation between order statistics. `sorted` must be non-empty.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;
    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}

pub fn five_number_summary(values: &[f64]) -> Option<FiveNumberSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    Some(FiveNumberSummary {
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least squares fit of y on x. `None` with fewer than two points or no spread in x.
pub fn least_squares(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();
    let slope = sxy / sxx;
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// `min(cap, len)` distinct indices drawn with a fixed seed, returned ascending.
pub fn sample_indices(len: usize, cap: usize, seed: u64) -> Vec<usize> {
    if len <= cap {
        return (0..len).collect();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut idx = rand::seq::index::sample(&mut rng, len, cap).into_vec();
    idx.sort_unstable();
    idx
}

/// Signed percentage change of `current` against `baseline`.
pub fn pct_change(current: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 {
        None
    } else {
        Some((current - baseline) / baseline.abs() * 100.0)
    }
}
