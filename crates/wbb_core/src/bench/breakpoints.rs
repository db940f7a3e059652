//! # Breakpoint Tables
//!
//! A [`BreakpointTable`] reduces a reference population for one
//! (metric, category) pair to a small ordered set of (percentile, value)
//! anchors plus summary statistics. Tables are immutable once built and are
//! rebuilt wholesale when the reference population changes.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Standard percentile breakpoints.
pub const PERCENTILE_BREAKPOINTS: [u8; 7] = [5, 10, 25, 50, 75, 90, 95];

/// Category key for an unpartitioned population.
pub const CATEGORY_ALL: &str = "all";

/// Percentile anchors and summary statistics for one reference population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakpointTable {
    metric: String,
    category: String,
    count: u32,
    mean: Option<f64>,
    std: Option<f64>,
    /// (percentile, value) pairs, ascending by percentile. Values are
    /// non-decreasing for any well-behaved population; [`validate`]
    /// enforces that before the table is trusted for resolution.
    ///
    /// [`validate`]: BreakpointTable::validate
    breakpoints: Vec<(u8, f64)>,
}

impl BreakpointTable {
    /// Build a table from a raw population.
    ///
    /// NaN observations are dropped first. An empty clean population yields
    /// a `count == 0` table with no anchors, which resolves every value to
    /// "no benchmark available" rather than failing.
    ///
    /// Each requested percentile value is the linear interpolation between
    /// the two nearest order statistics at rank `p/100 * (n - 1)`.
    pub fn from_population(
        metric: &str,
        category: &str,
        values: &[f64],
        percentiles: &[u8],
    ) -> Self {
        let mut clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        clean.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        if clean.is_empty() {
            return Self {
                metric: metric.to_string(),
                category: category.to_string(),
                count: 0,
                mean: None,
                std: None,
                breakpoints: Vec::new(),
            };
        }

        let n = clean.len();
        let mean = clean.iter().sum::<f64>() / n as f64;
        let std = if n >= 2 {
            let var = clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            Some(var.sqrt())
        } else {
            None
        };

        let breakpoints = percentiles
            .iter()
            .map(|&p| (p, percentile_linear(&clean, p)))
            .collect();

        Self {
            metric: metric.to_string(),
            category: category.to_string(),
            count: n as u32,
            mean: Some(mean),
            std,
            breakpoints,
        }
    }

    /// Assemble a table from precomputed anchors (a loaded benchmark row).
    /// Anchors are sorted by percentile; missing anchor values are skipped.
    pub fn from_anchors(
        metric: &str,
        category: &str,
        count: u32,
        mean: Option<f64>,
        std: Option<f64>,
        anchors: &[(u8, Option<f64>)],
    ) -> Self {
        let mut breakpoints: Vec<(u8, f64)> = anchors
            .iter()
            .filter_map(|&(p, v)| v.filter(|v| !v.is_nan()).map(|v| (p, v)))
            .collect();
        breakpoints.sort_by_key(|&(p, _)| p);

        Self {
            metric: metric.to_string(),
            category: category.to_string(),
            count,
            mean,
            std,
            breakpoints,
        }
    }

    /// Reject tables whose anchor values decrease as the percentile rises.
    /// Ties (flat regions from a degenerate population) are allowed.
    pub fn validate(&self) -> Result<()> {
        for pair in self.breakpoints.windows(2) {
            let (prev_pctl, prev_value) = pair[0];
            let (pctl, value) = pair[1];
            if value < prev_value {
                return Err(CoreError::MalformedBenchmark {
                    metric: self.metric.clone(),
                    category: self.category.clone(),
                    prev_pctl,
                    pctl,
                });
            }
        }
        Ok(())
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    pub fn std(&self) -> Option<f64> {
        self.std
    }

    /// Anchor pairs, ascending by percentile.
    pub fn breakpoints(&self) -> &[(u8, f64)] {
        &self.breakpoints
    }

    /// Anchor value at an exact percentile, if configured.
    pub fn value_at(&self, percentile: u8) -> Option<f64> {
        self.breakpoints
            .iter()
            .find(|&&(p, _)| p == percentile)
            .map(|&(_, v)| v)
    }

    /// True when the table carries nothing to resolve against.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.breakpoints.is_empty()
    }
}

/// Value at the `p`-th percentile of a sorted population, using linear
/// interpolation between order statistics (rank `p/100 * (n - 1)`).
fn percentile_linear(sorted: &[f64], p: u8) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = f64::from(p) / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
