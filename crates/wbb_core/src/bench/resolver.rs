//! # Percentile Resolution
//!
//! Maps a metric value to a percentile rank against a [`BreakpointTable`].
//!
//! Edge semantics are deliberate and load-bearing for stable dashboard
//! tiers: values at or beyond the outermost anchors saturate at those
//! anchors' percentiles (5/95 with the standard breakpoints) instead of
//! extrapolating to 0/100, and a value inside a flat (tied) bracket takes
//! the bracket's lower percentile. Identical inputs always resolve to the
//! identical output.

use once_cell::sync::Lazy;

use crate::bench::breakpoints::BreakpointTable;

/// Metrics where a lower raw value is better, so the percentile direction
/// is reversed. An explicit reviewable set, never inferred from the metric
/// name.
#[derive(Debug, Clone, Default)]
pub struct InvertSet {
    metrics: Vec<String>,
}

impl InvertSet {
    pub fn new<I, S>(metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metrics: metrics.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, metric: &str) -> bool {
        self.metrics.iter().any(|m| m == metric)
    }
}

/// The production inversion set: turnover rate and defensive rating.
pub static LOWER_IS_BETTER: Lazy<InvertSet> = Lazy::new(|| InvertSet::new(["tov_pct", "drtg"]));

/// Resolve a value to an interpolated percentile rank in [0, 100].
///
/// Returns `None` (no benchmark / no value - never an error) when the value
/// is NaN or the table is empty. With `invert`, the rank is reported as
/// `100 - p` so that "better" is always a higher rank.
pub fn resolve_percentile(value: f64, table: &BreakpointTable, invert: bool) -> Option<f64> {
    if value.is_nan() || table.is_empty() {
        return None;
    }

    let anchors = table.breakpoints();
    let (first_p, first_v) = anchors[0];
    let (last_p, last_v) = anchors[anchors.len() - 1];

    let raw = if value <= first_v {
        f64::from(first_p)
    } else if value >= last_v {
        f64::from(last_p)
    } else {
        interpolate(anchors, value)
    };

    Some(if invert { 100.0 - raw } else { raw })
}

/// Linear interpolation between the two anchors bracketing `value`.
/// Caller guarantees `value` lies strictly inside the anchor range.
fn interpolate(anchors: &[(u8, f64)], value: f64) -> f64 {
    for pair in anchors.windows(2) {
        let (p_lo, v_lo) = pair[0];
        let (p_hi, v_hi) = pair[1];
        if value >= v_lo && value <= v_hi {
            let span = v_hi - v_lo;
            // Flat bracket (tied anchors): take the lower percentile
            let frac = if span > 0.0 { (value - v_lo) / span } else { 0.0 };
            return f64::from(p_lo) + frac * f64::from(p_hi - p_lo);
        }
    }
    // Unreachable for a validated table; clamp defensively
    f64::from(anchors[anchors.len() - 1].0)
}
