//! # Percentile Tiers
//!
//! Fixed six-band classification of a percentile rank, plus display colors
//! for the reporting dashboard. Bands cover [0, 100] with no gaps: a rank
//! exactly on a boundary belongs to the HIGHER band (90.0 is Elite, not
//! Great), which keeps tier labels stable across runs for values sitting
//! on a breakpoint.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default display color for unrecognized labels.
pub const DEFAULT_TIER_COLOR: &str = "#d9d9d9";

/// Percentile tier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Elite,
    Great,
    AboveAverage,
    Average,
    BelowAverage,
    Low,
    /// No percentile available.
    Unknown,
}

impl Tier {
    /// Display label for reporting output.
    pub fn display(&self) -> &'static str {
        match self {
            Tier::Elite => "Elite",
            Tier::Great => "Great",
            Tier::AboveAverage => "Above Average",
            Tier::Average => "Average",
            Tier::BelowAverage => "Below Average",
            Tier::Low => "Low",
            Tier::Unknown => "Unknown",
        }
    }

    /// Display color (RdYlGn-style ramp used by the dashboard).
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Elite => "#1a9850",        // Dark Green
            Tier::Great => "#91cf60",        // Light Green
            Tier::AboveAverage => "#d9ef8b", // Yellow-Green
            Tier::Average => "#d9d9d9",      // Gray
            Tier::BelowAverage => "#fdae61", // Light Orange
            Tier::Low => "#d73027",          // Red
            Tier::Unknown => DEFAULT_TIER_COLOR,
        }
    }
}

/// Display color for a tier label string; gray for anything unrecognized.
pub fn tier_color(label: &str) -> &'static str {
    match label {
        "Elite" => Tier::Elite.color(),
        "Great" => Tier::Great.color(),
        "Above Average" => Tier::AboveAverage.color(),
        "Average" => Tier::Average.color(),
        "Below Average" => Tier::BelowAverage.color(),
        "Low" => Tier::Low.color(),
        _ => DEFAULT_TIER_COLOR,
    }
}

/// One band: ranks in `[low, high)` (`[low, high]` for the top band).
#[derive(Debug, Clone, Copy)]
pub struct TierBand {
    pub tier: Tier,
    pub low: f64,
    pub high: f64,
}

/// Ordered tier bands, highest first. Injected into classification so tests
/// can substitute an alternate table without touching globals.
#[derive(Debug, Clone)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

/// The production band layout.
pub static STANDARD_TIERS: Lazy<TierTable> = Lazy::new(|| {
    TierTable::new(vec![
        TierBand { tier: Tier::Elite, low: 90.0, high: 100.0 },
        TierBand { tier: Tier::Great, low: 75.0, high: 90.0 },
        TierBand { tier: Tier::AboveAverage, low: 60.0, high: 75.0 },
        TierBand { tier: Tier::Average, low: 40.0, high: 60.0 },
        TierBand { tier: Tier::BelowAverage, low: 25.0, high: 40.0 },
        TierBand { tier: Tier::Low, low: 0.0, high: 25.0 },
    ])
});

impl TierTable {
    /// Bands must be ordered highest-first; classification scans in order.
    pub fn new(bands: Vec<TierBand>) -> Self {
        Self { bands }
    }

    pub fn standard() -> &'static TierTable {
        &STANDARD_TIERS
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }

    /// Classify a percentile rank; `None` classifies as [`Tier::Unknown`].
    ///
    /// Scanning highest-first with a `rank >= low` membership test makes
    /// boundary ranks land in the higher band.
    pub fn classify(&self, percentile: Option<f64>) -> Tier {
        let rank = match percentile {
            Some(r) if !r.is_nan() => r,
            _ => return Tier::Unknown,
        };
        for band in &self.bands {
            if rank >= band.low {
                return band.tier;
            }
        }
        // Below every band's low edge (negative rank): lowest band
        self.bands.last().map(|b| b.tier).unwrap_or(Tier::Unknown)
    }
}
