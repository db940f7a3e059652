//! Position group normalization.
//!
//! Roster feeds carry free-text position names ("Point Guard", "F", "Not
//! Available", ...). Benchmarks are partitioned by three coarse groups;
//! anything unrecognized lands in `Other` and resolves against the overall
//! population.

use serde::{Deserialize, Serialize};

/// Coarse position group used as a benchmark category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Guard,
    Forward,
    Center,
    Other,
}

impl PositionGroup {
    /// Normalize a free-text position name.
    ///
    /// Substring match, case-insensitive: "Point Guard" and "guard" both
    /// map to `Guard`. Unrecognized names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        let pos = name.trim().to_ascii_lowercase();
        if pos.contains("guard") {
            PositionGroup::Guard
        } else if pos.contains("forward") {
            PositionGroup::Forward
        } else if pos.contains("center") {
            PositionGroup::Center
        } else {
            PositionGroup::Other
        }
    }

    /// Benchmark category label for this group.
    pub fn label(&self) -> &'static str {
        match self {
            PositionGroup::Guard => "Guard",
            PositionGroup::Forward => "Forward",
            PositionGroup::Center => "Center",
            PositionGroup::Other => "Other",
        }
    }
}

/// Position groups that get their own benchmark populations.
pub const BENCHMARKED_POSITIONS: [PositionGroup; 3] = [
    PositionGroup::Guard,
    PositionGroup::Forward,
    PositionGroup::Center,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guard_variants() {
        assert_eq!(PositionGroup::from_name("Guard"), PositionGroup::Guard);
        assert_eq!(PositionGroup::from_name("Point Guard"), PositionGroup::Guard);
        assert_eq!(
            PositionGroup::from_name("shooting guard"),
            PositionGroup::Guard
        );
    }

    #[test]
    fn test_normalize_frontcourt() {
        assert_eq!(
            PositionGroup::from_name("Power Forward"),
            PositionGroup::Forward
        );
        assert_eq!(PositionGroup::from_name("CENTER"), PositionGroup::Center);
    }

    #[test]
    fn test_normalize_unknown() {
        assert_eq!(PositionGroup::from_name("Athlete"), PositionGroup::Other);
        assert_eq!(
            PositionGroup::from_name("Not Available"),
            PositionGroup::Other
        );
        assert_eq!(PositionGroup::from_name(""), PositionGroup::Other);
    }
}
