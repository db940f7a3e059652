//! # Player Roles
//!
//! Classifies a player into one of eight named roles from the pair of
//! (usage percentile, efficiency percentile). The grid is a 3x3 partition
//! (usage high/moderate/low x efficiency high/average/low) with the
//! low-usage/average and low-usage/low cells merged into "Limited Role".

use serde::{Deserialize, Serialize};

/// Player role label from the usage x efficiency grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// High usage, high efficiency
    Star,
    /// High usage, average efficiency
    HighVolumeScorer,
    /// High usage, low efficiency
    InefficientVolume,
    /// Moderate usage, high efficiency
    EfficientRolePlayer,
    /// Moderate usage, average efficiency
    SolidContributor,
    /// Moderate usage, low efficiency
    StrugglingScorer,
    /// Low usage, high efficiency
    Specialist,
    /// Low usage, average or low efficiency
    LimitedRole,
    /// Either percentile missing
    Unknown,
}

impl Role {
    pub fn display(&self) -> &'static str {
        match self {
            Role::Star => "Star",
            Role::HighVolumeScorer => "High Volume Scorer",
            Role::InefficientVolume => "Inefficient Volume",
            Role::EfficientRolePlayer => "Efficient Role Player",
            Role::SolidContributor => "Solid Contributor",
            Role::StrugglingScorer => "Struggling Scorer",
            Role::Specialist => "Specialist",
            Role::LimitedRole => "Limited Role",
            Role::Unknown => "Unknown",
        }
    }

    /// Short description for tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Star => "High usage, high efficiency",
            Role::HighVolumeScorer => "High usage, average efficiency",
            Role::InefficientVolume => "High usage, low efficiency",
            Role::EfficientRolePlayer => "Moderate usage, high efficiency",
            Role::SolidContributor => "Moderate usage, average efficiency",
            Role::StrugglingScorer => "Moderate usage, low efficiency",
            Role::Specialist => "Low usage, high efficiency",
            Role::LimitedRole => "Low usage, average or low efficiency",
            Role::Unknown => "Insufficient data",
        }
    }

    /// Display color for the dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            Role::Star => "#1a9850",
            Role::HighVolumeScorer => "#91cf60",
            Role::InefficientVolume => "#fdae61",
            Role::EfficientRolePlayer => "#66bd63",
            Role::SolidContributor => "#d9d9d9",
            Role::StrugglingScorer => "#f46d43",
            Role::Specialist => "#a6d96a",
            Role::LimitedRole => "#bdbdbd",
            Role::Unknown => "#d9d9d9",
        }
    }
}

/// Threshold grid over (usage percentile, efficiency percentile).
///
/// Band lower edges are inclusive: usage exactly 75.0 is "high" usage.
#[derive(Debug, Clone, Copy)]
pub struct RoleGrid {
    /// Usage at or above this is "high"
    pub usage_high: f64,
    /// Usage at or above this (below high) is "moderate"; below is "low"
    pub usage_moderate: f64,
    /// Efficiency at or above this is "high"
    pub efficiency_high: f64,
    /// Efficiency at or above this (below high) is "average"; below is "low"
    pub efficiency_average: f64,
}

/// The production grid: usage split at 75/40, efficiency at 60/40.
pub const STANDARD_ROLE_GRID: RoleGrid = RoleGrid {
    usage_high: 75.0,
    usage_moderate: 40.0,
    efficiency_high: 60.0,
    efficiency_average: 40.0,
};

impl RoleGrid {
    pub fn standard() -> &'static RoleGrid {
        &STANDARD_ROLE_GRID
    }

    /// Classify a (usage, efficiency) percentile pair.
    pub fn classify(&self, usage: Option<f64>, efficiency: Option<f64>) -> Role {
        let (usg, eff) = match (usage, efficiency) {
            (Some(u), Some(e)) if !u.is_nan() && !e.is_nan() => (u, e),
            _ => return Role::Unknown,
        };

        if usg >= self.usage_high {
            if eff >= self.efficiency_high {
                Role::Star
            } else if eff >= self.efficiency_average {
                Role::HighVolumeScorer
            } else {
                Role::InefficientVolume
            }
        } else if usg >= self.usage_moderate {
            if eff >= self.efficiency_high {
                Role::EfficientRolePlayer
            } else if eff >= self.efficiency_average {
                Role::SolidContributor
            } else {
                Role::StrugglingScorer
            }
        } else if eff >= self.efficiency_high {
            Role::Specialist
        } else {
            Role::LimitedRole
        }
    }
}
