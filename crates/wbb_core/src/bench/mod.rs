//! # Benchmark & Percentile Engine
//!
//! Builds reference distributions from a population of team/player
//! observations and maps arbitrary metric values to percentile ranks.
//!
//! - `breakpoints` - percentile anchor tables built from populations
//! - `resolver` - value -> percentile interpolation with direction inversion
//! - `store` - keyed table collection with position fallback
//! - `enrich` - row-parallel column enrichment over a frame

pub mod breakpoints;
pub mod enrich;
pub mod resolver;
pub mod store;

pub use breakpoints::{BreakpointTable, CATEGORY_ALL, PERCENTILE_BREAKPOINTS};
pub use enrich::{add_percentile_columns, add_player_roles};
pub use resolver::{resolve_percentile, InvertSet, LOWER_IS_BETTER};
pub use store::{BenchmarkRow, BenchmarkStore};

/// Team metrics benchmarked by the standard pipeline.
pub const TEAM_METRICS: [&str; 12] = [
    "efg_pct", "ts_pct", "tov_pct", "ftr", "fg3_rate", "fg2_pct", "fg3_pct", "ft_pct", "ast_pct",
    "ast_tov", "ortg", "pace",
];

/// Player metrics benchmarked by the standard pipeline.
pub const PLAYER_METRICS: [&str; 8] = [
    "efg_pct", "ts_pct", "fg3_pct", "ft_pct", "pts_per40", "reb_per40", "ast_per40", "ast_tov",
];

/// Shooting metrics that require a minimum attempt volume to qualify.
pub const SHOOTING_METRICS: [&str; 3] = ["efg_pct", "ts_pct", "fg3_pct"];

/// Minimum minutes per game for a player row to enter a benchmark population.
pub const MIN_PLAYER_MINUTES: f64 = 10.0;

/// Minimum field goal attempts for shooting-metric populations.
pub const MIN_PLAYER_FGA: f64 = 5.0;

/// Minimum qualified rows for a position-specific population; smaller groups
/// are left to the `"all"` fallback.
pub const MIN_POSITION_SAMPLE: usize = 50;
