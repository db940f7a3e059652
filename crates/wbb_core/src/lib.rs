//! # wbb_core - Women's College Basketball Analytics Core
//!
//! Benchmark and percentile engine for box-score-derived basketball
//! metrics: builds reference distributions from a season's population of
//! team/player observations, maps metric values to percentile ranks, and
//! labels results into dashboard tiers and player roles.
//!
//! ## Features
//! - Percentile anchor tables with linear interpolation and edge clamping
//! - Position-partitioned benchmarks with graceful fallback to the overall
//!   population
//! - Direction inversion for metrics where lower raw values are better
//! - Row-parallel dataset enrichment producing `*_pctile`/`*_tier` columns
//! - All missing-data conditions degrade to undefined results; only corrupt
//!   benchmark tables and non-numeric metric cells fail hard

pub mod bench;
pub mod error;
pub mod frame;
pub mod labels;
pub mod metrics;

// Re-export the benchmark engine surface
pub use bench::{
    add_percentile_columns, add_player_roles, resolve_percentile, BenchmarkRow, BenchmarkStore,
    BreakpointTable, InvertSet, CATEGORY_ALL, LOWER_IS_BETTER, PERCENTILE_BREAKPOINTS,
    PLAYER_METRICS, TEAM_METRICS,
};
pub use error::{CoreError, Result};
pub use frame::{Field, Frame, Record};
pub use labels::{Role, RoleGrid, Tier, TierTable};
pub use metrics::PositionGroup;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
