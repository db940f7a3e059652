//! # Metric Calculations
//!
//! Derived metric formulas and their batch application over a frame.
//!
//! - `formulas` - pure per-value formulas (possessions, eFG%, TS%, ratings)
//! - `batch` - column-wise computation over box-score frames
//! - `position` - position group normalization

pub mod batch;
pub mod formulas;
pub mod position;

pub use batch::{
    add_player_metrics, add_position_group, add_team_metrics, parse_minutes, usage_for_row,
    PLAYER_DERIVED_COLUMNS, TEAM_DERIVED_COLUMNS,
};
pub use formulas::*;
pub use position::{PositionGroup, BENCHMARKED_POSITIONS};
