//! # Categorical Labels
//!
//! Human-readable labels derived from percentile ranks.
//!
//! - `tiers` - six-band percentile tier labels with display colors
//! - `roles` - player role from the usage x efficiency grid
//! - `context` - game margin and AP-ranking context labels

pub mod context;
pub mod roles;
pub mod tiers;

pub use context::{game_context, margin_context, performance_label, MarginContext};
pub use roles::{Role, RoleGrid, STANDARD_ROLE_GRID};
pub use tiers::{tier_color, Tier, TierBand, TierTable, DEFAULT_TIER_COLOR, STANDARD_TIERS};
