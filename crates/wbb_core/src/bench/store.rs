//! # Benchmark Store
//!
//! Immutable keyed collection of [`BreakpointTable`]s, built once from team
//! and player benchmark rows. Player lookups fall back from their position
//! category to the overall `"all"` population, so sparse position groups
//! degrade gracefully instead of failing.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bench::breakpoints::{BreakpointTable, CATEGORY_ALL, PERCENTILE_BREAKPOINTS};
use crate::bench::resolver::{resolve_percentile, InvertSet, LOWER_IS_BETTER};
use crate::error::Result;
use crate::metrics::position::PositionGroup;

fn default_position() -> String {
    CATEGORY_ALL.to_string()
}

/// One persisted benchmark table row: a metric's population summary plus its
/// percentile anchors. This is the wire schema for benchmark CSV files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub metric: String,
    #[serde(default = "default_position")]
    pub position: String,
    pub count: u32,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub p5: Option<f64>,
    pub p10: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
    pub p95: Option<f64>,
}

impl BenchmarkRow {
    /// Anchor pairs in standard percentile order.
    pub fn anchors(&self) -> [(u8, Option<f64>); 7] {
        [
            (5, self.p5),
            (10, self.p10),
            (25, self.p25),
            (50, self.p50),
            (75, self.p75),
            (90, self.p90),
            (95, self.p95),
        ]
    }

    /// Flatten a built table back into a persistable row.
    pub fn from_table(table: &BreakpointTable) -> Self {
        Self {
            metric: table.metric().to_string(),
            position: table.category().to_string(),
            count: table.count(),
            mean: table.mean(),
            std: table.std(),
            p5: table.value_at(5),
            p10: table.value_at(10),
            p25: table.value_at(25),
            p50: table.value_at(50),
            p75: table.value_at(75),
            p90: table.value_at(90),
            p95: table.value_at(95),
        }
    }

    /// Build a row directly from a reference population.
    pub fn from_population(metric: &str, position: &str, values: &[f64]) -> Self {
        Self::from_table(&BreakpointTable::from_population(
            metric,
            position,
            values,
            &PERCENTILE_BREAKPOINTS,
        ))
    }
}

/// Read-only percentile lookup over all built benchmark tables.
///
/// Keys are (metric, category). Team tables always live under the `"all"`
/// category; player tables live under their position label with an `"all"`
/// row alongside.
#[derive(Debug, Clone)]
pub struct BenchmarkStore {
    team: FxHashMap<(String, String), BreakpointTable>,
    player: FxHashMap<(String, String), BreakpointTable>,
    inverts: InvertSet,
}

impl BenchmarkStore {
    /// Index benchmark rows into resolvable tables.
    ///
    /// Every table is validated up front: anchors that decrease as the
    /// percentile rises mean the upstream table is corrupt, and the whole
    /// build fails loudly rather than quietly producing wrong percentiles.
    pub fn build(team_rows: &[BenchmarkRow], player_rows: &[BenchmarkRow]) -> Result<Self> {
        Self::build_with_inverts(team_rows, player_rows, LOWER_IS_BETTER.clone())
    }

    /// [`build`](Self::build) with a caller-supplied inversion set.
    pub fn build_with_inverts(
        team_rows: &[BenchmarkRow],
        player_rows: &[BenchmarkRow],
        inverts: InvertSet,
    ) -> Result<Self> {
        let mut team = FxHashMap::default();
        for row in team_rows {
            // Team benchmarks are never position-partitioned
            let table = BreakpointTable::from_anchors(
                &row.metric,
                CATEGORY_ALL,
                row.count,
                row.mean,
                row.std,
                &row.anchors(),
            );
            table.validate()?;
            team.insert((row.metric.clone(), CATEGORY_ALL.to_string()), table);
        }

        let mut player = FxHashMap::default();
        for row in player_rows {
            let table = BreakpointTable::from_anchors(
                &row.metric,
                &row.position,
                row.count,
                row.mean,
                row.std,
                &row.anchors(),
            );
            table.validate()?;
            player.insert((row.metric.clone(), row.position.clone()), table);
        }

        log::info!(
            "benchmark store built: {} team tables, {} player tables",
            team.len(),
            player.len()
        );

        Ok(Self {
            team,
            player,
            inverts,
        })
    }

    /// Percentile rank for a team metric value, or `None` when the metric
    /// has no benchmark.
    pub fn team_percentile(&self, metric: &str, value: f64) -> Option<f64> {
        let table = self.team.get(&(metric.to_string(), CATEGORY_ALL.to_string()))?;
        resolve_percentile(value, table, self.inverts.contains(metric))
    }

    /// Percentile rank for a player metric value against the position's
    /// population, falling back to the overall population when the position
    /// has no table of its own.
    pub fn player_percentile(&self, metric: &str, value: f64, position: &str) -> Option<f64> {
        let category = if position == CATEGORY_ALL {
            CATEGORY_ALL.to_string()
        } else {
            PositionGroup::from_name(position).label().to_string()
        };

        let key = (metric.to_string(), category);
        let table = match self.player.get(&key) {
            Some(table) => table,
            None => {
                if key.1 != CATEGORY_ALL {
                    log::debug!(
                        "no {} benchmark for position {}, falling back to all",
                        metric,
                        key.1
                    );
                }
                self.player
                    .get(&(metric.to_string(), CATEGORY_ALL.to_string()))?
            }
        };
        resolve_percentile(value, table, self.inverts.contains(metric))
    }

    /// Direct table access (team category is `"all"`).
    pub fn team_table(&self, metric: &str) -> Option<&BreakpointTable> {
        self.team.get(&(metric.to_string(), CATEGORY_ALL.to_string()))
    }

    pub fn player_table(&self, metric: &str, category: &str) -> Option<&BreakpointTable> {
        self.player.get(&(metric.to_string(), category.to_string()))
    }

    pub fn is_inverted(&self, metric: &str) -> bool {
        self.inverts.contains(metric)
    }

    pub fn len(&self) -> usize {
        self.team.len() + self.player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_empty() && self.player.is_empty()
    }
}
