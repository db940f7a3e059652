//! # Batch Enrichment
//!
//! Adds `{metric}_pctile` and `{metric}_tier` columns to a frame by
//! resolving every row against a [`BenchmarkStore`]. Rows are independent,
//! so the pass runs row-parallel; correctness does not depend on ordering.
//!
//! Missing cells and absent benchmarks produce missing/"Unknown" outputs
//! and never abort the batch. The only hard failures are text in a numeric
//! metric column (`InvalidInput`) - sparse data degrades, corrupt data does
//! not pass silently.

use rayon::prelude::*;

use crate::bench::breakpoints::CATEGORY_ALL;
use crate::bench::store::BenchmarkStore;
use crate::error::Result;
use crate::frame::Frame;
use crate::labels::roles::RoleGrid;
use crate::labels::tiers::TierTable;

/// Resolve percentile and tier columns for each requested metric.
///
/// Metrics without a matching column in `frame` are silently skipped.
/// With a `category_column`, rows resolve through the player lookup using
/// that column's value as the position (falling back to `"all"`); without
/// one, rows resolve through the team lookup.
pub fn add_percentile_columns(
    frame: &mut Frame,
    store: &BenchmarkStore,
    metrics: &[&str],
    category_column: Option<&str>,
    tiers: &TierTable,
) -> Result<()> {
    let present: Vec<(String, String, String)> = metrics
        .iter()
        .filter(|&&m| {
            let has = frame.has_column(m);
            if !has {
                log::debug!("metric {} not in dataset, skipping", m);
            }
            has
        })
        .map(|&m| (m.to_string(), format!("{}_pctile", m), format!("{}_tier", m)))
        .collect();

    for (_, pctile_col, tier_col) in &present {
        frame.ensure_column(pctile_col);
        frame.ensure_column(tier_col);
    }

    frame.rows_mut().par_iter_mut().try_for_each(|rec| -> Result<()> {
        let category = match category_column {
            Some(col) => rec.text(col).unwrap_or(CATEGORY_ALL).to_string(),
            None => CATEGORY_ALL.to_string(),
        };

        for (metric, pctile_col, tier_col) in &present {
            let value = rec.number(metric)?;
            let percentile = value.and_then(|v| {
                if category_column.is_some() {
                    store.player_percentile(metric, v, &category)
                } else {
                    store.team_percentile(metric, v)
                }
            });

            rec.set_opt_number(pctile_col, percentile);
            rec.set_text(tier_col, tiers.classify(percentile).display());
        }
        Ok(())
    })?;

    log::info!(
        "enriched {} rows with {} metric percentile columns",
        frame.len(),
        present.len()
    );
    Ok(())
}

/// Add a `player_role` column from usage and efficiency percentile columns.
///
/// When either column is absent from the frame every row is labeled
/// "Unknown" (role labeling is additive, never a failure).
pub fn add_player_roles(
    frame: &mut Frame,
    usage_column: &str,
    efficiency_column: &str,
    grid: &RoleGrid,
) -> Result<()> {
    frame.ensure_column("player_role");

    if !frame.has_column(usage_column) || !frame.has_column(efficiency_column) {
        log::debug!(
            "role columns {}/{} not in dataset, labeling all rows Unknown",
            usage_column,
            efficiency_column
        );
        for rec in frame.rows_mut() {
            rec.set_text("player_role", "Unknown");
        }
        return Ok(());
    }

    frame.rows_mut().par_iter_mut().try_for_each(|rec| -> Result<()> {
        let usage = rec.number(usage_column)?;
        let efficiency = rec.number(efficiency_column)?;
        let role = grid.classify(usage, efficiency);
        rec.set_text("player_role", role.display());
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::store::BenchmarkRow;
    use crate::frame::Record;

    const TS_VALUES: [f64; 10] = [0.40, 0.45, 0.48, 0.50, 0.52, 0.55, 0.60, 0.62, 0.65, 0.70];

    fn team_store() -> BenchmarkStore {
        BenchmarkStore::build(
            &[BenchmarkRow::from_population("ts_pct", CATEGORY_ALL, &TS_VALUES)],
            &[],
        )
        .unwrap()
    }

    fn frame_with(values: &[Option<f64>]) -> Frame {
        let mut frame = Frame::with_columns(vec!["team".to_string(), "ts_pct".to_string()]);
        for (i, v) in values.iter().enumerate() {
            let mut rec = Record::new();
            rec.set_text("team", &format!("Team {}", i));
            rec.set_opt_number("ts_pct", *v);
            frame.push_row(rec);
        }
        frame
    }

    #[test]
    fn test_enrich_team_rows() {
        let store = team_store();
        let mut frame = frame_with(&[Some(0.535), None, Some(0.10)]);

        add_percentile_columns(&mut frame, &store, &["ts_pct"], None, TierTable::standard())
            .unwrap();

        assert!(frame.has_column("ts_pct_pctile"));
        assert!(frame.has_column("ts_pct_tier"));

        let rank = frame.rows()[0].number("ts_pct_pctile").unwrap().unwrap();
        assert!((rank - 50.0).abs() < 1e-6);
        assert_eq!(frame.rows()[0].text("ts_pct_tier"), Some("Average"));

        // Missing value: missing percentile, Unknown tier, batch completes
        assert_eq!(frame.rows()[1].number("ts_pct_pctile").unwrap(), None);
        assert_eq!(frame.rows()[1].text("ts_pct_tier"), Some("Unknown"));

        // Far below the table: clamped to the 5th percentile anchor
        assert_eq!(
            frame.rows()[2].number("ts_pct_pctile").unwrap(),
            Some(5.0)
        );
    }

    #[test]
    fn test_absent_metric_silently_skipped() {
        let store = team_store();
        let mut frame = frame_with(&[Some(0.5)]);

        add_percentile_columns(
            &mut frame,
            &store,
            &["ts_pct", "ortg"],
            None,
            TierTable::standard(),
        )
        .unwrap();

        assert!(frame.has_column("ts_pct_pctile"));
        assert!(!frame.has_column("ortg_pctile"));
    }

    #[test]
    fn test_text_in_metric_column_is_hard_error() {
        let store = team_store();
        let mut frame = frame_with(&[Some(0.5)]);
        frame.rows_mut()[0].set_text("ts_pct", "not-a-number");

        let err =
            add_percentile_columns(&mut frame, &store, &["ts_pct"], None, TierTable::standard())
                .unwrap_err();
        assert!(matches!(err, crate::error::CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_enrich_with_position_category() {
        let store = BenchmarkStore::build(
            &[],
            &[
                BenchmarkRow::from_population("ts_pct", CATEGORY_ALL, &TS_VALUES),
                BenchmarkRow::from_population("ts_pct", "Guard", &[0.42, 0.46, 0.50, 0.54, 0.58]),
            ],
        )
        .unwrap();

        let mut frame = frame_with(&[Some(0.55), Some(0.55)]);
        frame.ensure_column("position_group");
        frame.rows_mut()[0].set_text("position_group", "Guard");
        frame.rows_mut()[1].set_text("position_group", "Center");

        add_percentile_columns(
            &mut frame,
            &store,
            &["ts_pct"],
            Some("position_group"),
            TierTable::standard(),
        )
        .unwrap();

        let guard_rank = frame.rows()[0].number("ts_pct_pctile").unwrap().unwrap();
        let center_rank = frame.rows()[1].number("ts_pct_pctile").unwrap().unwrap();
        // Guard resolves against its own population; Center falls back to all
        assert_ne!(guard_rank, center_rank);
    }

    #[test]
    fn test_add_player_roles() {
        let mut frame = Frame::with_columns(vec![
            "usg_pct_pctile".to_string(),
            "ts_pct_pctile".to_string(),
        ]);
        let mut star = Record::new();
        star.set_number("usg_pct_pctile", 80.0);
        star.set_number("ts_pct_pctile", 65.0);
        frame.push_row(star);
        let mut specialist = Record::new();
        specialist.set_number("usg_pct_pctile", 30.0);
        specialist.set_number("ts_pct_pctile", 65.0);
        frame.push_row(specialist);
        let mut incomplete = Record::new();
        incomplete.set_number("usg_pct_pctile", 50.0);
        frame.push_row(incomplete);

        add_player_roles(
            &mut frame,
            "usg_pct_pctile",
            "ts_pct_pctile",
            RoleGrid::standard(),
        )
        .unwrap();

        assert_eq!(frame.rows()[0].text("player_role"), Some("Star"));
        assert_eq!(frame.rows()[1].text("player_role"), Some("Specialist"));
        assert_eq!(frame.rows()[2].text("player_role"), Some("Unknown"));
    }

    #[test]
    fn test_roles_without_columns() {
        let mut frame = frame_with(&[Some(0.5)]);
        add_player_roles(
            &mut frame,
            "usg_pct_pctile",
            "ts_pct_pctile",
            RoleGrid::standard(),
        )
        .unwrap();
        assert_eq!(frame.rows()[0].text("player_role"), Some("Unknown"));
    }
}
