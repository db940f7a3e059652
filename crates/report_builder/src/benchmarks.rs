//! Benchmark table construction and CSV persistence.
//!
//! Reduces a season's box-score frame to one `BenchmarkRow` per metric (and
//! per position group for players), applying the qualification filters that
//! keep garbage-time lines out of the reference populations.

use anyhow::{Context, Result};
use std::path::Path;
use wbb_core::bench::{
    BenchmarkRow, CATEGORY_ALL, MIN_PLAYER_FGA, MIN_PLAYER_MINUTES, MIN_POSITION_SAMPLE,
    SHOOTING_METRICS,
};
use wbb_core::metrics::BENCHMARKED_POSITIONS;
use wbb_core::{Frame, Record};

/// Build team benchmark rows: one per metric present in the frame, over the
/// whole (unpartitioned) population.
pub fn build_team_benchmarks(frame: &Frame, metrics: &[&str]) -> Vec<BenchmarkRow> {
    let mut rows = Vec::new();
    for &metric in metrics {
        if !frame.has_column(metric) {
            log::warn!("team metric {} not in data, skipping", metric);
            continue;
        }
        let values = frame.numeric_column(metric);
        rows.push(BenchmarkRow::from_population(metric, CATEGORY_ALL, &values));
    }
    rows
}

/// Build player benchmark rows: an `"all"` row per metric plus rows per
/// position group with enough qualified players.
///
/// Expects `minutes` (decimal) and `position_group` columns; see
/// `wbb_core::metrics::{add_player_metrics, add_position_group}`.
pub fn build_player_benchmarks(frame: &Frame, metrics: &[&str]) -> Vec<BenchmarkRow> {
    let qualified: Vec<&Record> = frame
        .rows()
        .iter()
        .filter(|r| r.coerced_number("minutes").unwrap_or(0.0) >= MIN_PLAYER_MINUTES)
        .collect();

    log::info!(
        "{} of {} player rows qualify (>= {} minutes)",
        qualified.len(),
        frame.len(),
        MIN_PLAYER_MINUTES
    );

    let has_fga = frame.has_column("field_goals_attempted");
    let mut rows = Vec::new();

    for &metric in metrics {
        if !frame.has_column(metric) {
            log::warn!("player metric {} not in data, skipping", metric);
            continue;
        }
        let values = metric_population(&qualified, metric, has_fga);
        rows.push(BenchmarkRow::from_population(metric, CATEGORY_ALL, &values));
    }

    for position in BENCHMARKED_POSITIONS {
        let pos_rows: Vec<&Record> = qualified
            .iter()
            .copied()
            .filter(|r| r.text("position_group") == Some(position.label()))
            .collect();

        if pos_rows.len() < MIN_POSITION_SAMPLE {
            log::info!(
                "only {} qualified {} rows (< {}), leaving position to the overall fallback",
                pos_rows.len(),
                position.label(),
                MIN_POSITION_SAMPLE
            );
            continue;
        }

        for &metric in metrics {
            if !frame.has_column(metric) {
                continue;
            }
            let values = metric_population(&pos_rows, metric, has_fga);
            rows.push(BenchmarkRow::from_population(
                metric,
                position.label(),
                &values,
            ));
        }
    }

    rows
}

/// Collect a metric's population, applying the FGA volume filter to
/// shooting metrics when attempt data is available.
fn metric_population(rows: &[&Record], metric: &str, has_fga: bool) -> Vec<f64> {
    let needs_volume = SHOOTING_METRICS.contains(&metric) && has_fga;
    rows.iter()
        .filter(|r| {
            !needs_volume
                || r.coerced_number("field_goals_attempted").unwrap_or(0.0) >= MIN_PLAYER_FGA
        })
        .filter_map(|r| r.coerced_number(metric))
        .collect()
}

/// Save benchmark rows to a CSV file.
pub fn save_benchmark_csv(rows: &[BenchmarkRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create benchmark CSV: {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("saved {} benchmark rows to {}", rows.len(), path.display());
    Ok(())
}

/// Load benchmark rows from a CSV file.
pub fn load_benchmark_csv(path: &Path) -> Result<Vec<BenchmarkRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open benchmark CSV: {}", path.display()))?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: BenchmarkRow =
            result.with_context(|| format!("bad benchmark row in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Benchmark file name for a level ("team"/"player") and season suffix.
pub fn benchmark_file_name(level: &str, suffix: &str) -> String {
    format!("d1_{}_benchmarks_{}.csv", level, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_frame() -> Frame {
        let mut frame = Frame::with_columns(vec![
            "minutes".to_string(),
            "field_goals_attempted".to_string(),
            "ts_pct".to_string(),
            "position_group".to_string(),
        ]);
        // 60 qualified guards, 10 centers, plus low-minute noise
        for i in 0..60 {
            let mut rec = Record::new();
            rec.set_number("minutes", 25.0);
            rec.set_number("field_goals_attempted", 9.0);
            rec.set_number("ts_pct", 0.45 + (i as f64) * 0.002);
            rec.set_text("position_group", "Guard");
            frame.push_row(rec);
        }
        for i in 0..10 {
            let mut rec = Record::new();
            rec.set_number("minutes", 22.0);
            rec.set_number("field_goals_attempted", 7.0);
            rec.set_number("ts_pct", 0.50 + (i as f64) * 0.005);
            rec.set_text("position_group", "Center");
            frame.push_row(rec);
        }
        let mut bench_rider = Record::new();
        bench_rider.set_number("minutes", 3.0);
        bench_rider.set_number("ts_pct", 0.99);
        bench_rider.set_text("position_group", "Guard");
        frame.push_row(bench_rider);
        frame
    }

    #[test]
    fn test_team_benchmarks_skip_absent_metrics() {
        let mut frame = Frame::with_columns(vec!["efg_pct".to_string()]);
        let mut rec = Record::new();
        rec.set_number("efg_pct", 0.5);
        frame.push_row(rec);

        let rows = build_team_benchmarks(&frame, &["efg_pct", "ortg"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric, "efg_pct");
        assert_eq!(rows[0].position, "all");
    }

    #[test]
    fn test_player_benchmarks_positions_and_filters() {
        let frame = player_frame();
        let rows = build_player_benchmarks(&frame, &["ts_pct"]);

        // One "all" row plus Guard (60 qualified); Center (10) is below the
        // position sample floor
        let categories: Vec<&str> = rows.iter().map(|r| r.position.as_str()).collect();
        assert!(categories.contains(&"all"));
        assert!(categories.contains(&"Guard"));
        assert!(!categories.contains(&"Center"));

        // The 3-minute 0.99 line never enters the population
        let all_row = rows.iter().find(|r| r.position == "all").unwrap();
        assert_eq!(all_row.count, 70);
        assert!(all_row.p95.unwrap() < 0.99);
    }

    #[test]
    fn test_benchmark_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");

        let population = [0.40, 0.45, 0.48, 0.50, 0.52, 0.55, 0.60, 0.62, 0.65, 0.70];
        let rows = vec![
            BenchmarkRow::from_population("ts_pct", CATEGORY_ALL, &population),
            BenchmarkRow::from_population("efg_pct", "Guard", &population),
            // Empty population persists as a count-0 row with blank anchors
            BenchmarkRow::from_population("ortg", CATEGORY_ALL, &[]),
        ];

        save_benchmark_csv(&rows, &path).unwrap();
        let back = load_benchmark_csv(&path).unwrap();

        assert_eq!(back.len(), 3);
        assert_eq!(back[0].metric, "ts_pct");
        assert_eq!(back[0].count, 10);
        assert!((back[0].p50.unwrap() - rows[0].p50.unwrap()).abs() < 1e-9);
        assert_eq!(back[1].position, "Guard");
        assert_eq!(back[2].count, 0);
        assert_eq!(back[2].p50, None);
    }
}
