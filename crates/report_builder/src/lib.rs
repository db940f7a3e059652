//! Report Builder - Box Score CSV -> Benchmark & Enrichment Pipeline
//!
//! Turns a season of team/player box-score CSVs into:
//! 1. benchmark tables (percentile anchors per metric, per position group)
//! 2. enriched report datasets with `*_pctile`, `*_tier` and `player_role`
//!    columns for the dashboard
//!
//! All statistics live in `wbb_core`; this crate is the file-facing glue.

pub mod benchmarks;
pub mod box_scores;

pub use benchmarks::{
    benchmark_file_name, build_player_benchmarks, build_team_benchmarks, load_benchmark_csv,
    save_benchmark_csv,
};
pub use box_scores::{read_frame_csv, write_frame_csv};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wbb_core::bench::{PLAYER_METRICS, TEAM_METRICS};
use wbb_core::labels::{RoleGrid, TierTable};
use wbb_core::metrics::{add_player_metrics, add_position_group, add_team_metrics};
use wbb_core::{add_percentile_columns, add_player_roles, BenchmarkStore};

/// Player metrics benchmarked by the pipeline: the core list plus usage,
/// which only exists when the feed joins team totals in upstream.
pub const PLAYER_PIPELINE_METRICS: [&str; 9] = [
    "efg_pct", "ts_pct", "fg3_pct", "ft_pct", "pts_per40", "reb_per40", "ast_per40", "ast_tov",
    "usg_pct",
];

/// Free-text position column in the player box-score feed.
pub const POSITION_SOURCE_COLUMN: &str = "athlete_position_name";

/// Summary of one pipeline run, written as a JSON sidecar on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// RFC 3339 build timestamp
    pub generated_at: String,
    /// Season label the artifact was built for
    pub season: String,
    /// Input rows consumed
    pub input_rows: usize,
    /// Benchmark or enriched rows produced
    pub output_rows: usize,
}

impl RunMetadata {
    pub fn now(season: &str, input_rows: usize, output_rows: usize) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            season: season.to_string(),
            input_rows,
            output_rows,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write metadata: {}", path.display()))?;
        Ok(())
    }
}

/// Build team (and optionally player) benchmark CSVs from box-score CSVs.
///
/// Returns (team row count, player row count).
pub fn build_benchmark_files(
    team_box: &Path,
    player_box: Option<&Path>,
    out_dir: &Path,
    suffix: &str,
) -> Result<(usize, usize)> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir: {}", out_dir.display()))?;

    let mut team_frame = read_frame_csv(team_box)?;
    add_team_metrics(&mut team_frame);
    let team_rows = build_team_benchmarks(&team_frame, &TEAM_METRICS);
    save_benchmark_csv(
        &team_rows,
        &out_dir.join(benchmark_file_name("team", suffix)),
    )?;

    let mut player_count = 0;
    if let Some(player_box) = player_box {
        let mut player_frame = read_frame_csv(player_box)?;
        add_player_metrics(&mut player_frame);
        if !player_frame.has_column("position_group") {
            add_position_group(&mut player_frame, POSITION_SOURCE_COLUMN);
        }
        let player_rows = build_player_benchmarks(&player_frame, &PLAYER_PIPELINE_METRICS);
        save_benchmark_csv(
            &player_rows,
            &out_dir.join(benchmark_file_name("player", suffix)),
        )?;
        player_count = player_rows.len();
    }

    Ok((team_rows.len(), player_count))
}

/// Enrich a team box-score CSV against a team benchmark CSV.
pub fn enrich_team_file(benchmarks: &Path, input: &Path, out: &Path) -> Result<usize> {
    let bench_rows = load_benchmark_csv(benchmarks)?;
    let store = BenchmarkStore::build(&bench_rows, &[])?;

    let mut frame = read_frame_csv(input)?;
    add_team_metrics(&mut frame);
    add_percentile_columns(
        &mut frame,
        &store,
        &TEAM_METRICS,
        None,
        TierTable::standard(),
    )?;

    write_frame_csv(&frame, out)?;
    Ok(frame.len())
}

/// Enrich a player box-score CSV against a player benchmark CSV, including
/// position-aware percentiles and role labels.
pub fn enrich_player_file(benchmarks: &Path, input: &Path, out: &Path) -> Result<usize> {
    let bench_rows = load_benchmark_csv(benchmarks)?;
    let store = BenchmarkStore::build(&[], &bench_rows)?;

    let mut frame = read_frame_csv(input)?;
    add_player_metrics(&mut frame);
    if !frame.has_column("position_group") {
        add_position_group(&mut frame, POSITION_SOURCE_COLUMN);
    }

    add_percentile_columns(
        &mut frame,
        &store,
        &PLAYER_PIPELINE_METRICS,
        Some("position_group"),
        TierTable::standard(),
    )?;
    add_player_roles(
        &mut frame,
        "usg_pct_pctile",
        "ts_pct_pctile",
        RoleGrid::standard(),
    )?;

    write_frame_csv(&frame, out)?;
    Ok(frame.len())
}

// The core's PLAYER_METRICS list is a strict subset of the pipeline list;
// keep them from drifting apart.
const _: () = assert!(PLAYER_METRICS.len() + 1 == PLAYER_PIPELINE_METRICS.len());

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_team_csv(path: &Path, rows: usize) {
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(
            file,
            "team,team_score,field_goals_made,field_goals_attempted,\
             three_point_field_goals_made,three_point_field_goals_attempted,\
             free_throws_made,free_throws_attempted,offensive_rebounds,\
             defensive_rebounds,assists,turnovers"
        )
        .unwrap();
        for i in 0..rows {
            let made = 20 + (i % 12);
            writeln!(
                file,
                "Team {i},{score},{made},58,5,17,10,14,9,24,14,{tov}",
                score = 55 + 2 * (i % 15),
                tov = 10 + (i % 9),
            )
            .unwrap();
        }
    }

    #[test]
    fn test_benchmarks_then_enrich() {
        let dir = tempfile::tempdir().unwrap();
        let box_path = dir.path().join("team_box.csv");
        let out_dir = dir.path().join("benchmarks");
        write_team_csv(&box_path, 40);

        let (team_count, player_count) =
            build_benchmark_files(&box_path, None, &out_dir, "2025").unwrap();
        assert_eq!(team_count, TEAM_METRICS.len());
        assert_eq!(player_count, 0);

        let bench_path = out_dir.join(benchmark_file_name("team", "2025"));
        let enriched_path = dir.path().join("enriched.csv");
        let rows = enrich_team_file(&bench_path, &box_path, &enriched_path).unwrap();
        assert_eq!(rows, 40);

        let frame = read_frame_csv(&enriched_path).unwrap();
        assert!(frame.has_column("efg_pct_pctile"));
        assert!(frame.has_column("efg_pct_tier"));
        // Every enriched row carries a resolvable rank for a dense metric
        for rec in frame.rows() {
            let rank = rec.coerced_number("efg_pct_pctile").unwrap();
            assert!((5.0..=95.0).contains(&rank));
        }
    }

    #[test]
    fn test_metadata_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        let meta = RunMetadata::now("2025", 120, 12);
        meta.save(&path).unwrap();

        let loaded: RunMetadata =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.season, "2025");
        assert_eq!(loaded.input_rows, 120);
    }
}
