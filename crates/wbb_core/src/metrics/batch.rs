//! Batch metric computation over a [`Frame`].
//!
//! Adds the derived metric columns consumed by benchmarking and reporting.
//! Source columns follow the box-score feed schema (`field_goals_made`,
//! `three_point_field_goals_attempted`, ...). A missing source column makes
//! the affected derived columns missing for that row, never an error.

use crate::frame::Frame;
use crate::metrics::formulas::{self, TEAM_MINUTES_REGULATION};
use crate::metrics::position::PositionGroup;

/// Box-score column read as a counting stat: tolerant parse, 0.0 when blank.
fn stat(rec: &crate::frame::Record, column: &str) -> f64 {
    rec.coerced_number(column).unwrap_or(0.0)
}

/// Parse a minutes cell: "32:45" -> 32.75, "32" -> 32.0, garbage -> 0.0.
pub fn parse_minutes(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some((min, sec)) = trimmed.split_once(':') {
        match (min.parse::<f64>(), sec.parse::<f64>()) {
            (Ok(m), Ok(s)) => m + s / 60.0,
            _ => 0.0,
        }
    } else {
        trimmed.parse::<f64>().unwrap_or(0.0)
    }
}

/// Derived team metric columns added by [`add_team_metrics`].
pub const TEAM_DERIVED_COLUMNS: [&str; 13] = [
    "possessions",
    "efg_pct",
    "ts_pct",
    "fg2_pct",
    "fg3_pct",
    "ft_pct",
    "fg3_rate",
    "tov_pct",
    "ftr",
    "ast_pct",
    "ast_tov",
    "ortg",
    "pace",
];

/// Compute the derived team metrics for every row.
pub fn add_team_metrics(frame: &mut Frame) {
    for col in TEAM_DERIVED_COLUMNS {
        frame.ensure_column(col);
    }

    for rec in frame.rows_mut() {
        let fgm = stat(rec, "field_goals_made");
        let fga = stat(rec, "field_goals_attempted");
        let fg3m = stat(rec, "three_point_field_goals_made");
        let fg3a = stat(rec, "three_point_field_goals_attempted");
        let ftm = stat(rec, "free_throws_made");
        let fta = stat(rec, "free_throws_attempted");
        let orb = stat(rec, "offensive_rebounds");
        let ast = stat(rec, "assists");
        let tov = stat(rec, "turnovers");
        let pts = stat(rec, "team_score");

        let poss = formulas::possessions(fga, fta, orb, tov);
        rec.set_number("possessions", poss);

        rec.set_number("efg_pct", formulas::efg_pct(fgm, fg3m, fga));
        rec.set_number("ts_pct", formulas::ts_pct(pts, fga, fta));
        rec.set_number("fg2_pct", formulas::fg2_pct(fgm, fg3m, fga, fg3a));
        rec.set_number("fg3_pct", formulas::fg3_pct(fg3m, fg3a));
        rec.set_number("ft_pct", formulas::ft_pct(ftm, fta));
        rec.set_number("fg3_rate", formulas::fg3_rate(fg3a, fga));

        rec.set_number("tov_pct", formulas::tov_pct(tov, poss));
        rec.set_number("ftr", formulas::ftr(fta, fga));

        rec.set_number("ast_pct", formulas::ast_pct(ast, fgm));
        rec.set_number("ast_tov", formulas::ast_tov(ast, tov));

        rec.set_number("ortg", formulas::ortg(pts, poss));
        rec.set_number("pace", poss);
    }

    log::debug!(
        "added {} derived team metric columns to {} rows",
        TEAM_DERIVED_COLUMNS.len(),
        frame.len()
    );
}

/// Derived player metric columns added by [`add_player_metrics`].
pub const PLAYER_DERIVED_COLUMNS: [&str; 8] = [
    "efg_pct",
    "ts_pct",
    "fg3_pct",
    "ft_pct",
    "pts_per40",
    "reb_per40",
    "ast_per40",
    "ast_tov",
];

/// Compute the derived player metrics for every row.
///
/// The `minutes` column may arrive as "MM:SS" text; it is normalized to a
/// decimal `minutes` cell as a side effect.
pub fn add_player_metrics(frame: &mut Frame) {
    for col in PLAYER_DERIVED_COLUMNS {
        frame.ensure_column(col);
    }

    for rec in frame.rows_mut() {
        let minutes = match rec.text("minutes") {
            Some(raw) => parse_minutes(raw),
            None => stat(rec, "minutes"),
        };
        rec.set_number("minutes", minutes);

        let fgm = stat(rec, "field_goals_made");
        let fga = stat(rec, "field_goals_attempted");
        let fg3m = stat(rec, "three_point_field_goals_made");
        let fg3a = stat(rec, "three_point_field_goals_attempted");
        let ftm = stat(rec, "free_throws_made");
        let fta = stat(rec, "free_throws_attempted");
        let reb = stat(rec, "rebounds");
        let ast = stat(rec, "assists");
        let tov = stat(rec, "turnovers");
        let pts = stat(rec, "points");

        rec.set_number("efg_pct", formulas::efg_pct(fgm, fg3m, fga));
        rec.set_number("ts_pct", formulas::ts_pct(pts, fga, fta));
        rec.set_number("fg3_pct", formulas::fg3_pct(fg3m, fg3a));
        rec.set_number("ft_pct", formulas::ft_pct(ftm, fta));

        rec.set_number("pts_per40", formulas::per40(pts, minutes));
        rec.set_number("reb_per40", formulas::per40(reb, minutes));
        rec.set_number("ast_per40", formulas::per40(ast, minutes));

        rec.set_number("ast_tov", formulas::ast_tov(ast, tov));
    }

    log::debug!(
        "added {} derived player metric columns to {} rows",
        PLAYER_DERIVED_COLUMNS.len(),
        frame.len()
    );
}

/// Usage percentage from player rows plus their team's totals for the game.
///
/// Team totals are passed per row by the caller since joining player rows to
/// team rows is a loader concern.
pub fn usage_for_row(
    rec: &crate::frame::Record,
    team_fga: f64,
    team_fta: f64,
    team_tov: f64,
) -> f64 {
    formulas::usg_pct(
        stat(rec, "field_goals_attempted"),
        stat(rec, "free_throws_attempted"),
        stat(rec, "turnovers"),
        stat(rec, "minutes"),
        team_fga,
        team_fta,
        team_tov,
        TEAM_MINUTES_REGULATION,
    )
}

/// Add a `position_group` column normalized from a free-text position column.
pub fn add_position_group(frame: &mut Frame, position_column: &str) {
    frame.ensure_column("position_group");
    for rec in frame.rows_mut() {
        let group = match rec.text(position_column) {
            Some(name) => PositionGroup::from_name(name),
            None => PositionGroup::Other,
        };
        rec.set_text("position_group", group.label());
    }
}
