//! # Derived Metric Formulas
//!
//! Standard basketball-analytics formulas over box-score counting stats.
//! Conventions follow Basketball-Reference / Cleaning the Glass / KenPom
//! methodology.
//!
//! All ratio metrics guard the denominator and return 0.0 when it is not
//! positive; `possessions` instead clamps to a minimum of 1.0 so downstream
//! per-possession rates never divide by zero.

/// Dean Oliver possession estimate.
///
/// Formula: `Poss = FGA + 0.44 * FTA - ORB + TOV`
///
/// The 0.44 coefficient accounts for and-ones, technical free throws, etc.
///
/// # Examples
/// ```
/// use wbb_core::metrics::possessions;
///
/// let poss = possessions(60.0, 20.0, 10.0, 15.0);
/// assert!((poss - 73.8).abs() < 1e-9);
/// ```
pub fn possessions(fga: f64, fta: f64, orb: f64, tov: f64) -> f64 {
    (fga + 0.44 * fta - orb + tov).max(1.0)
}

/// Effective Field Goal Percentage.
///
/// Formula: `eFG% = (FGM + 0.5 * 3PM) / FGA`
///
/// Weights 3-pointers appropriately (worth 1.5x a 2-pointer).
pub fn efg_pct(fgm: f64, fg3m: f64, fga: f64) -> f64 {
    if fga > 0.0 {
        (fgm + 0.5 * fg3m) / fga
    } else {
        0.0
    }
}

/// True Shooting Percentage.
///
/// Formula: `TS% = PTS / (2 * (FGA + 0.44 * FTA))`
///
/// Scoring efficiency accounting for free throws and 3s.
pub fn ts_pct(pts: f64, fga: f64, fta: f64) -> f64 {
    let denom = 2.0 * (fga + 0.44 * fta);
    if denom > 0.0 {
        pts / denom
    } else {
        0.0
    }
}

/// Two-Point Field Goal Percentage: `(FGM - 3PM) / (FGA - 3PA)`.
pub fn fg2_pct(fgm: f64, fg3m: f64, fga: f64, fg3a: f64) -> f64 {
    let fg2a = fga - fg3a;
    if fg2a > 0.0 {
        (fgm - fg3m) / fg2a
    } else {
        0.0
    }
}

/// Three-Point Field Goal Percentage: `3PM / 3PA`.
pub fn fg3_pct(fg3m: f64, fg3a: f64) -> f64 {
    if fg3a > 0.0 {
        fg3m / fg3a
    } else {
        0.0
    }
}

/// Free Throw Percentage: `FTM / FTA`.
pub fn ft_pct(ftm: f64, fta: f64) -> f64 {
    if fta > 0.0 {
        ftm / fta
    } else {
        0.0
    }
}

/// Three-Point Attempt Rate: `3PA / FGA`. Measures reliance on the 3.
pub fn fg3_rate(fg3a: f64, fga: f64) -> f64 {
    if fga > 0.0 {
        fg3a / fga
    } else {
        0.0
    }
}

/// Turnover Percentage: `TOV / Poss`. Lower is better for the offense.
pub fn tov_pct(tov: f64, poss: f64) -> f64 {
    if poss > 0.0 {
        tov / poss
    } else {
        0.0
    }
}

/// Free Throw Rate: `FTA / FGA`. Ability to get to the line.
pub fn ftr(fta: f64, fga: f64) -> f64 {
    if fga > 0.0 {
        fta / fga
    } else {
        0.0
    }
}

/// Offensive Rebound Percentage: `ORB / (ORB + Opp_DRB)`.
pub fn oreb_pct(orb: f64, opp_drb: f64) -> f64 {
    let total = orb + opp_drb;
    if total > 0.0 {
        orb / total
    } else {
        0.0
    }
}

/// Defensive Rebound Percentage: `DRB / (DRB + Opp_ORB)`.
pub fn dreb_pct(drb: f64, opp_orb: f64) -> f64 {
    let total = drb + opp_orb;
    if total > 0.0 {
        drb / total
    } else {
        0.0
    }
}

/// Team Assist Percentage: `AST / FGM` - share of made baskets assisted.
pub fn ast_pct(ast: f64, fgm: f64) -> f64 {
    if fgm > 0.0 {
        ast / fgm
    } else {
        0.0
    }
}

/// Assist to Turnover Ratio. 0.0 when the player/team has no turnovers.
pub fn ast_tov(ast: f64, tov: f64) -> f64 {
    if tov > 0.0 {
        ast / tov
    } else {
        0.0
    }
}

/// Offensive Rating: points scored per 100 possessions.
pub fn ortg(pts: f64, poss: f64) -> f64 {
    if poss > 0.0 {
        100.0 * pts / poss
    } else {
        0.0
    }
}

/// Defensive Rating: points allowed per 100 possessions. Lower is better.
pub fn drtg(opp_pts: f64, poss: f64) -> f64 {
    if poss > 0.0 {
        100.0 * opp_pts / poss
    } else {
        0.0
    }
}

/// Net Rating: point differential per 100 possessions.
pub fn net_rtg(ortg: f64, drtg: f64) -> f64 {
    ortg - drtg
}

/// Simplified Usage Percentage.
///
/// Formula: `USG% = (FGA + 0.44*FTA + TOV) * (Team_Min / 5)
///                / (Min * (Team_FGA + 0.44*Team_FTA + Team_TOV))`
///
/// Estimates the share of team plays used by a player while on the court.
/// `team_minutes` defaults to 200 (five players x 40 minutes).
pub fn usg_pct(
    fga: f64,
    fta: f64,
    tov: f64,
    minutes: f64,
    team_fga: f64,
    team_fta: f64,
    team_tov: f64,
    team_minutes: f64,
) -> f64 {
    let player_usage = fga + 0.44 * fta + tov;
    let team_usage = team_fga + 0.44 * team_fta + team_tov;
    let denom = minutes * team_usage;
    if denom > 0.0 && minutes > 0.0 {
        player_usage * (team_minutes / 5.0) / denom
    } else {
        0.0
    }
}

/// Per-40-minute rate: `Stat * 40 / Minutes`.
pub fn per40(stat: f64, minutes: f64) -> f64 {
    if minutes > 0.0 {
        stat * 40.0 / minutes
    } else {
        0.0
    }
}

/// Regulation team minutes used by the usage estimate (5 players x 40).
pub const TEAM_MINUTES_REGULATION: f64 = 200.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possessions_floor() {
        // Degenerate box line cannot go below one possession
        assert_eq!(possessions(2.0, 0.0, 10.0, 0.0), 1.0);
        assert!((possessions(60.0, 20.0, 10.0, 15.0) - 73.8).abs() < 1e-9);
    }

    #[test]
    fn test_efg_weights_threes() {
        // 10/20 with 4 threes: (10 + 2) / 20 = 0.6
        assert!((efg_pct(10.0, 4.0, 20.0) - 0.6).abs() < 1e-9);
        assert_eq!(efg_pct(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_ts_pct() {
        // 30 pts on 20 FGA, 10 FTA: 30 / (2 * 24.4)
        let ts = ts_pct(30.0, 20.0, 10.0);
        assert!((ts - 30.0 / 48.8).abs() < 1e-9);
        assert_eq!(ts_pct(10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fg2_pct_excludes_threes() {
        // 10/20 overall, 4/10 from three -> 6/10 from two
        assert!((fg2_pct(10.0, 4.0, 20.0, 10.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ast_tov_zero_turnovers() {
        assert_eq!(ast_tov(5.0, 0.0), 0.0);
        assert!((ast_tov(6.0, 3.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratings() {
        let o = ortg(80.0, 70.0);
        let d = drtg(75.0, 70.0);
        assert!((o - 8000.0 / 70.0).abs() < 1e-9);
        assert!((net_rtg(o, d) - 500.0 / 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_usage_pct() {
        // Player using exactly a fifth of team plays in a fifth of minutes
        // comes out at 100% of an average share.
        let usg = usg_pct(12.0, 5.0, 3.0, 40.0, 60.0, 25.0, 15.0, 200.0);
        assert!(usg > 0.0);
        assert_eq!(usg_pct(12.0, 5.0, 3.0, 0.0, 60.0, 25.0, 15.0, 200.0), 0.0);
    }

    #[test]
    fn test_per40() {
        assert!((per40(15.0, 30.0) - 20.0).abs() < 1e-9);
        assert_eq!(per40(15.0, 0.0), 0.0);
    }
}
