//! Game context labels: final-margin classification, AP-ranking context and
//! human-readable performance descriptions.

use crate::labels::tiers::{Tier, TierTable};

/// Point differential at or above which a game is a blowout.
pub const BLOWOUT_MARGIN: f64 = 20.0;
/// Point differential at or below which a game is a close game.
pub const CLOSE_GAME_MARGIN: f64 = 5.0;
/// AP rank at or inside which a team counts as ranked.
pub const RANKED_CUTOFF: u32 = 25;

/// Final-margin classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginContext {
    Blowout,
    Comfortable,
    CloseGame,
    Unknown,
}

impl MarginContext {
    pub fn display(&self) -> &'static str {
        match self {
            MarginContext::Blowout => "Blowout",
            MarginContext::Comfortable => "Comfortable",
            MarginContext::CloseGame => "Close Game",
            MarginContext::Unknown => "Unknown",
        }
    }
}

/// Classify a game by its final margin.
pub fn margin_context(point_diff: Option<f64>) -> MarginContext {
    let margin = match point_diff {
        Some(d) if !d.is_nan() => d.abs(),
        _ => return MarginContext::Unknown,
    };

    if margin >= BLOWOUT_MARGIN {
        MarginContext::Blowout
    } else if margin <= CLOSE_GAME_MARGIN {
        MarginContext::CloseGame
    } else {
        MarginContext::Comfortable
    }
}

/// Comprehensive game context from AP ranks and final margin.
///
/// Ranked-vs-ranked games are showdowns; a ranked loser falling to an
/// unranked winner is an upset; a single ranked participant qualifies the
/// margin context.
pub fn game_context(
    winner_rank: Option<u32>,
    loser_rank: Option<u32>,
    point_diff: Option<f64>,
) -> String {
    let margin = margin_context(point_diff);

    let winner_ranked = winner_rank.is_some_and(|r| r <= RANKED_CUTOFF);
    let loser_ranked = loser_rank.is_some_and(|r| r <= RANKED_CUTOFF);

    if winner_ranked && loser_ranked {
        if margin == MarginContext::CloseGame {
            return "Ranked Showdown (Close)".to_string();
        }
        return "Ranked Showdown".to_string();
    }

    if loser_ranked && !winner_ranked {
        return "Upset".to_string();
    }

    if winner_ranked || loser_ranked {
        return format!("Ranked Matchup ({})", margin.display());
    }

    margin.display().to_string()
}

/// Human-readable performance description for one percentile rank.
/// Empty string when no percentile is available.
pub fn performance_label(percentile: Option<f64>, tiers: &TierTable) -> String {
    let rank = match percentile {
        Some(r) if !r.is_nan() => r,
        _ => return String::new(),
    };

    match tiers.classify(Some(rank)) {
        Tier::Low => format!("Needs improvement ({:.0}th percentile)", rank),
        Tier::Unknown => format!("{:.0}th percentile", rank),
        tier => format!("{} ({:.0}th percentile)", tier.display(), rank),
    }
}
