//! Score Evaluation
//!
//! Pure functions that answer three questions from raw scores: what is this
//! set's target, should sudden death begin, and is there a set winner.
//! Evaluation is always against the latest scores only, so a declared winner
//! can never be revoked by later evaluation with a higher score.

use crate::models::{DeuceType, MatchConfig, TeamSide};

/// Points needed for a win in sudden death.
pub const SUDDEN_DEATH_TARGET: u16 = 3;

/// Target score for the given set: the tie-break target in the last set when
/// configured, the regular target otherwise.
pub fn target_score(config: &MatchConfig, current_set: u8) -> u16 {
    if config.has_tie_break && current_set == config.max_sets {
        config.tie_break_points
    } else {
        config.points_per_set
    }
}

/// True iff sudden death should begin: the configured mode is active, we are
/// not already in it, and both teams sit one point short of this set's
/// target. On entry the caller resets both scores to 0.
pub fn should_enter_sudden_death(
    config: &MatchConfig,
    current_set: u8,
    score_a: u16,
    score_b: u16,
    already_in: bool,
) -> bool {
    if config.deuce_type != DeuceType::SuddenDeath3pt || already_in {
        return false;
    }
    let deuce_point = target_score(config, current_set).saturating_sub(1);
    score_a == deuce_point && score_b == deuce_point
}

/// Set winner, if any, from the latest scores.
///
/// Normal play: reach the target with a two-point lead. Sudden death: first
/// to 3 with any strict lead.
pub fn compute_winner(
    score_a: u16,
    score_b: u16,
    target: u16,
    in_sudden_death: bool,
) -> Option<TeamSide> {
    if in_sudden_death {
        if score_a >= SUDDEN_DEATH_TARGET && score_a > score_b {
            return Some(TeamSide::A);
        }
        if score_b >= SUDDEN_DEATH_TARGET && score_b > score_a {
            return Some(TeamSide::B);
        }
        return None;
    }

    if score_a >= target && score_a.saturating_sub(score_b) >= 2 {
        return Some(TeamSide::A);
    }
    if score_b >= target && score_b.saturating_sub(score_a) >= 2 {
        return Some(TeamSide::B);
    }
    None
}
