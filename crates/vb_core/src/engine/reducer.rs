//! Match State Machine
//!
//! The single reducer: one state plus one action yields the next state.
//! Transitions are immutable-by-replacement; rejected actions return the
//! input unchanged. Policy the core does not own (timeout limits, roster
//! exchange) is consulted through the `MatchHost` seam.

use crate::engine::actions::MatchAction;
use crate::engine::log::LogEntry;
use crate::engine::undo;
use crate::host::MatchHost;
use crate::models::{MatchMode, RotationDirection, TeamSide};
use crate::rotation;
use crate::scoring;
use crate::state::{MatchState, SetHistory};

/// Total-points interval between beach side switches in a regular set.
const BEACH_SWITCH_INTERVAL: u16 = 7;
/// Shorter interval used in the deciding set.
const BEACH_SWITCH_INTERVAL_DECIDER: u16 = 5;

/// Apply one action to one state.
pub fn apply(state: &MatchState, action: &MatchAction, host: &dyn MatchHost) -> MatchState {
    match action {
        MatchAction::Point { team } => apply_point(state, *team, host),
        MatchAction::SubtractPoint { team } => apply_subtract_point(state, *team),
        MatchAction::Timeout { team } => apply_timeout(state, *team, host),
        MatchAction::Undo => undo::undo(state),
        MatchAction::ResetMatch => apply_reset(state),
        MatchAction::ToggleSides => apply_toggle_sides(state),
        MatchAction::SetServer { team } => apply_set_server(state, *team),
        MatchAction::ApplySettings { config, should_reset } => {
            apply_settings(state, config, *should_reset, host)
        }
        MatchAction::RotateTeams => apply_rotate_teams(state, host),
        MatchAction::ManualRotation { team, direction } => {
            apply_manual_rotation(state, *team, *direction)
        }
        MatchAction::LoadState { state: loaded } => (**loaded).clone(),
    }
}

fn apply_point(state: &MatchState, team: TeamSide, host: &dyn MatchHost) -> MatchState {
    if state.is_match_over {
        return state.clone();
    }

    let mut next = state.clone();
    next.last_snapshot = None;

    // Pre-transition values; the log entry must allow an exact inverse.
    let prev_score_a = state.score_a;
    let prev_score_b = state.score_b;
    let prev_serving_team = state.serving_team;
    let prev_in_sudden_death = state.in_sudden_death;
    let prev_clock_running = state.clock_running;

    // (1) bank the point
    match team {
        TeamSide::A => next.score_a += 1,
        TeamSide::B => next.score_b += 1,
    }

    // (2) beach side-switch signal on total-points intervals
    if next.config.mode == MatchMode::Beach {
        let interval = if next.is_deciding_set() {
            BEACH_SWITCH_INTERVAL_DECIDER
        } else {
            BEACH_SWITCH_INTERVAL
        };
        let total = next.score_a + next.score_b;
        next.pending_side_switch = total > 0 && total % interval == 0;
    }

    // (3) sudden-death entry resets the race to 0-0
    if scoring::should_enter_sudden_death(
        &next.config,
        next.current_set,
        next.score_a,
        next.score_b,
        next.in_sudden_death,
    ) {
        log::debug!("sudden death entered in set {}", next.current_set);
        next.in_sudden_death = true;
        next.score_a = 0;
        next.score_b = 0;
    }

    // (4) set winner from the post-increment scores
    let target = scoring::target_score(&next.config, next.current_set);
    let winner = scoring::compute_winner(next.score_a, next.score_b, target, next.in_sudden_death);

    // (5) automatic rotation on a side-out that did not end the set
    let side_out = rotation::is_side_out(state.serving_team, team);
    let mut auto_rotated = false;
    let mut prev_tactical_offset = 0;
    if winner.is_none() && side_out {
        prev_tactical_offset = next.roster_of(team).tactical_offset;
        auto_rotated =
            rotation::apply_side_out_rotation(next.roster_of_mut(team), &state.action_log, team);
        if !auto_rotated {
            prev_tactical_offset = 0;
        }
    }

    // (6) log the point
    let entry = LogEntry::Point {
        team,
        prev_score_a,
        prev_score_b,
        prev_serving_team,
        prev_in_sudden_death,
        prev_clock_running,
        auto_rotated,
        prev_tactical_offset,
    };
    next.action_log.push(entry.clone());
    next.match_log.push(entry);

    // (7) close out the set, or hand the serve to the scorer
    if let Some(set_winner) = winner {
        complete_set(state, &mut next, set_winner, host);
    } else {
        next.serving_team = Some(team);
        next.clock_running = true;
    }

    next
}

/// Close the current set for `set_winner`. The pre-transition state is kept
/// as a full snapshot: a set completion folds rotation reports, history and
/// per-set resets into one transition, which is impractical to invert from a
/// delta.
fn complete_set(
    prev_state: &MatchState,
    next: &mut MatchState,
    set_winner: TeamSide,
    host: &dyn MatchHost,
) {
    log::debug!(
        "set {} complete: {:?} wins {}-{}",
        next.current_set,
        set_winner,
        next.score_a,
        next.score_b
    );

    next.history.push(SetHistory {
        set_number: next.current_set,
        score_a: next.score_a,
        score_b: next.score_b,
        winner: set_winner,
    });

    match set_winner {
        TeamSide::A => next.sets_a += 1,
        TeamSide::B => next.sets_b += 1,
    }

    if next.sets_of(set_winner) >= next.config.sets_to_win() {
        next.is_match_over = true;
        next.match_winner = Some(set_winner);
        if !next.queue.is_empty() {
            // Preview only: rosters move on ROTATE_TEAMS, not here.
            let outcome = host.handle_rotate(
                &next.team_a,
                &next.team_b,
                &next.queue,
                set_winner,
                next.config.rotation_mode,
                next.config.mode.court_size(),
            );
            next.rotation_preview = Some(outcome.report);
        }
    } else {
        next.current_set += 1;
    }

    next.begin_next_set();
    next.last_snapshot = Some(Box::new(prev_state.clone()));
}

fn apply_subtract_point(state: &MatchState, team: TeamSide) -> MatchState {
    if state.is_match_over || state.score_of(team) == 0 {
        return state.clone();
    }

    let mut next = state.clone();
    next.last_snapshot = None;
    match team {
        TeamSide::A => next.score_a -= 1,
        TeamSide::B => next.score_b -= 1,
    }
    // Deliberately unlogged: subtraction is itself a manual correction.
    next.pending_side_switch = false;
    next
}

fn apply_timeout(state: &MatchState, team: TeamSide, host: &dyn MatchHost) -> MatchState {
    if !host.is_valid_timeout_request(state.timeouts_of(team)) {
        return state.clone();
    }

    let mut next = state.clone();
    next.last_snapshot = None;
    let entry = LogEntry::Timeout {
        team,
        prev_timeouts_a: state.timeouts_a,
        prev_timeouts_b: state.timeouts_b,
    };
    match team {
        TeamSide::A => next.timeouts_a += 1,
        TeamSide::B => next.timeouts_b += 1,
    }
    next.action_log.push(entry.clone());
    next.match_log.push(entry);
    next
}

fn apply_reset(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.reset_scores();
    next
}

fn apply_toggle_sides(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.last_snapshot = None;
    next.swapped_sides = !next.swapped_sides;
    next.pending_side_switch = false;
    next
}

fn apply_set_server(state: &MatchState, team: TeamSide) -> MatchState {
    let mut next = state.clone();
    next.last_snapshot = None;
    // Manual override; not logged.
    next.serving_team = Some(team);
    next
}

fn apply_settings(
    state: &MatchState,
    config: &crate::models::MatchConfig,
    should_reset: bool,
    host: &dyn MatchHost,
) -> MatchState {
    let mut next = state.clone();
    next.last_snapshot = None;

    let court_size_changed = state.config.mode.court_size() != config.mode.court_size();
    next.config = config.clone();

    if should_reset {
        next.reset_scores();
    }

    if court_size_changed {
        let court_limit = next.config.mode.court_size();
        log::debug!("court size changed, redistributing to {} per side", court_limit);
        let distribution =
            host.distribute_standard(&[], &next.team_a, &next.team_b, &next.queue, court_limit);
        next.team_a = distribution.court_a;
        next.team_b = distribution.court_b;
        next.queue = distribution.queue;
    }

    next
}

fn apply_rotate_teams(state: &MatchState, host: &dyn MatchHost) -> MatchState {
    let Some(winner) = state.match_winner else {
        return state.clone();
    };

    if state.queue.is_empty() {
        // Fresh match between the same two teams.
        return apply_reset(state);
    }

    let entry = LogEntry::Rotation {
        prev_team_a: state.team_a.clone(),
        prev_team_b: state.team_b.clone(),
        prev_queue: state.queue.clone(),
    };
    let outcome = host.handle_rotate(
        &state.team_a,
        &state.team_b,
        &state.queue,
        winner,
        state.config.rotation_mode,
        state.config.mode.court_size(),
    );

    let mut next = state.clone();
    next.reset_scores();
    next.team_a = outcome.court_a;
    next.team_b = outcome.court_b;
    next.queue = outcome.queue;
    next.action_log.push(entry.clone());
    next.match_log.push(entry);
    next
}

fn apply_manual_rotation(
    state: &MatchState,
    team: TeamSide,
    direction: RotationDirection,
) -> MatchState {
    let mut next = state.clone();
    next.last_snapshot = None;
    next.roster_of_mut(team).rotate(direction);
    let entry = LogEntry::ManualRotation { team, direction };
    next.action_log.push(entry.clone());
    next.match_log.push(entry);
    next
}
