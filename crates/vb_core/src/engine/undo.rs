//! Undo
//!
//! Inversion of the most recent logged transition. Snapshot first: a
//! set-completing transition is restored wholesale from the captured
//! pre-transition state. Otherwise the last `action_log` entry is popped and
//! its exact inverse applied, with `match_log`'s tail popped in lockstep so
//! the two tiers stay synchronized within a set.

use crate::engine::log::LogEntry;
use crate::state::MatchState;

/// Invert the most recent transition; identity when there is nothing to undo.
pub fn undo(state: &MatchState) -> MatchState {
    if let Some(snapshot) = &state.last_snapshot {
        log::debug!("undo: restoring pre-set-completion snapshot");
        return (**snapshot).clone();
    }

    let mut next = state.clone();
    let Some(entry) = next.action_log.pop() else {
        // Nothing logged this set (and no snapshot): no-op.
        return state.clone();
    };

    if next.match_log.last().map(LogEntry::kind) == Some(entry.kind()) {
        next.match_log.pop();
    }

    match entry {
        LogEntry::Point {
            team,
            prev_score_a,
            prev_score_b,
            prev_serving_team,
            prev_in_sudden_death,
            prev_clock_running,
            auto_rotated,
            prev_tactical_offset,
        } => {
            next.score_a = prev_score_a;
            next.score_b = prev_score_b;
            next.serving_team = prev_serving_team;
            next.in_sudden_death = prev_in_sudden_death;
            next.clock_running = prev_clock_running;
            if auto_rotated {
                let roster = next.roster_of_mut(team);
                roster.rotate(crate::models::RotationDirection::CounterClockwise);
                roster.tactical_offset = prev_tactical_offset;
            }
        }
        LogEntry::Timeout { prev_timeouts_a, prev_timeouts_b, .. } => {
            next.timeouts_a = prev_timeouts_a;
            next.timeouts_b = prev_timeouts_b;
        }
        LogEntry::Rotation { prev_team_a, prev_team_b, prev_queue } => {
            next.team_a = prev_team_a;
            next.team_b = prev_team_b;
            next.queue = prev_queue;
        }
        LogEntry::ManualRotation { team, direction } => {
            next.roster_of_mut(team).rotate(direction.opposite());
        }
    }

    next
}
