//! Serve Rotation Rules
//!
//! Side-out detection and the automatic rotation decision. One exemption: a
//! team's first side-out of the set does not rotate its lineup, so the
//! initially placed server stays in position 1.

use crate::engine::log::LogEntry;
use crate::models::{Roster, RotationDirection, TeamSide};

/// True iff serve possession transfers: a serving team is set and it is not
/// the team that just scored.
pub fn is_side_out(serving_team: Option<TeamSide>, scoring_team: TeamSide) -> bool {
    matches!(serving_team, Some(server) if server != scoring_team)
}

/// True iff `team` has held serve at any point this set: some logged point
/// started with `team` serving.
pub fn has_served_this_set(action_log: &[LogEntry], team: TeamSide) -> bool {
    action_log.iter().any(|entry| {
        matches!(entry, LogEntry::Point { prev_serving_team: Some(server), .. } if *server == team)
    })
}

/// Apply the side-out rotation decision to the scoring team's lineup.
///
/// Skips rotation (returns `false`) on the team's first side-out of the set;
/// otherwise rotates clockwise, zeroing the tactical offset, and returns
/// `true`. The caller records the returned flag as `auto_rotated`.
pub fn apply_side_out_rotation(
    roster: &mut Roster,
    action_log: &[LogEntry],
    scoring_team: TeamSide,
) -> bool {
    if !has_served_this_set(action_log, scoring_team) {
        return false;
    }
    roster.rotate(RotationDirection::Clockwise);
    true
}
