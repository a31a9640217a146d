//! Action Log
//!
//! Immutable log entries, one variant per undoable action, each carrying
//! exactly the fields its inverse needs. Two tiers share the same entry
//! type: `action_log` (cleared when a set completes) and `match_log` (the
//! whole match, cleared only by an explicit reset).

use serde::{Deserialize, Serialize};

use crate::models::{Roster, RotationDirection, TeamSide};

/// One logged transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogEntry {
    /// A rally point. `prev_tactical_offset` is the scoring team's offset
    /// before the side-out rotation zeroed it; meaningful only when
    /// `auto_rotated` is set.
    Point {
        team: TeamSide,
        prev_score_a: u16,
        prev_score_b: u16,
        prev_serving_team: Option<TeamSide>,
        prev_in_sudden_death: bool,
        prev_clock_running: bool,
        auto_rotated: bool,
        prev_tactical_offset: i8,
    },

    /// A granted timeout; both prior counters, so the inverse is a plain
    /// restore.
    Timeout {
        team: TeamSide,
        prev_timeouts_a: u8,
        prev_timeouts_b: u8,
    },

    /// Post-match exchange with the queue; the embedded snapshot is restored
    /// verbatim on undo.
    Rotation {
        prev_team_a: Roster,
        prev_team_b: Roster,
        prev_queue: Vec<Roster>,
    },

    /// Host-driven lineup shift; inverted by the opposite direction.
    ManualRotation {
        team: TeamSide,
        direction: RotationDirection,
    },
}

impl LogEntry {
    /// Entry kind, for keeping the two log tiers in lockstep.
    pub fn kind(&self) -> LogKind {
        match self {
            LogEntry::Point { .. } => LogKind::Point,
            LogEntry::Timeout { .. } => LogKind::Timeout,
            LogEntry::Rotation { .. } => LogKind::Rotation,
            LogEntry::ManualRotation { .. } => LogKind::ManualRotation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Point,
    Timeout,
    Rotation,
    ManualRotation,
}
