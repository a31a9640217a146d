//! Action Protocol
//!
//! The closed set of actions a host can dispatch. Wire tags are the protocol
//! names (`POINT`, `SUBTRACT_POINT`, ...); each variant carries exactly the
//! fields its transition needs.

use serde::{Deserialize, Serialize};

use crate::models::{MatchConfig, RotationDirection, TeamSide};
use crate::state::MatchState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchAction {
    /// Bank a rally point for a team.
    Point { team: TeamSide },

    /// Manual correction: take one point back (clamped at 0). Not logged,
    /// so UNDO cannot reverse it.
    SubtractPoint { team: TeamSide },

    /// Request a timeout; granted only if the host's policy allows it.
    Timeout { team: TeamSide },

    /// Invert the most recent logged transition (snapshot-first).
    Undo,

    /// Clear score/set/log state; rosters and config are kept.
    ResetMatch,

    /// Flip the display sides; clears any pending side-switch signal.
    ToggleSides,

    /// Manual serve override; not logged.
    SetServer { team: TeamSide },

    /// Replace the rules; optionally reset, and reflow rosters when the
    /// court size changed.
    ApplySettings {
        config: MatchConfig,
        #[serde(default)]
        should_reset: bool,
    },

    /// Post-match exchange with the waiting queue (or a plain reset when no
    /// queue exists). Meaningful only once a match winner is set.
    RotateTeams,

    /// Host-driven lineup shift by one position.
    ManualRotation {
        team: TeamSide,
        direction: RotationDirection,
    },

    /// Unconditional full state replacement (persistence boundary).
    LoadState { state: Box<MatchState> },
}
