//! Match State
//!
//! `MatchState` is the single mutable-by-replacement root: the reducer in
//! `engine` consumes one state and one action and produces the next state.
//! The whole struct is serde-serializable; the serialized form is the
//! persistence unit (`LOAD_STATE` replaces it wholesale, no migration).

use serde::{Deserialize, Serialize};

use crate::engine::log::LogEntry;
use crate::host::RotationReport;
use crate::models::{MatchConfig, Roster, TeamSide};

/// Record of one completed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetHistory {
    pub set_number: u8,
    pub score_a: u16,
    pub score_b: u16,
    pub winner: TeamSide,
}

/// Complete scoreboard state for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Current set's point totals
    pub score_a: u16,
    pub score_b: u16,

    /// Sets won per team
    pub sets_a: u8,
    pub sets_b: u8,

    /// 1-based set counter; increments on each non-match-ending set completion
    pub current_set: u8,

    /// Completed sets, append-only
    pub history: Vec<SetHistory>,

    /// None only before any point has been scored in the set
    pub serving_team: Option<TeamSide>,

    /// True only while sudden-death scoring is active
    pub in_sudden_death: bool,

    /// Timeouts taken this set
    pub timeouts_a: u8,
    pub timeouts_b: u8,

    /// Beach-mode side-switch signal; the host relocates players, not the core
    pub pending_side_switch: bool,

    /// Display-side swap, toggled by the host; orthogonal to scoring
    pub swapped_sides: bool,

    pub is_match_over: bool,
    pub match_winner: Option<TeamSide>,

    /// Signal for the host's match clock; the core runs no timers
    #[serde(default)]
    pub clock_running: bool,

    /// Entries since the current set started; cleared when a set completes
    pub action_log: Vec<LogEntry>,

    /// Entries for the whole match; cleared only by an explicit reset
    pub match_log: Vec<LogEntry>,

    /// Full pre-transition copy, present only immediately after a
    /// set-completing transition; consumed by the next UNDO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<Box<MatchState>>,

    /// Post-match roster exchange preview; rosters stay untouched until
    /// ROTATE_TEAMS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_preview: Option<RotationReport>,

    pub config: MatchConfig,

    pub team_a: Roster,
    pub team_b: Roster,

    /// Waiting teams, front of the vec enters first; empty = no queue
    #[serde(default)]
    pub queue: Vec<Roster>,
}

impl MatchState {
    /// Fresh match between two rosters under the given rules.
    pub fn new(config: MatchConfig, team_a: Roster, team_b: Roster) -> Self {
        Self {
            score_a: 0,
            score_b: 0,
            sets_a: 0,
            sets_b: 0,
            current_set: 1,
            history: Vec::new(),
            serving_team: None,
            in_sudden_death: false,
            timeouts_a: 0,
            timeouts_b: 0,
            pending_side_switch: false,
            swapped_sides: false,
            is_match_over: false,
            match_winner: None,
            clock_running: false,
            action_log: Vec::new(),
            match_log: Vec::new(),
            last_snapshot: None,
            rotation_preview: None,
            config,
            team_a,
            team_b,
            queue: Vec::new(),
        }
    }

    pub fn with_queue(mut self, queue: Vec<Roster>) -> Self {
        self.queue = queue;
        self
    }

    pub fn score_of(&self, team: TeamSide) -> u16 {
        match team {
            TeamSide::A => self.score_a,
            TeamSide::B => self.score_b,
        }
    }

    pub fn sets_of(&self, team: TeamSide) -> u8 {
        match team {
            TeamSide::A => self.sets_a,
            TeamSide::B => self.sets_b,
        }
    }

    pub fn timeouts_of(&self, team: TeamSide) -> u8 {
        match team {
            TeamSide::A => self.timeouts_a,
            TeamSide::B => self.timeouts_b,
        }
    }

    pub fn roster_of(&self, team: TeamSide) -> &Roster {
        match team {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn roster_of_mut(&mut self, team: TeamSide) -> &mut Roster {
        match team {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }

    /// True in the deciding (last possible) set; beach switches sides on a
    /// shorter interval there.
    pub fn is_deciding_set(&self) -> bool {
        self.current_set == self.config.max_sets
    }

    /// Clear per-set fields for the next set. Logs: `action_log` only;
    /// `match_log` survives set boundaries.
    pub(crate) fn begin_next_set(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.timeouts_a = 0;
        self.timeouts_b = 0;
        self.in_sudden_death = false;
        self.pending_side_switch = false;
        self.serving_team = None;
        self.clock_running = false;
        self.action_log.clear();
    }

    /// Clear all score/set/log state; rosters (with zeroed tactical offsets)
    /// and config are kept.
    pub(crate) fn reset_scores(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.sets_a = 0;
        self.sets_b = 0;
        self.current_set = 1;
        self.history.clear();
        self.serving_team = None;
        self.in_sudden_death = false;
        self.timeouts_a = 0;
        self.timeouts_b = 0;
        self.pending_side_switch = false;
        self.is_match_over = false;
        self.match_winner = None;
        self.clock_running = false;
        self.action_log.clear();
        self.match_log.clear();
        self.last_snapshot = None;
        self.rotation_preview = None;
        self.team_a.tactical_offset = 0;
        self.team_b.tactical_offset = 0;
    }
}
