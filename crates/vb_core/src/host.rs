//! Host Collaborator Seam
//!
//! Everything the state machine needs from the outside world, as one trait:
//! roster distribution, skill balancing, the post-match exchange with the
//! waiting queue, and the timeout policy. Implementations are assumed total
//! (they never fail); the reducer treats their output as authoritative.
//!
//! `roster_ops::StandardHost` is the shipped reference implementation; hosts
//! with their own policies substitute their own.

use serde::{Deserialize, Serialize};

use crate::models::{Player, Roster, RotationMode, TeamSide};

/// Result of reflowing players across both courts and the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDistribution {
    pub court_a: Roster,
    pub court_b: Roster,
    pub queue: Vec<Roster>,
}

/// Result of the post-match exchange with the waiting queue.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationOutcome {
    pub court_a: Roster,
    pub court_b: Roster,
    pub queue: Vec<Roster>,
    pub report: RotationReport,
}

/// Descriptive record of how a post-match exchange was computed. Attached to
/// the state as a preview; never interpreted by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationReport {
    pub winner: TeamSide,
    /// Team name staying on court
    pub stays: String,
    /// Team name leaving for the queue
    pub leaves: String,
    /// Team name entering from the queue
    pub enters: String,
}

/// External collaborators consumed by the reducer.
pub trait MatchHost {
    /// Reflow all known players across both courts and the queue under the
    /// given court size, preserving encounter order.
    fn distribute_standard(
        &self,
        players: &[Player],
        court_a: &Roster,
        court_b: &Roster,
        queue: &[Roster],
        court_limit: usize,
    ) -> TeamDistribution;

    /// Reflow players into skill-balanced courts (snake order).
    fn balance_teams_snake(
        &self,
        players: &[Player],
        court_a: &Roster,
        court_b: &Roster,
        queue: &[Roster],
        court_limit: usize,
    ) -> TeamDistribution;

    /// Compute the post-match court/queue exchange for the given winner and
    /// rotation mode.
    fn handle_rotate(
        &self,
        team_a: &Roster,
        team_b: &Roster,
        queue: &[Roster],
        winner: TeamSide,
        rotation_mode: RotationMode,
        court_limit: usize,
    ) -> RotationOutcome;

    /// Timeout policy: may a team that has already taken `current_count`
    /// timeouts this set take another?
    fn is_valid_timeout_request(&self, current_count: u8) -> bool;
}
