//! Reference Roster Collaborators
//!
//! Pure implementations of the `MatchHost` seam: standard distribution,
//! snake balancing, and the winner-stays queue exchange. The state machine
//! never calls these directly; it goes through the trait, so hosts can swap
//! any of them out.

use crate::host::{MatchHost, RotationOutcome, RotationReport, TeamDistribution};
use crate::models::{Player, Roster, RotationMode, TeamSide};

/// Timeouts a team may take per set.
pub const TIMEOUTS_PER_SET: u8 = 2;

/// Fill court A, then court B, then queue teams of `court_limit`, preserving
/// encounter order (court A, court B, queue teams, then the extra pool).
pub fn distribute_standard(
    players: &[Player],
    court_a: &Roster,
    court_b: &Roster,
    queue: &[Roster],
    court_limit: usize,
) -> TeamDistribution {
    let pool = collect_pool(players, court_a, court_b, queue);
    split_pool(pool, court_a, court_b, court_limit)
}

/// Skill-balanced distribution: sort the pool by skill descending, deal the
/// first two courts in snake order (A B B A A B ...), overflow to the queue.
pub fn balance_teams_snake(
    players: &[Player],
    court_a: &Roster,
    court_b: &Roster,
    queue: &[Roster],
    court_limit: usize,
) -> TeamDistribution {
    let mut pool = collect_pool(players, court_a, court_b, queue);
    pool.sort_by(|left, right| right.skill.cmp(&left.skill).then(left.id.cmp(&right.id)));

    let mut side_a = Vec::with_capacity(court_limit);
    let mut side_b = Vec::with_capacity(court_limit);
    let mut rest = Vec::new();
    for (rank, player) in pool.into_iter().enumerate() {
        // snake: 0 -> A, 1 -> B, 2 -> B, 3 -> A, 4 -> A, ...
        let to_a = matches!(rank % 4, 0 | 3);
        if to_a && side_a.len() < court_limit {
            side_a.push(player);
        } else if side_b.len() < court_limit {
            side_b.push(player);
        } else if side_a.len() < court_limit {
            side_a.push(player);
        } else {
            rest.push(player);
        }
    }

    TeamDistribution {
        court_a: Roster::new(court_a.name.clone(), side_a),
        court_b: Roster::new(court_b.name.clone(), side_b),
        queue: chunk_queue(rest, court_limit),
    }
}

/// Winner-stays exchange: the loser joins the back of the queue, the queue's
/// front team takes the loser's court. With other modes added to
/// `RotationMode` this is where they branch.
pub fn handle_rotate(
    team_a: &Roster,
    team_b: &Roster,
    queue: &[Roster],
    winner: TeamSide,
    rotation_mode: RotationMode,
    _court_limit: usize,
) -> RotationOutcome {
    let RotationMode::WinnerStays = rotation_mode;

    let (stays, leaves) = match winner {
        TeamSide::A => (team_a, team_b),
        TeamSide::B => (team_b, team_a),
    };

    let mut next_queue: Vec<Roster> = queue.to_vec();
    let entering = if next_queue.is_empty() {
        // Nothing to exchange with; the loser stays too.
        leaves.clone()
    } else {
        let mut entering = next_queue.remove(0);
        entering.tactical_offset = 0;
        let mut leaving = leaves.clone();
        leaving.tactical_offset = 0;
        next_queue.push(leaving);
        entering
    };

    let report = RotationReport {
        winner,
        stays: stays.name.clone(),
        leaves: leaves.name.clone(),
        enters: entering.name.clone(),
    };

    let mut staying = stays.clone();
    staying.tactical_offset = 0;
    let (court_a, court_b) = match winner {
        TeamSide::A => (staying, entering),
        TeamSide::B => (entering, staying),
    };

    RotationOutcome { court_a, court_b, queue: next_queue, report }
}

fn collect_pool(
    players: &[Player],
    court_a: &Roster,
    court_b: &Roster,
    queue: &[Roster],
) -> Vec<Player> {
    let mut pool = Vec::new();
    pool.extend(court_a.players.iter().cloned());
    pool.extend(court_b.players.iter().cloned());
    for team in queue {
        pool.extend(team.players.iter().cloned());
    }
    // Extra pool entries last; skip ids already on a court or in the queue.
    for player in players {
        if !pool.iter().any(|known| known.id == player.id) {
            pool.push(player.clone());
        }
    }
    pool
}

fn split_pool(
    mut pool: Vec<Player>,
    court_a: &Roster,
    court_b: &Roster,
    court_limit: usize,
) -> TeamDistribution {
    let take = |pool: &mut Vec<Player>, n: usize| -> Vec<Player> {
        let n = n.min(pool.len());
        pool.drain(..n).collect()
    };
    let side_a = take(&mut pool, court_limit);
    let side_b = take(&mut pool, court_limit);

    TeamDistribution {
        court_a: Roster::new(court_a.name.clone(), side_a),
        court_b: Roster::new(court_b.name.clone(), side_b),
        queue: chunk_queue(pool, court_limit),
    }
}

fn chunk_queue(rest: Vec<Player>, court_limit: usize) -> Vec<Roster> {
    let size = court_limit.max(1);
    rest.chunks(size)
        .enumerate()
        .map(|(index, chunk)| Roster::new(format!("Waiting {}", index + 1), chunk.to_vec()))
        .collect()
}

/// Shipped `MatchHost`: the pure collaborators above plus a two-timeouts-per-
/// set policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHost;

impl MatchHost for StandardHost {
    fn distribute_standard(
        &self,
        players: &[Player],
        court_a: &Roster,
        court_b: &Roster,
        queue: &[Roster],
        court_limit: usize,
    ) -> TeamDistribution {
        distribute_standard(players, court_a, court_b, queue, court_limit)
    }

    fn balance_teams_snake(
        &self,
        players: &[Player],
        court_a: &Roster,
        court_b: &Roster,
        queue: &[Roster],
        court_limit: usize,
    ) -> TeamDistribution {
        balance_teams_snake(players, court_a, court_b, queue, court_limit)
    }

    fn handle_rotate(
        &self,
        team_a: &Roster,
        team_b: &Roster,
        queue: &[Roster],
        winner: TeamSide,
        rotation_mode: RotationMode,
        court_limit: usize,
    ) -> RotationOutcome {
        handle_rotate(team_a, team_b, queue, winner, rotation_mode, court_limit)
    }

    fn is_valid_timeout_request(&self, current_count: u8) -> bool {
        current_count < TIMEOUTS_PER_SET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(ids: &[(&str, u8)]) -> Vec<Player> {
        ids.iter().map(|(id, skill)| Player::with_skill(*id, *id, *skill)).collect()
    }

    fn roster(name: &str, ids: &[(&str, u8)]) -> Roster {
        Roster::new(name, players(ids))
    }

    #[test]
    fn test_distribute_standard_fills_courts_then_queue() {
        let court_a = roster("Aces", &[("a1", 0), ("a2", 0), ("a3", 0)]);
        let court_b = roster("Blockers", &[("b1", 0)]);
        let extra = players(&[("x1", 0), ("x2", 0)]);

        let out = distribute_standard(&extra, &court_a, &court_b, &[], 2);
        assert_eq!(out.court_a.player_ids(), vec!["a1", "a2"]);
        assert_eq!(out.court_b.player_ids(), vec!["a3", "b1"]);
        assert_eq!(out.queue.len(), 1);
        assert_eq!(out.queue[0].player_ids(), vec!["x1", "x2"]);
    }

    #[test]
    fn test_distribute_standard_skips_duplicate_pool_entries() {
        let court_a = roster("Aces", &[("a1", 0)]);
        let court_b = roster("Blockers", &[("b1", 0)]);
        // "a1" is already on court A and must not appear twice.
        let extra = players(&[("a1", 0), ("x1", 0)]);

        let out = distribute_standard(&extra, &court_a, &court_b, &[], 2);
        let all: Vec<&str> = out
            .court_a
            .players
            .iter()
            .chain(&out.court_b.players)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(all, vec!["a1", "b1", "x1"]);
        assert!(out.queue.is_empty());
    }

    #[test]
    fn test_snake_balancing_alternates_top_skill() {
        let pool = players(&[("p90", 90), ("p80", 80), ("p70", 70), ("p60", 60)]);
        let out = balance_teams_snake(&pool, &Roster::empty("A"), &Roster::empty("B"), &[], 2);

        // snake A B B A: A gets 90+60, B gets 80+70
        assert_eq!(out.court_a.player_ids(), vec!["p90", "p60"]);
        assert_eq!(out.court_b.player_ids(), vec!["p80", "p70"]);
    }

    #[test]
    fn test_winner_stays_exchange() {
        let court_a = roster("Aces", &[("a1", 0)]);
        let court_b = roster("Blockers", &[("b1", 0)]);
        let queue = vec![roster("Crushers", &[("c1", 0)])];

        let out =
            handle_rotate(&court_a, &court_b, &queue, TeamSide::A, RotationMode::WinnerStays, 2);
        assert_eq!(out.court_a.name, "Aces");
        assert_eq!(out.court_b.name, "Crushers");
        assert_eq!(out.queue.len(), 1);
        assert_eq!(out.queue[0].name, "Blockers");
        assert_eq!(out.report.stays, "Aces");
        assert_eq!(out.report.leaves, "Blockers");
        assert_eq!(out.report.enters, "Crushers");
    }

    #[test]
    fn test_exchange_without_queue_keeps_both_teams() {
        let court_a = roster("Aces", &[("a1", 0)]);
        let court_b = roster("Blockers", &[("b1", 0)]);

        let out = handle_rotate(&court_a, &court_b, &[], TeamSide::B, RotationMode::WinnerStays, 2);
        assert_eq!(out.court_a.name, "Aces");
        assert_eq!(out.court_b.name, "Blockers");
        assert!(out.queue.is_empty());
    }

    #[test]
    fn test_timeout_policy_limit() {
        let host = StandardHost;
        assert!(host.is_valid_timeout_request(0));
        assert!(host.is_valid_timeout_request(1));
        assert!(!host.is_valid_timeout_request(2));
    }
}
