use serde::{Deserialize, Serialize};

use super::Player;

/// Court side identifier. Scores, serves, and log entries are keyed by side;
/// physical left/right placement is the host's concern (`swapped_sides`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

/// Direction of a lineup rotation.
///
/// Clockwise is the competition rotation: the last player moves to the front
/// (into the serving position). Counter-clockwise is its exact inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn opposite(&self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// A team's on-court lineup, in rotation order (index 0 = serving position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub name: String,
    pub players: Vec<Player>,
    /// Per-lineup tactical adjustment; must return to 0 whenever the lineup
    /// order changes structurally.
    #[serde(default)]
    pub tactical_offset: i8,
}

impl Roster {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { name: name.into(), players, tactical_offset: 0 }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Shift the lineup by exactly one position and zero the tactical offset.
    pub fn rotate(&mut self, direction: RotationDirection) {
        if self.players.len() > 1 {
            match direction {
                RotationDirection::Clockwise => {
                    // last -> front
                    if let Some(player) = self.players.pop() {
                        self.players.insert(0, player);
                    }
                }
                RotationDirection::CounterClockwise => {
                    // front -> last
                    let player = self.players.remove(0);
                    self.players.push(player);
                }
            }
        }
        self.tactical_offset = 0;
    }

    pub fn player_ids(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.id.as_str()).collect()
    }
}
