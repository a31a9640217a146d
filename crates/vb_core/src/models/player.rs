use serde::{Deserialize, Serialize};

/// A rostered player.
///
/// The scoring core treats players as opaque value records; `skill` is read
/// only by the snake-balancing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Host-assigned identifier (stable across rotations)
    pub id: String,
    pub name: String,
    /// Relative skill rating (0-100), used for team balancing
    #[serde(default)]
    pub skill: u8,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), skill: 0 }
    }

    pub fn with_skill(id: impl Into<String>, name: impl Into<String>, skill: u8) -> Self {
        Self { id: id.into(), name: name.into(), skill }
    }
}
