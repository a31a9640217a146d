pub mod config;
pub mod player;
pub mod team;

pub use config::{DeuceType, MatchConfig, MatchMode, RotationMode};
pub use player::Player;
pub use team::{Roster, RotationDirection, TeamSide};
