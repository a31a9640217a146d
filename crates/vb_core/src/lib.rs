//! # vb_core - Deterministic Volleyball Match Scoring Core
//!
//! This library is the match state machine behind the scoreboard UI:
//! point/set/match transition rules, automatic serve rotation with the
//! first-side-out exemption, special deuce handling, and full undo backed by
//! a two-tier action log.
//!
//! ## Design
//! - Every transition is a pure function `(MatchState, Action) -> MatchState`
//! - Rejected actions return the input unchanged; nothing throws
//! - Policy the core does not own (timeout limits, roster exchange) is
//!   injected through the `MatchHost` trait
//! - JSON API for easy integration with engine hosts

// Collaborator signatures mirror the host protocol, parameters and all
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod host;
pub mod models;
pub mod roster_ops;
pub mod rotation;
pub mod scoring;
pub mod state;

// Re-export main API functions
pub use api::{apply_action_json, new_match_json, DispatchRequest, NewMatchRequest};
pub use error::{Result, ScoreboardError};

// Re-export the state machine
pub use engine::{apply, LogEntry, MatchAction};
pub use state::{MatchState, SetHistory};

// Re-export model types
pub use host::{MatchHost, RotationOutcome, RotationReport, TeamDistribution};
pub use models::{
    DeuceType, MatchConfig, MatchMode, Player, Roster, RotationDirection, RotationMode, TeamSide,
};
pub use roster_ops::StandardHost;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
