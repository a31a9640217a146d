use serde::Deserialize;

use crate::engine::{apply, MatchAction};
use crate::error::{Result, ScoreboardError};
use crate::models::{MatchConfig, Roster};
use crate::roster_ops::StandardHost;
use crate::state::MatchState;
use crate::SCHEMA_VERSION;

/// Request to create a fresh match.
#[derive(Debug, Deserialize)]
pub struct NewMatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub config: MatchConfig,
    pub team_a: Roster,
    pub team_b: Roster,
    #[serde(default)]
    pub queue: Vec<Roster>,
}

/// Request to apply one action to one state.
#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub schema_version: u8,
    pub state: MatchState,
    pub action: MatchAction,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(ScoreboardError::SchemaVersion { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Create a fresh match state from a `NewMatchRequest` JSON string.
pub fn new_match_json(request_json: &str) -> Result<String> {
    let request: NewMatchRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let state =
        MatchState::new(request.config, request.team_a, request.team_b).with_queue(request.queue);
    Ok(serde_json::to_string(&state)?)
}

/// Apply one action from a `DispatchRequest` JSON string; the response is the
/// serialized next state. Rejected transitions come back as the input state
/// (identity), exactly as the in-process API behaves.
pub fn apply_action_json(request_json: &str) -> Result<String> {
    let request: DispatchRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let next = apply(&request.state, &request.action, &StandardHost);
    Ok(serde_json::to_string(&next)?)
}
