//! Script runner for the scoreboard CLI.
//!
//! A script is one JSON action per line (blank lines and `#` comments
//! allowed), applied in order through the core reducer with the standard
//! host. The binary in `main.rs` is argument parsing around this.

use anyhow::{Context, Result};

use vb_core::{apply, MatchAction, MatchState, StandardHost, TeamSide};

/// Apply every action in `script` to `state`, returning the final state and
/// the number of actions applied.
pub fn run_script(state: MatchState, script: &str) -> Result<(MatchState, usize)> {
    let mut current = state;
    let mut applied = 0;

    for (line_number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: MatchAction = serde_json::from_str(line)
            .with_context(|| format!("invalid action on line {}", line_number + 1))?;
        current = apply(&current, &action, &StandardHost);
        applied += 1;
    }

    Ok((current, applied))
}

/// Human-readable scoreboard summary.
pub fn scoreboard_lines(state: &MatchState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {} - {} {}  (set {})",
        state.team_a.name, state.score_a, state.score_b, state.team_b.name, state.current_set
    ));
    lines.push(format!("Sets: {} - {}", state.sets_a, state.sets_b));

    match state.serving_team {
        Some(TeamSide::A) => lines.push(format!("Serving: {}", state.team_a.name)),
        Some(TeamSide::B) => lines.push(format!("Serving: {}", state.team_b.name)),
        None => {}
    }
    if state.in_sudden_death {
        lines.push("Sudden death!".to_string());
    }
    if state.pending_side_switch {
        lines.push("Switch sides".to_string());
    }

    for set in &state.history {
        lines.push(format!(
            "  Set {}: {} - {} ({:?})",
            set.set_number, set.score_a, set.score_b, set.winner
        ));
    }

    if let Some(winner) = state.match_winner {
        let name = match winner {
            TeamSide::A => &state.team_a.name,
            TeamSide::B => &state.team_b.name,
        };
        lines.push(format!("Match over: {} wins", name));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use vb_core::{MatchConfig, Player, Roster};

    fn test_state() -> MatchState {
        let players = |prefix: &str| {
            (1..=6)
                .map(|i| Player::new(format!("{prefix}{i}"), format!("{prefix}{i}")))
                .collect::<Vec<_>>()
        };
        MatchState::new(
            MatchConfig::default(),
            Roster::new("Aces", players("a")),
            Roster::new("Blockers", players("b")),
        )
    }

    #[test]
    fn test_run_script_applies_actions_in_order() {
        let script = r#"
# two points for A, one for B, then take one back
{"type": "POINT", "team": "A"}
{"type": "POINT", "team": "A"}
{"type": "POINT", "team": "B"}
{"type": "SUBTRACT_POINT", "team": "A"}
"#;
        let (state, applied) = run_script(test_state(), script).unwrap();
        assert_eq!(applied, 4);
        assert_eq!((state.score_a, state.score_b), (1, 1));
    }

    #[test]
    fn test_run_script_rejects_bad_line_with_location() {
        let script = "{\"type\": \"POINT\", \"team\": \"A\"}\nnot an action\n";
        let err = run_script(test_state(), script).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_scoreboard_lines_show_match_winner() {
        let mut state = test_state();
        state.is_match_over = true;
        state.match_winner = Some(vb_core::TeamSide::B);

        let lines = scoreboard_lines(&state);
        assert!(lines.iter().any(|line| line == "Match over: Blockers wins"));
    }
}
