//! Scoreboard CLI
//!
//! Thin host around `vb_core`: create a match, apply single actions, or
//! replay an action script, passing state around as JSON files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vb_core::{
    apply, DeuceType, MatchAction, MatchConfig, MatchMode, MatchState, Roster, StandardHost,
};

#[derive(Parser)]
#[command(name = "vb_cli")]
#[command(about = "Volleyball scoreboard driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh match and print its state JSON
    New {
        /// Team A name
        #[arg(long, default_value = "Team A")]
        team_a: String,

        /// Team B name
        #[arg(long, default_value = "Team B")]
        team_b: String,

        /// Beach rules (2 per side, side-switch signals)
        #[arg(long, default_value = "false")]
        beach: bool,

        /// Points per regular set
        #[arg(long, default_value = "25")]
        points: u16,

        /// Maximum sets
        #[arg(long, default_value = "3")]
        sets: u8,

        /// Sudden-death deuce (race to 3) instead of two-point advantage
        #[arg(long, default_value = "false")]
        sudden_death: bool,

        /// Output state file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Apply one action (inline JSON) to a state file
    Apply {
        /// Input state JSON file
        #[arg(long)]
        state: PathBuf,

        /// Action JSON, e.g. '{"type":"POINT","team":"A"}'
        #[arg(long)]
        action: String,

        /// Output state file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replay an action script (one JSON action per line) and print the board
    Replay {
        /// Input state JSON file
        #[arg(long)]
        state: PathBuf,

        /// Script file
        #[arg(long)]
        script: PathBuf,

        /// Output state file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { team_a, team_b, beach, points, sets, sudden_death, out } => {
            let config = MatchConfig {
                mode: if beach { MatchMode::Beach } else { MatchMode::Indoor },
                points_per_set: points,
                max_sets: sets,
                deuce_type: if sudden_death { DeuceType::SuddenDeath3pt } else { DeuceType::None },
                ..MatchConfig::default()
            };
            let state = MatchState::new(config, Roster::empty(team_a), Roster::empty(team_b));
            write_state(&state, out.as_deref())?;
        }

        Commands::Apply { state, action, out } => {
            let current = read_state(&state)?;
            let action: MatchAction =
                serde_json::from_str(&action).context("invalid action JSON")?;
            let next = apply(&current, &action, &StandardHost);
            write_state(&next, out.as_deref())?;
        }

        Commands::Replay { state, script, out } => {
            let current = read_state(&state)?;
            let script_text = std::fs::read_to_string(&script)
                .with_context(|| format!("reading script {}", script.display()))?;

            let (next, applied) = vb_cli::run_script(current, &script_text)?;
            println!("Applied {} actions", applied);
            for line in vb_cli::scoreboard_lines(&next) {
                println!("{line}");
            }
            write_state(&next, out.as_deref())?;
        }
    }

    Ok(())
}

fn read_state(path: &std::path::Path) -> Result<MatchState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading state {}", path.display()))?;
    serde_json::from_str(&text).context("invalid state JSON")
}

fn write_state(state: &MatchState, out: Option<&std::path::Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing state {}", path.display()))?;
            println!("State written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
