use serde::{Deserialize, Serialize};

/// Play mode; determines court size and the side-switch cadence in beach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Indoor,
    Beach,
}

impl MatchMode {
    /// Players per court for this mode.
    pub fn court_size(&self) -> usize {
        match self {
            MatchMode::Indoor => 6,
            MatchMode::Beach => 2,
        }
    }
}

/// Deuce handling once both teams reach target - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeuceType {
    /// Play on until a two-point lead.
    #[default]
    None,
    /// Reset to 0-0 and race to 3 with a strict lead.
    SuddenDeath3pt,
}

/// How teams exchange with the waiting queue after a match.
///
/// Carried in config; interpreted only by the rotation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Winner stays on court, loser joins the back of the queue.
    #[default]
    WinnerStays,
}

/// Match rules plus carried-through host preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub mode: MatchMode,
    pub points_per_set: u16,
    pub max_sets: u8,
    #[serde(default)]
    pub has_tie_break: bool,
    #[serde(default)]
    pub tie_break_points: u16,
    #[serde(default)]
    pub deuce_type: DeuceType,
    #[serde(default)]
    pub rotation_mode: RotationMode,
    /// Host preference, not interpreted by the core.
    #[serde(default)]
    pub sound_enabled: bool,
    /// Host preference, not interpreted by the core.
    #[serde(default)]
    pub voice_control_enabled: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Indoor,
            points_per_set: 25,
            max_sets: 3,
            has_tie_break: true,
            tie_break_points: 15,
            deuce_type: DeuceType::None,
            rotation_mode: RotationMode::WinnerStays,
            sound_enabled: false,
            voice_control_enabled: false,
        }
    }
}

impl MatchConfig {
    /// Sets needed to win the match: first past half of `max_sets`.
    pub fn sets_to_win(&self) -> u8 {
        self.max_sets / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_to_win() {
        let mut config = MatchConfig::default();
        assert_eq!(config.sets_to_win(), 2); // best of 3

        config.max_sets = 5;
        assert_eq!(config.sets_to_win(), 3); // best of 5

        config.max_sets = 1;
        assert_eq!(config.sets_to_win(), 1);
    }

    #[test]
    fn test_court_size_by_mode() {
        assert_eq!(MatchMode::Indoor.court_size(), 6);
        assert_eq!(MatchMode::Beach.court_size(), 2);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"points_per_set":21,"max_sets":3}"#).unwrap();
        assert_eq!(config.points_per_set, 21);
        assert_eq!(config.mode, MatchMode::Indoor);
        assert_eq!(config.deuce_type, DeuceType::None);
        assert!(!config.has_tie_break);
    }
}
