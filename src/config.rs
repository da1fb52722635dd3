//! Match configuration.
//!
//! A [`MatchConfig`] is fixed for the lifetime of a match. It is usually
//! built in code, but can also be loaded from JSON:
//!
//! ```json
//! {
//!   "sets": 3,
//!   "scoringMode": "starPoint",
//!   "superTieBreak": true,
//!   "teamNames": { "A": "Alpha", "B": "Beta" },
//!   "firstServer": "B"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::team::Team;

/// Match length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BestOf {
    /// First to two sets.
    #[default]
    Three,
    /// First to three sets.
    Five,
}

impl BestOf {
    /// Sets a side must win to take the match.
    #[must_use]
    pub const fn sets_to_win(self) -> u32 {
        match self {
            BestOf::Three => 2,
            BestOf::Five => 3,
        }
    }
}

impl TryFrom<u8> for BestOf {
    type Error = ConfigError;

    fn try_from(sets: u8) -> Result<Self, Self::Error> {
        match sets {
            3 => Ok(BestOf::Three),
            5 => Ok(BestOf::Five),
            other => Err(ConfigError::UnsupportedSets(other)),
        }
    }
}

impl From<BestOf> for u8 {
    fn from(best_of: BestOf) -> u8 {
        match best_of {
            BestOf::Three => 3,
            BestOf::Five => 5,
        }
    }
}

/// How a game is decided once both sides reach Forty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMode {
    /// Classic deuce and advantage.
    #[default]
    Advantage,
    /// The first point from deuce wins the game.
    GoldenPoint,
    /// Advantage until two advantages are lost, then golden point.
    StarPoint,
}

/// Display names for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamNames {
    /// Name of side A.
    #[serde(rename = "A")]
    pub a: String,
    /// Name of side B.
    #[serde(rename = "B")]
    pub b: String,
}

impl TeamNames {
    /// Name for one side.
    #[must_use]
    pub fn get(&self, team: Team) -> &str {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }
}

/// Rules for a single match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    /// Best of three or five sets.
    pub sets: BestOf,
    /// Deuce resolution rule.
    pub scoring_mode: ScoringMode,
    /// Whether a deciding set at 6-6 is settled by a tie-break to 10.
    pub super_tie_break: bool,
    /// Optional display names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_names: Option<TeamNames>,
    /// Side serving the first game (A when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_server: Option<Team>,
}

impl MatchConfig {
    /// Create a config with no super tie-break, no names and A serving first.
    #[must_use]
    pub const fn new(sets: BestOf, scoring_mode: ScoringMode) -> Self {
        Self {
            sets,
            scoring_mode,
            super_tie_break: false,
            team_names: None,
            first_server: None,
        }
    }

    /// Enable or disable the final-set super tie-break.
    #[must_use]
    pub const fn with_super_tie_break(mut self, enabled: bool) -> Self {
        self.super_tie_break = enabled;
        self
    }

    /// Set display names for both sides.
    #[must_use]
    pub fn with_team_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.team_names = Some(TeamNames {
            a: a.into(),
            b: b.into(),
        });
        self
    }

    /// Choose who serves the first game.
    #[must_use]
    pub const fn with_first_server(mut self, team: Team) -> Self {
        self.first_server = Some(team);
        self
    }

    /// Sets a side must win to take the match.
    #[must_use]
    pub const fn sets_to_win(&self) -> u32 {
        self.sets.sets_to_win()
    }

    /// Side serving the first game.
    #[must_use]
    pub fn first_server(&self) -> Team {
        self.first_server.unwrap_or(Team::A)
    }

    /// Parse a config from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or `sets` is not 3 or 5.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sets_to_win() {
        assert_eq!(BestOf::Three.sets_to_win(), 2);
        assert_eq!(BestOf::Five.sets_to_win(), 3);
    }

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.sets, BestOf::Three);
        assert_eq!(config.scoring_mode, ScoringMode::Advantage);
        assert!(!config.super_tie_break);
        assert_eq!(config.first_server(), Team::A);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "sets": 5,
            "scoringMode": "starPoint",
            "superTieBreak": true,
            "teamNames": { "A": "Alpha", "B": "Beta" },
            "firstServer": "B"
        }"#;
        let config = MatchConfig::from_json_str(json).unwrap();
        assert_eq!(config.sets, BestOf::Five);
        assert_eq!(config.scoring_mode, ScoringMode::StarPoint);
        assert!(config.super_tie_break);
        assert_eq!(config.team_names.as_ref().unwrap().get(Team::B), "Beta");
        assert_eq!(config.first_server(), Team::B);
    }

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{ "sets": 3, "scoringMode": "goldenPoint", "superTieBreak": false }"#;
        let config = MatchConfig::from_json_str(json).unwrap();
        assert_eq!(config, MatchConfig::new(BestOf::Three, ScoringMode::GoldenPoint));
    }

    #[test]
    fn test_rejects_unsupported_sets() {
        let json = r#"{ "sets": 4, "scoringMode": "advantage", "superTieBreak": false }"#;
        let err = MatchConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("unsupported number of sets: 4"));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let json = r#"{ "sets": 3, "scoringMode": "noAd", "superTieBreak": false }"#;
        assert!(MatchConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_round_trip_json() {
        let config = MatchConfig::new(BestOf::Five, ScoringMode::GoldenPoint)
            .with_super_tie_break(true)
            .with_team_names("Alpha", "Beta")
            .with_first_server(Team::B);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""sets":5"#));
        assert!(json.contains(r#""scoringMode":"goldenPoint""#));
        assert_eq!(MatchConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sets": 3, "scoringMode": "advantage", "superTieBreak": true }}"#
        )
        .unwrap();

        let config = MatchConfig::load(file.path()).unwrap();
        assert!(config.super_tie_break);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatchConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
