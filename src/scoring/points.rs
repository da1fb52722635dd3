//! Point values within a regular game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A side's standing within the current game.
///
/// Ordered `Love < Fifteen < Thirty < Forty < Advantage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GamePoint {
    /// Zero points.
    #[default]
    #[serde(rename = "0")]
    Love,
    /// One point.
    #[serde(rename = "15")]
    Fifteen,
    /// Two points.
    #[serde(rename = "30")]
    Thirty,
    /// Three points.
    #[serde(rename = "40")]
    Forty,
    /// One point past deuce.
    #[serde(rename = "AD")]
    Advantage,
}

impl GamePoint {
    /// The next value up, or `None` from Advantage.
    #[must_use]
    pub const fn successor(self) -> Option<GamePoint> {
        match self {
            GamePoint::Love => Some(GamePoint::Fifteen),
            GamePoint::Fifteen => Some(GamePoint::Thirty),
            GamePoint::Thirty => Some(GamePoint::Forty),
            GamePoint::Forty => Some(GamePoint::Advantage),
            GamePoint::Advantage => None,
        }
    }

    /// Points won in the game (Love = 0, Advantage = 4).
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        match self {
            GamePoint::Love => 0,
            GamePoint::Fifteen => 1,
            GamePoint::Thirty => 2,
            GamePoint::Forty => 3,
            GamePoint::Advantage => 4,
        }
    }

    /// Spoken name used in announcements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GamePoint::Love => "Love",
            GamePoint::Fifteen => "Fifteen",
            GamePoint::Thirty => "Thirty",
            GamePoint::Forty => "Forty",
            GamePoint::Advantage => "AD",
        }
    }

    /// Scoreboard value (`0`, `15`, `30`, `40`, `AD`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePoint::Love => "0",
            GamePoint::Fifteen => "15",
            GamePoint::Thirty => "30",
            GamePoint::Forty => "40",
            GamePoint::Advantage => "AD",
        }
    }

    /// Forty or Advantage.
    #[must_use]
    pub const fn is_forty_or_better(self) -> bool {
        matches!(self, GamePoint::Forty | GamePoint::Advantage)
    }
}

impl fmt::Display for GamePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_chain() {
        let mut point = GamePoint::Love;
        let mut seen = vec![point];
        while let Some(next) = point.successor() {
            seen.push(next);
            point = next;
        }
        assert_eq!(
            seen,
            vec![
                GamePoint::Love,
                GamePoint::Fifteen,
                GamePoint::Thirty,
                GamePoint::Forty,
                GamePoint::Advantage
            ]
        );
    }

    #[test]
    fn test_ordering_matches_ordinal() {
        assert!(GamePoint::Love < GamePoint::Forty);
        assert!(GamePoint::Forty < GamePoint::Advantage);
        assert_eq!(GamePoint::Thirty.ordinal(), 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(GamePoint::Love.name(), "Love");
        assert_eq!(GamePoint::Advantage.name(), "AD");
        assert_eq!(GamePoint::Forty.to_string(), "40");
    }

    #[test]
    fn test_serde_uses_scoreboard_values() {
        assert_eq!(serde_json::to_string(&GamePoint::Fifteen).unwrap(), r#""15""#);
        let point: GamePoint = serde_json::from_str(r#""AD""#).unwrap();
        assert_eq!(point, GamePoint::Advantage);
    }
}
