//! Error types for match scoring and configuration.

use std::io;

use thiserror::Error;

use crate::scoring::GamePoint;
use crate::team::Team;

/// Errors raised when a transition is requested on a snapshot that cannot take it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A point was scored after the match was decided.
    #[error("match is already finished")]
    MatchAlreadyFinished,
    /// Deuce resolution was entered while neither side stood at Forty or Advantage.
    #[error(
        "deuce resolution entered in invalid state: team={team} team points={team_points} other points={other_points}"
    )]
    InvalidDeuceState {
        /// The side that won the point.
        team: Team,
        /// Its point value.
        team_points: GamePoint,
        /// The opponent's point value.
        other_points: GamePoint,
    },
    /// Undo was requested on a snapshot with no predecessor.
    #[error("no history to undo")]
    EmptyHistoryUndo,
}

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Errors raised while loading a [`MatchConfig`](crate::MatchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Only best-of-3 and best-of-5 matches exist.
    #[error("unsupported number of sets: {0} (expected 3 or 5)")]
    UnsupportedSets(u8),
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    /// The config document is malformed.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
