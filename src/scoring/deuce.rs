//! Deuce resolution.
//!
//! Once both sides stand at Forty the configured [`ScoringMode`] decides what
//! the next point does. Star point plays advantage until two advantages have
//! been broken back to deuce, then switches to sudden death for the rest of
//! the game.

use serde::Serialize;

use crate::config::ScoringMode;
use crate::error::{ScoreError, ScoreResult};
use crate::scoring::GamePoint;
use crate::team::Team;

/// Star-point counter of advantages broken back to deuce in the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDeuceState {
    failed_advantage_resets: u8,
}

impl GameDeuceState {
    /// Broken advantages after which the game goes to sudden death.
    pub const MAX_FAILED_ADVANTAGES: u8 = 2;

    /// Counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            failed_advantage_resets: 0,
        }
    }

    /// Advantages broken back to deuce so far (0..=2).
    #[must_use]
    pub const fn failed_advantage_resets(self) -> u8 {
        self.failed_advantage_resets
    }

    /// Record one more broken advantage, capped at the maximum.
    #[must_use]
    pub const fn bump(self) -> Self {
        let next = self.failed_advantage_resets + 1;
        Self {
            failed_advantage_resets: if next > Self::MAX_FAILED_ADVANTAGES {
                Self::MAX_FAILED_ADVANTAGES
            } else {
                next
            },
        }
    }

    /// Whether the next point from deuce decides the game.
    #[must_use]
    pub const fn is_sudden_death(self) -> bool {
        self.failed_advantage_resets >= Self::MAX_FAILED_ADVANTAGES
    }
}

/// Deuce counter at the start of a game: present only under star point.
#[must_use]
pub const fn initial_deuce_state(mode: ScoringMode) -> Option<GameDeuceState> {
    match mode {
        ScoringMode::StarPoint => Some(GameDeuceState::new()),
        ScoringMode::Advantage | ScoringMode::GoldenPoint => None,
    }
}

/// Rule in force for the next point played from deuce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeucePolicy {
    /// Deuce goes to advantage.
    Advantage,
    /// Deuce is decided by the next point.
    SuddenDeath,
}

impl DeucePolicy {
    /// Policy for the current game.
    #[must_use]
    pub fn for_game(mode: ScoringMode, deuce: Option<GameDeuceState>) -> Self {
        match mode {
            ScoringMode::Advantage => DeucePolicy::Advantage,
            ScoringMode::GoldenPoint => DeucePolicy::SuddenDeath,
            ScoringMode::StarPoint => {
                if deuce.is_some_and(GameDeuceState::is_sudden_death) {
                    DeucePolicy::SuddenDeath
                } else {
                    DeucePolicy::Advantage
                }
            }
        }
    }
}

/// What a point played at deuce or advantage does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeuceOutcome {
    /// The scoring side wins the game.
    GameWon,
    /// The opponent's advantage is broken; both sides return to Forty.
    BackToDeuce,
    /// The scoring side takes the advantage.
    Advantage,
}

/// Resolve a point won by `team` at deuce or advantage.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidDeuceState`] when neither side is at deuce or
/// advantage.
pub fn resolve_deuce(
    policy: DeucePolicy,
    team: Team,
    team_points: GamePoint,
    other_points: GamePoint,
) -> ScoreResult<DeuceOutcome> {
    match (team_points, other_points) {
        (GamePoint::Advantage, _) => Ok(DeuceOutcome::GameWon),
        (_, GamePoint::Advantage) => Ok(DeuceOutcome::BackToDeuce),
        (GamePoint::Forty, GamePoint::Forty) => match policy {
            DeucePolicy::SuddenDeath => Ok(DeuceOutcome::GameWon),
            DeucePolicy::Advantage => Ok(DeuceOutcome::Advantage),
        },
        _ => Err(ScoreError::InvalidDeuceState {
            team,
            team_points,
            other_points,
        }),
    }
}
