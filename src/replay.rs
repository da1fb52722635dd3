//! Point-stream replay.
//!
//! Because scoring is 100% deterministic, a match is fully described by:
//! - `config: MatchConfig` - the rules
//! - `commands: Vec<Command>` - points won and undos, in order
//!
//! To view the match after command N, re-run the stream from the start.
//!
//! Streams are written as tokens separated by whitespace or commas
//! (`A B B undo A`) or compactly (`ABBUA`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::ScoreError;
use crate::scoring::{MatchState, apply_point, create_match, undo};
use crate::team::Team;

/// One entry of a point stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// A point won by the given side.
    Point(Team),
    /// Take back the previous point.
    Undo,
}

impl Command {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Command::Point(Team::A)),
            'B' => Some(Command::Point(Team::B)),
            'U' => Some(Command::Undo),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Point(team) => fmt::Display::fmt(team, f),
            Command::Undo => f.pad("undo"),
        }
    }
}

impl FromStr for Command {
    type Err = ReplayError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.eq_ignore_ascii_case("undo") {
            return Ok(Command::Undo);
        }
        let mut chars = token.chars();
        match (chars.next().and_then(Command::from_char), chars.next()) {
            (Some(command), None) => Ok(command),
            _ => Err(ReplayError::InvalidCommand {
                token: token.to_owned(),
            }),
        }
    }
}

/// Error type for replay operations.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The stream contains something other than `A`, `B`, `U` or `undo`.
    #[error("invalid token {token:?} at command {position}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Index of the command it would have been.
        position: usize,
    },
    /// A single token is not `A`, `B`, `U` or `undo`.
    #[error("invalid command {token:?}")]
    InvalidCommand {
        /// The offending token.
        token: String,
    },
    /// The engine rejected a command.
    #[error("command {step} rejected: {source}")]
    Rejected {
        /// Index of the rejected command.
        step: usize,
        /// Why it was rejected.
        #[source]
        source: ScoreError,
    },
    /// Requested position lies outside the stream.
    #[error("position {requested} out of bounds (stream has {len} commands)")]
    OutOfBounds {
        /// Requested position.
        requested: usize,
        /// Number of commands in the stream.
        len: usize,
    },
}

/// Parse a point stream.
///
/// # Errors
///
/// Returns [`ReplayError::InvalidToken`] for anything that is not a side,
/// `U` or `undo`.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, ReplayError> {
    let mut commands = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if token.eq_ignore_ascii_case("undo") {
            commands.push(Command::Undo);
            continue;
        }
        for c in token.chars() {
            let command = Command::from_char(c).ok_or_else(|| ReplayError::InvalidToken {
                token: token.to_owned(),
                position: commands.len(),
            })?;
            commands.push(command);
        }
    }
    Ok(commands)
}

/// A match's rules together with its command stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    /// Rules of the match.
    pub config: MatchConfig,
    /// Commands in order.
    pub commands: Vec<Command>,
}

impl Recording {
    /// Create a new recording.
    #[must_use]
    pub fn new(config: MatchConfig, commands: Vec<Command>) -> Self {
        Self { config, commands }
    }

    /// Parse the command stream and pair it with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream does not parse.
    pub fn parse(config: MatchConfig, stream: &str) -> Result<Self, ReplayError> {
        Ok(Self::new(config, parse_commands(stream)?))
    }
}

/// Replay engine - steps through a recording deterministically.
///
/// - Step forward by applying the next command
/// - Step backward by replaying from the start
/// - Jump to any position by replaying from the start
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    recording: Recording,
    state: MatchState,
    position: usize,
}

impl ReplayEngine {
    /// Create a replay engine positioned before the first command.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        let state = create_match(recording.config.clone());
        Self {
            recording,
            state,
            position: 0,
        }
    }

    /// Create a replay engine positioned after `target` commands.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` exceeds the stream or a command is rejected.
    pub fn new_at(recording: Recording, target: usize) -> Result<Self, ReplayError> {
        let len = recording.commands.len();
        if target > len {
            return Err(ReplayError::OutOfBounds {
                requested: target,
                len,
            });
        }
        let mut engine = Self::new(recording);
        while engine.position < target {
            engine.step_forward()?;
        }
        Ok(engine)
    }

    /// Get the recording.
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Commands applied so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot after the applied commands.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Whether every command has been applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position == self.recording.commands.len()
    }

    /// Apply the next command, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error at the end of the stream or if the engine rejects the command.
    pub fn step_forward(&mut self) -> Result<Command, ReplayError> {
        let len = self.recording.commands.len();
        let Some(&command) = self.recording.commands.get(self.position) else {
            return Err(ReplayError::OutOfBounds {
                requested: self.position + 1,
                len,
            });
        };

        let step = self.position;
        let next = match command {
            Command::Point(team) => apply_point(&self.state, team),
            Command::Undo => undo(&self.state),
        }
        .map_err(|source| ReplayError::Rejected { step, source })?;

        self.state = next;
        self.position += 1;
        Ok(command)
    }

    /// Step back one command.
    ///
    /// # Errors
    ///
    /// Returns an error if already at the start.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        let Some(target) = self.position.checked_sub(1) else {
            return Err(ReplayError::OutOfBounds {
                requested: 0,
                len: self.recording.commands.len(),
            });
        };
        self.goto(target)
    }

    /// Jump to the position after `target` commands.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is out of bounds or a command is rejected.
    pub fn goto(&mut self, target: usize) -> Result<(), ReplayError> {
        let recording = self.recording.clone();
        *self = Self::new_at(recording, target)?;
        debug!(position = target, "replay repositioned");
        Ok(())
    }
}

/// Play `commands` on a fresh match and return the final snapshot.
///
/// # Errors
///
/// Returns the first command the engine rejects.
pub fn replay(config: MatchConfig, commands: &[Command]) -> Result<MatchState, ReplayError> {
    replay_with(config, commands, |_, _, _| {})
}

/// Like [`replay`], calling `on_step` after each command.
///
/// # Errors
///
/// Returns the first command the engine rejects.
pub fn replay_with<F>(
    config: MatchConfig,
    commands: &[Command],
    mut on_step: F,
) -> Result<MatchState, ReplayError>
where
    F: FnMut(usize, Command, &MatchState),
{
    let mut engine = ReplayEngine::new(Recording::new(config, commands.to_vec()));
    while !engine.is_complete() {
        let step = engine.position();
        let command = engine.step_forward()?;
        on_step(step, command, engine.state());
    }
    Ok(engine.state)
}
