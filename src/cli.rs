//! CLI command implementations for Deuce.

pub(crate) mod play;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use deuce::{ScoringMode, Team};
use std::error::Error;
use std::fmt;
use tracing::Level;

/// Output format for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Deuce rule selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Classic advantage.
    Advantage,
    /// Sudden death at deuce.
    GoldenPoint,
    /// Advantage twice, then sudden death.
    StarPoint,
}

impl From<ModeArg> for ScoringMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Advantage => ScoringMode::Advantage,
            ModeArg::GoldenPoint => ScoringMode::GoldenPoint,
            ModeArg::StarPoint => ScoringMode::StarPoint,
        }
    }
}

/// Side selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TeamArg {
    /// Side A.
    A,
    /// Side B.
    B,
}

impl From<TeamArg> for Team {
    fn from(team: TeamArg) -> Self {
        match team {
            TeamArg::A => Team::A,
            TeamArg::B => Team::B,
        }
    }
}

/// Install the stderr log subscriber.
pub(crate) fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<deuce::ConfigError> for CliError {
    fn from(e: deuce::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<deuce::replay::ReplayError> for CliError {
    fn from(e: deuce::replay::ReplayError) -> Self {
        Self::new(e.to_string())
    }
}
