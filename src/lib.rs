// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Deuce: a deterministic rules engine for tennis-style match scoring.
//!
//! This crate tracks a two-sided match point by point:
//! - Advantage, golden point and star point deuce rules
//! - Best-of-three and best-of-five matches
//! - Tie-breaks and final-set super tie-breaks with serve rotation
//! - Announcements and serving-side projection
//! - Undo through immutable, structurally shared snapshots
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Replay (point streams, undo)      │
//! ├─────────────────────────────────────┤
//! │   Match transition engine           │
//! ├──────────────┬──────────┬───────────┤
//! │ Deuce policy │ Tie-break│ Serve     │
//! └──────────────┴──────────┴───────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use deuce::{BestOf, MatchConfig, ScoringMode, Team, apply_point, create_match, undo};
//!
//! let start = create_match(MatchConfig::new(BestOf::Three, ScoringMode::GoldenPoint));
//! let next = apply_point(&start, Team::A)?;
//! assert_eq!(next.announcement(), Some("Fifteen — Love"));
//! assert_eq!(undo(&next)?, start);
//! # Ok::<(), deuce::ScoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod replay;
pub mod scoring;
pub mod team;

pub use config::{BestOf, MatchConfig, ScoringMode, TeamNames};
pub use error::{ConfigError, ScoreError, ScoreResult};
pub use team::{PerTeam, Team};

// Re-export the engine surface at crate root for convenience
pub use scoring::{
    AnnounceOptions, CourtSide, GameDeuceState, GamePoint, MatchPhase, MatchState,
    TieBreakState, apply_point, create_match, format_announcement, serving_side, undo,
};
