//! Match scoring engine.
//!
//! Implements the rules of a two-sided tennis-style match:
//! - Point progression within a game (Love, Fifteen, Thirty, Forty)
//! - Deuce resolution (advantage, golden point, star point)
//! - Game, set and match roll-up
//! - Tie-breaks and final-set super tie-breaks with serve rotation
//! - Announcements and serving-side projection
//! - Undo through immutable snapshot history

mod announce;
mod deuce;
mod engine;
mod invariants;
mod points;
mod serve;
mod serve_side;
mod state;
mod tiebreak;
mod undo;

pub use announce::{AnnounceOptions, announce_score, format_announcement};
pub use deuce::{DeuceOutcome, DeucePolicy, GameDeuceState, initial_deuce_state, resolve_deuce};
pub use engine::apply_point;
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use points::GamePoint;
pub use serve::{tie_break_server, toggle_serve};
pub use serve_side::{CourtSide, serving_side};
pub use state::{History, HistoryIter, MatchPhase, MatchState, Score, TeamScore, create_match};
pub use tiebreak::{SUPER_TIE_BREAK_TARGET, TIE_BREAK_TARGET, TieBreakPoint, TieBreakState};
pub use undo::undo;
