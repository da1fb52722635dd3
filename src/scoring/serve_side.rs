//! Court side of the next serve.

use std::fmt;

use serde::Serialize;

use crate::scoring::{GamePoint, MatchPhase, MatchState};

/// Half of the court the next serve is delivered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtSide {
    /// Deuce court.
    Right,
    /// Advantage court.
    Left,
}

impl CourtSide {
    const fn from_points_played(points: u32) -> Self {
        if points % 2 == 0 {
            CourtSide::Right
        } else {
            CourtSide::Left
        }
    }
}

impl fmt::Display for CourtSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourtSide::Right => f.pad("right"),
            CourtSide::Left => f.pad("left"),
        }
    }
}

/// Court side for the next serve, for display.
#[must_use]
pub fn serving_side(state: &MatchState) -> CourtSide {
    if state.phase() == MatchPhase::Finished {
        return CourtSide::Right;
    }
    if let Some(tie_break) = state.tie_break() {
        return CourtSide::from_points_played(tie_break.points_played());
    }

    let a = state.score().a.points;
    let b = state.score().b.points;
    if a == GamePoint::Forty && b == GamePoint::Forty {
        return CourtSide::Right;
    }
    if a == GamePoint::Advantage || b == GamePoint::Advantage {
        return CourtSide::Left;
    }
    CourtSide::from_points_played(a.ordinal() + b.ordinal())
}
