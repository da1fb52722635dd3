//! Tie-break scoring.

use serde::Serialize;

use crate::team::{PerTeam, Team};

/// Target of a regular tie-break.
pub const TIE_BREAK_TARGET: u32 = 7;

/// Target of a final-set super tie-break.
pub const SUPER_TIE_BREAK_TARGET: u32 = 10;

/// Margin needed to close a tie-break.
const WINNING_MARGIN: u32 = 2;

/// Running score of a tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakState {
    #[serde(flatten)]
    points: PerTeam<u32>,
    target: u32,
    initial_server: Team,
}

/// Result of scoring one tie-break point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieBreakPoint {
    /// Tie-break score after the point.
    pub tie_break: TieBreakState,
    /// Set when the point closed the tie-break.
    pub winner: Option<Team>,
}

impl TieBreakPoint {
    /// Whether the point closed the tie-break.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.winner.is_some()
    }
}

impl TieBreakState {
    /// A fresh tie-break at 0-0.
    #[must_use]
    pub const fn new(target: u32, initial_server: Team) -> Self {
        Self {
            points: PerTeam::new(0, 0),
            target,
            initial_server,
        }
    }

    /// Points won by `team`.
    #[must_use]
    pub fn points(&self, team: Team) -> u32 {
        self.points[team]
    }

    /// Points needed to win (7 or 10).
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Side that served the first point.
    #[must_use]
    pub const fn initial_server(&self) -> Team {
        self.initial_server
    }

    /// Total points played so far.
    #[must_use]
    pub const fn points_played(&self) -> u32 {
        self.points.a + self.points.b
    }

    /// Whether `team` has reached the target with a two-point lead.
    #[must_use]
    pub fn is_won_by(&self, team: Team) -> bool {
        let mine = self.points[team];
        let theirs = self.points[team.opponent()];
        mine >= self.target && mine >= theirs + WINNING_MARGIN
    }

    /// Award a point to `team`.
    #[must_use]
    pub fn score_point(self, team: Team) -> TieBreakPoint {
        let mut tie_break = self;
        tie_break.points[team] += 1;
        let winner = tie_break.is_won_by(team).then_some(team);
        TieBreakPoint { tie_break, winner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(mut tb: TieBreakState, points: &[Team]) -> TieBreakPoint {
        let mut last = None;
        for &team in points {
            let point = tb.score_point(team);
            tb = point.tie_break;
            last = Some(point);
        }
        last.unwrap()
    }

    #[test]
    fn test_new_tie_break() {
        let tb = TieBreakState::new(TIE_BREAK_TARGET, Team::B);
        assert_eq!(tb.points(Team::A), 0);
        assert_eq!(tb.points(Team::B), 0);
        assert_eq!(tb.target(), 7);
        assert_eq!(tb.initial_server(), Team::B);
    }

    #[test]
    fn test_score_point_leaves_input_untouched() {
        let tb = TieBreakState::new(TIE_BREAK_TARGET, Team::A);
        let point = tb.score_point(Team::A);
        assert_eq!(point.tie_break.points(Team::A), 1);
        assert_eq!(tb.points(Team::A), 0);
        assert!(!point.won());
    }

    #[test]
    fn test_seven_love_wins() {
        let point = play(TieBreakState::new(TIE_BREAK_TARGET, Team::A), &[Team::A; 7]);
        assert!(point.won());
        assert_eq!(point.winner, Some(Team::A));
    }

    #[test]
    fn test_seven_six_does_not_win() {
        let mut points = vec![Team::A, Team::B];
        points = points.repeat(6);
        points.push(Team::A);
        let point = play(TieBreakState::new(TIE_BREAK_TARGET, Team::A), &points);
        assert_eq!(point.tie_break.points(Team::A), 7);
        assert_eq!(point.tie_break.points(Team::B), 6);
        assert!(!point.won());
    }

    #[test]
    fn test_extends_beyond_target() {
        let mut points = [Team::A, Team::B].repeat(12);
        points.extend([Team::B, Team::B]);
        let point = play(TieBreakState::new(TIE_BREAK_TARGET, Team::A), &points);
        assert_eq!(point.winner, Some(Team::B));
        assert_eq!(point.tie_break.points(Team::B), 14);
        assert_eq!(point.tie_break.points(Team::A), 12);
    }

    #[test]
    fn test_super_tie_break_needs_ten() {
        let point = play(TieBreakState::new(SUPER_TIE_BREAK_TARGET, Team::A), &[Team::A; 9]);
        assert!(!point.won());
        let point = point.tie_break.score_point(Team::A);
        assert_eq!(point.winner, Some(Team::A));
    }
}
