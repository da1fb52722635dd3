//! Snapshot invariants - sanity checks that detect bugs.
//!
//! Every snapshot reachable through [`apply_point`](crate::apply_point) and
//! [`undo`](crate::undo) must pass these checks. A violation means the
//! transition logic is wrong, not that the caller misused the engine.

use crate::config::ScoringMode;
use crate::scoring::{GameDeuceState, GamePoint, MatchPhase, MatchState};
use crate::team::Team;

/// Games a side can hold in an open set.
const MAX_OPEN_SET_GAMES: u32 = 6;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all snapshot invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &MatchState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violation = |message: String| violations.push(InvariantViolation { message });

    let score = state.score();
    let completed_sets = score.a.sets + score.b.sets;

    for team in Team::ALL {
        let side = &score[team];

        if side.set_games.len() != completed_sets as usize + 1 {
            violation(format!(
                "Team {team} has {} set tallies after {completed_sets} completed sets",
                side.set_games.len()
            ));
        }
        if side.set_games.last() != Some(&side.games) {
            violation(format!(
                "Team {team} open set tally {:?} differs from games {}",
                side.set_games.last(),
                side.games
            ));
        }
        if side.games > MAX_OPEN_SET_GAMES {
            violation(format!(
                "Team {team} holds {} games in an open set",
                side.games
            ));
        }
        if side.sets > state.sets_to_win() {
            violation(format!(
                "Team {team} won {} sets, more than the {} needed",
                side.sets,
                state.sets_to_win()
            ));
        }
        if side.points == GamePoint::Advantage
            && score[team.opponent()].points != GamePoint::Forty
        {
            violation(format!(
                "Team {team} holds advantage while opponent is at {}",
                score[team.opponent()].points
            ));
        }
    }

    match (state.config().scoring_mode, state.deuce_state()) {
        (ScoringMode::StarPoint, None) => {
            violation("Star point match has no deuce counter".to_owned());
        }
        (ScoringMode::StarPoint, Some(deuce))
            if deuce.failed_advantage_resets() > GameDeuceState::MAX_FAILED_ADVANTAGES =>
        {
            violation(format!(
                "Deuce counter {} exceeds {}",
                deuce.failed_advantage_resets(),
                GameDeuceState::MAX_FAILED_ADVANTAGES
            ));
        }
        (ScoringMode::Advantage | ScoringMode::GoldenPoint, Some(_)) => {
            violation("Deuce counter present outside star point".to_owned());
        }
        _ => {}
    }

    match (state.phase(), state.tie_break()) {
        (MatchPhase::TieBreak | MatchPhase::SuperTieBreak, None) => {
            violation(format!("Phase {:?} without tie-break score", state.phase()));
        }
        (MatchPhase::InProgress | MatchPhase::Finished, Some(_)) => {
            violation(format!("Tie-break score during {:?}", state.phase()));
        }
        (_, Some(tie_break)) => {
            for team in Team::ALL {
                if tie_break.is_won_by(team) {
                    violation(format!("Tie-break already won by Team {team} but still open"));
                }
            }
            if score.a.games != MAX_OPEN_SET_GAMES || score.b.games != MAX_OPEN_SET_GAMES {
                violation(format!(
                    "Tie-break played at {}-{} games",
                    score.a.games, score.b.games
                ));
            }
        }
        _ => {}
    }

    match (state.phase(), state.winner()) {
        (MatchPhase::Finished, None) => {
            violation("Finished match has no winner".to_owned());
        }
        (MatchPhase::Finished, Some(winner)) => {
            if score[winner].sets != state.sets_to_win() {
                violation(format!(
                    "Winner Team {winner} holds {} sets, expected {}",
                    score[winner].sets,
                    state.sets_to_win()
                ));
            }
            if score[winner.opponent()].sets >= state.sets_to_win() {
                violation(format!("Loser Team {} also reached the set target", winner.opponent()));
            }
        }
        (_, Some(winner)) => {
            violation(format!("Unfinished match has winner Team {winner}"));
        }
        (_, None) => {}
    }

    violations
}

/// Assert all snapshot invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &MatchState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Match invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &MatchState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BestOf, MatchConfig};
    use crate::scoring::{TieBreakState, apply_point, create_match};

    fn create_valid_match() -> MatchState {
        create_match(MatchConfig::new(BestOf::Three, ScoringMode::StarPoint))
    }

    #[test]
    fn test_valid_match_passes() {
        let state = create_valid_match();
        assert!(check_invariants(&state).is_empty());

        let state = apply_point(&state, Team::A).unwrap();
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_excessive_games_detected() {
        let mut state = create_valid_match();
        state.score.a.games = 7;
        state.score.a.set_games = vec![7];

        let violations = check_invariants(&state);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("7 games"));
    }

    #[test]
    fn test_stale_set_tally_detected() {
        let mut state = create_valid_match();
        state.score.b.games = 2;

        let violations = check_invariants(&state);
        assert!(violations[0].message.contains("open set tally"));
    }

    #[test]
    fn test_missing_deuce_counter_detected() {
        let mut state = create_valid_match();
        state.deuce = None;

        let violations = check_invariants(&state);
        assert!(violations[0].message.contains("no deuce counter"));
    }

    #[test]
    fn test_orphan_tie_break_detected() {
        let mut state = create_valid_match();
        state.tie_break = Some(TieBreakState::new(7, Team::A));

        let violations = check_invariants(&state);
        assert!(violations.iter().any(|v| v.message.contains("Tie-break score during")));
    }

    #[test]
    fn test_finished_without_winner_detected() {
        let mut state = create_valid_match();
        state.phase = MatchPhase::Finished;

        let violations = check_invariants(&state);
        assert!(violations[0].message.contains("no winner"));
    }

    #[test]
    #[should_panic(expected = "Match invariant violations")]
    #[cfg(debug_assertions)]
    fn test_assert_invariants_panics() {
        let mut state = create_valid_match();
        state.winner = Some(Team::B);
        assert_invariants(&state);
    }
}
