//! Property-based tests for match scoring.
//!
//! These tests drive random point streams through every rule combination
//! and check the transition laws that must hold after each point.
//! Run with: cargo test --release prop_scoring

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use deuce::scoring::{GameDeuceState, check_invariants};
use deuce::{
    BestOf, GamePoint, MatchConfig, MatchPhase, ScoreError, ScoringMode, Team, apply_point,
    create_match, undo,
};

fn config_strategy() -> impl Strategy<Value = MatchConfig> {
    (
        prop_oneof![Just(BestOf::Three), Just(BestOf::Five)],
        prop_oneof![
            Just(ScoringMode::Advantage),
            Just(ScoringMode::GoldenPoint),
            Just(ScoringMode::StarPoint),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(sets, mode, super_tie_break, b_serves)| {
            let config = MatchConfig::new(sets, mode).with_super_tie_break(super_tie_break);
            if b_serves {
                config.with_first_server(Team::B)
            } else {
                config
            }
        })
}

fn team_strategy() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::A), Just(Team::B)]
}

fn stream_strategy() -> impl Strategy<Value = Vec<Team>> {
    prop::collection::vec(team_strategy(), 0..400)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every reachable snapshot satisfies the structural invariants.
    #[test]
    fn prop_invariants_hold(config in config_strategy(), stream in stream_strategy()) {
        let mut state = create_match(config);
        for team in stream {
            match apply_point(&state, team) {
                Ok(next) => state = next,
                Err(err) => {
                    prop_assert_eq!(err, ScoreError::MatchAlreadyFinished);
                    break;
                }
            }
            let violations = check_invariants(&state);
            prop_assert!(violations.is_empty(), "{:?}", violations);
        }
    }

    /// Scoring leaves the input snapshot untouched and undo restores it exactly.
    #[test]
    fn prop_apply_then_undo_is_identity(
        config in config_strategy(),
        stream in stream_strategy(),
        last in team_strategy(),
    ) {
        let mut state = create_match(config);
        for team in stream {
            let Ok(next) = apply_point(&state, team) else { break };
            state = next;
        }
        let before = state.clone();
        if let Ok(next) = apply_point(&state, last) {
            prop_assert_eq!(&state, &before);
            prop_assert_eq!(next.history().len(), state.history().len() + 1);
            prop_assert_eq!(undo(&next).unwrap(), before);
        }
    }

    /// Undoing every point walks back to the starting snapshot.
    #[test]
    fn prop_undo_all_returns_to_start(config in config_strategy(), stream in stream_strategy()) {
        let start = create_match(config);
        let mut state = start.clone();
        let mut applied = 0usize;
        for team in stream {
            let Ok(next) = apply_point(&state, team) else { break };
            state = next;
            applied += 1;
        }
        prop_assert_eq!(state.history().len(), applied);
        for _ in 0..applied {
            state = undo(&state).unwrap();
        }
        prop_assert_eq!(undo(&state).unwrap_err(), ScoreError::EmptyHistoryUndo);
        prop_assert_eq!(state, start);
    }

    /// A point moves the scorer's standing forward by at most one step, or ends the game.
    #[test]
    fn prop_point_advances_by_one(config in config_strategy(), stream in stream_strategy()) {
        let mut state = create_match(config);
        for team in stream {
            let Ok(next) = apply_point(&state, team) else { break };
            if state.tie_break().is_none() && next.score()[team].games == state.score()[team].games
                && next.score()[team].sets == state.score()[team].sets
            {
                let before = state.score()[team].points;
                let after = next.score()[team].points;
                prop_assert!(
                    after.ordinal() == before.ordinal() + 1
                        || (before == GamePoint::Forty && after == GamePoint::Forty),
                    "{:?} -> {:?}", before, after
                );
            }
            state = next;
        }
    }

    /// Tie-breaks end only at the target with a two-point margin.
    #[test]
    fn prop_tie_break_margin(config in config_strategy(), stream in stream_strategy()) {
        let mut state = create_match(config);
        for team in stream {
            let Ok(next) = apply_point(&state, team) else { break };
            if let (Some(tie_break), None) = (state.tie_break(), next.tie_break()) {
                let won = tie_break.points(team) + 1;
                let lost = tie_break.points(team.opponent());
                prop_assert!(won >= tie_break.target());
                prop_assert!(won >= lost + 2);
            }
            state = next;
        }
    }

    /// The star-point counter never passes two.
    #[test]
    fn prop_star_point_counter_capped(stream in stream_strategy()) {
        let mut state = create_match(MatchConfig::new(BestOf::Three, ScoringMode::StarPoint));
        for team in stream {
            let Ok(next) = apply_point(&state, team) else { break };
            let resets = next.deuce_state().map(GameDeuceState::failed_advantage_resets);
            prop_assert!(matches!(resets, Some(0..=2)));
            state = next;
        }
    }

    /// Once decided, the winner never changes and no further point is accepted.
    #[test]
    fn prop_finished_match_is_final(config in config_strategy(), stream in stream_strategy()) {
        let sets_to_win = config.sets_to_win();
        let mut state = create_match(config);
        for team in stream {
            if state.is_finished() {
                prop_assert_eq!(state.phase(), MatchPhase::Finished);
                prop_assert_eq!(
                    apply_point(&state, team).unwrap_err(),
                    ScoreError::MatchAlreadyFinished
                );
                let winner = state.winner().unwrap();
                prop_assert_eq!(state.score()[winner].sets, sets_to_win);
                break;
            }
            state = apply_point(&state, team).unwrap();
        }
    }
}
