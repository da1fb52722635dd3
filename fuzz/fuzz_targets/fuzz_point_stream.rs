#![no_main]

//! Point stream fuzzer.
//!
//! Builds a match from fuzzer-chosen rules, then feeds it an arbitrary
//! sequence of points and undos. After every step the snapshot must satisfy
//! the structural invariants, and undo must return the exact predecessor.

use arbitrary::Arbitrary;
use deuce::scoring::check_invariants;
use deuce::{BestOf, MatchConfig, ScoreError, ScoringMode, Team, apply_point, create_match, undo};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzCommand {
    PointA,
    PointB,
    Undo,
}

#[derive(Arbitrary, Debug)]
struct PointStreamInput {
    best_of_five: bool,
    mode: u8,
    super_tie_break: bool,
    b_serves_first: bool,
    commands: Vec<FuzzCommand>,
}

fuzz_target!(|input: PointStreamInput| {
    let sets = if input.best_of_five {
        BestOf::Five
    } else {
        BestOf::Three
    };
    let mode = match input.mode % 3 {
        0 => ScoringMode::Advantage,
        1 => ScoringMode::GoldenPoint,
        _ => ScoringMode::StarPoint,
    };
    let first_server = if input.b_serves_first { Team::B } else { Team::A };
    let config = MatchConfig::new(sets, mode)
        .with_super_tie_break(input.super_tie_break)
        .with_first_server(first_server);

    let mut state = create_match(config);
    for command in input.commands.into_iter().take(2000) {
        let team = match command {
            FuzzCommand::PointA => Team::A,
            FuzzCommand::PointB => Team::B,
            FuzzCommand::Undo => {
                match undo(&state) {
                    Ok(previous) => state = previous,
                    Err(err) => {
                        assert_eq!(err, ScoreError::EmptyHistoryUndo);
                        assert!(state.history().is_empty());
                    }
                }
                continue;
            }
        };

        match apply_point(&state, team) {
            Ok(next) => {
                let violations = check_invariants(&next);
                assert!(violations.is_empty(), "{violations:?}");
                assert_eq!(undo(&next).ok().as_ref(), Some(&state));
                state = next;
            }
            Err(err) => {
                assert_eq!(err, ScoreError::MatchAlreadyFinished);
                assert!(state.is_finished());
            }
        }
    }
});
