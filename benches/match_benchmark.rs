//! Benchmarks for scoring complete matches.
//!
//! Every point allocates a snapshot, so these track the cost of the
//! transition function and of history sharing.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use deuce::{BestOf, MatchConfig, MatchState, ScoringMode, Team, apply_point, create_match, undo};

/// A five-set match where every set reaches a tie-break.
fn long_match_stream() -> Vec<Team> {
    let mut points = Vec::new();
    for set in 0..5 {
        for game in 0..12 {
            let winner = if game % 2 == 0 { Team::A } else { Team::B };
            points.extend([winner; 4]);
        }
        let winner = if set % 2 == 0 { Team::A } else { Team::B };
        points.extend([Team::A, Team::B].repeat(10));
        points.extend([winner; 2]);
    }
    points
}

fn play(config: &MatchConfig, points: &[Team]) -> MatchState {
    let mut state = create_match(config.clone());
    for &team in points {
        let Ok(next) = apply_point(&state, team) else {
            break;
        };
        state = next;
    }
    state
}

fn bench_full_match(c: &mut Criterion) {
    let config = MatchConfig::new(BestOf::Five, ScoringMode::Advantage);
    let points = long_match_stream();

    c.bench_function("full_match_best_of_five", |b| {
        b.iter(|| black_box(play(black_box(&config), black_box(&points))));
    });
}

fn bench_deuce_cycles(c: &mut Criterion) {
    let config = MatchConfig::new(BestOf::Three, ScoringMode::Advantage);
    let mut points = vec![Team::A, Team::A, Team::A, Team::B, Team::B, Team::B];
    points.extend([Team::A, Team::B].repeat(500));

    c.bench_function("advantage_deuce_1000_points", |b| {
        b.iter(|| black_box(play(black_box(&config), black_box(&points))));
    });
}

fn bench_undo_chain(c: &mut Criterion) {
    let config = MatchConfig::new(BestOf::Five, ScoringMode::StarPoint).with_super_tie_break(true);
    let end = play(&config, &long_match_stream());

    c.bench_function("undo_to_start", |b| {
        b.iter(|| {
            let mut state = end.clone();
            while let Ok(previous) = undo(&state) {
                state = previous;
            }
            black_box(state)
        });
    });
}

criterion_group!(benches, bench_full_match, bench_deuce_cycles, bench_undo_chain);
criterion_main!(benches);
