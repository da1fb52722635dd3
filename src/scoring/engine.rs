//! Point-by-point match transitions.

use tracing::{debug, trace};

use crate::error::{ScoreError, ScoreResult};
use crate::scoring::announce;
use crate::scoring::deuce::{DeuceOutcome, DeucePolicy, initial_deuce_state, resolve_deuce};
use crate::scoring::serve::{tie_break_server, toggle_serve};
use crate::scoring::state::History;
use crate::scoring::tiebreak::{SUPER_TIE_BREAK_TARGET, TIE_BREAK_TARGET};
use crate::scoring::{GameDeuceState, GamePoint, MatchPhase, MatchState, TieBreakState};
use crate::team::Team;

/// Games needed to take a set outright.
const GAMES_PER_SET: u32 = 6;

/// Lead in games needed to take a set outright.
const SET_MARGIN: u32 = 2;

/// Award a point to `team`, returning the next snapshot.
///
/// `state` is left untouched and becomes the newest entry of the returned
/// snapshot's history.
///
/// # Errors
///
/// Returns [`ScoreError::MatchAlreadyFinished`] once a winner is decided.
pub fn apply_point(state: &MatchState, team: Team) -> ScoreResult<MatchState> {
    if state.phase == MatchPhase::Finished {
        return Err(ScoreError::MatchAlreadyFinished);
    }
    trace!(%team, phase = ?state.phase, "point won");

    let mut next = state.clone();
    next.history = History::after(state);

    match next.tie_break {
        Some(tie_break) => Ok(score_tie_break(next, tie_break, team)),
        None => score_regular_point(next, team),
    }
}

fn score_regular_point(mut next: MatchState, team: Team) -> ScoreResult<MatchState> {
    let team_points = next.score[team].points;
    let other_points = next.score[team.opponent()].points;

    if team_points == GamePoint::Forty && !other_points.is_forty_or_better() {
        return Ok(win_game(next, team));
    }
    if is_deuce(team_points, other_points) {
        return score_deuce(next, team);
    }

    let Some(advanced) = team_points.successor() else {
        return Err(ScoreError::InvalidDeuceState {
            team,
            team_points,
            other_points,
        });
    };
    next.score[team].points = advanced;
    next.announce = Some(announce::point_score(&next));
    Ok(next)
}

fn is_deuce(team_points: GamePoint, other_points: GamePoint) -> bool {
    team_points == GamePoint::Advantage
        || other_points == GamePoint::Advantage
        || (team_points == GamePoint::Forty && other_points == GamePoint::Forty)
}

fn score_deuce(mut next: MatchState, team: Team) -> ScoreResult<MatchState> {
    let other = team.opponent();
    let policy = DeucePolicy::for_game(next.config.scoring_mode, next.deuce);
    let outcome = resolve_deuce(policy, team, next.score[team].points, next.score[other].points)?;

    match outcome {
        DeuceOutcome::GameWon => Ok(win_game(next, team)),
        DeuceOutcome::BackToDeuce => {
            next.score[team].points = GamePoint::Forty;
            next.score[other].points = GamePoint::Forty;
            next.deuce = next.deuce.map(GameDeuceState::bump);
            next.announce = Some(announce::deuce());
            Ok(next)
        }
        DeuceOutcome::Advantage => {
            next.score[team].points = GamePoint::Advantage;
            next.announce = Some(announce::point_score(&next));
            Ok(next)
        }
    }
}

fn win_game(mut next: MatchState, team: Team) -> MatchState {
    next.score[team].win_game();
    next.score[team.opponent()].points = GamePoint::Love;
    next.serving = toggle_serve(next.serving);
    next.deuce = initial_deuce_state(next.config.scoring_mode);
    next.announce = Some(announce::game_won(&next, team));
    debug!(
        %team,
        games_a = next.score.a.games,
        games_b = next.score.b.games,
        "game won"
    );

    let games = next.score[team].games;
    let other_games = next.score[team.opponent()].games;
    if games >= GAMES_PER_SET && games >= other_games + SET_MARGIN {
        return win_set(next, team);
    }
    if games == GAMES_PER_SET && other_games == GAMES_PER_SET {
        return start_tie_break(next);
    }
    next
}

fn start_tie_break(mut next: MatchState) -> MatchState {
    let super_tie_break = next.config.super_tie_break && next.is_final_set();
    let (phase, target) = if super_tie_break {
        (MatchPhase::SuperTieBreak, SUPER_TIE_BREAK_TARGET)
    } else {
        (MatchPhase::TieBreak, TIE_BREAK_TARGET)
    };
    debug!(?phase, target, initial_server = %next.serving, "tie-break started");

    next.phase = phase;
    next.tie_break = Some(TieBreakState::new(target, next.serving));
    next.announce = None;
    next
}

fn score_tie_break(mut next: MatchState, tie_break: TieBreakState, team: Team) -> MatchState {
    let point = tie_break.score_point(team);

    if let Some(winner) = point.winner {
        debug!(
            %winner,
            points_a = point.tie_break.points(Team::A),
            points_b = point.tie_break.points(Team::B),
            "tie-break won"
        );
        next.score[winner].win_game();
        next.score[winner.opponent()].points = GamePoint::Love;
        next.tie_break = None;
        next.phase = MatchPhase::InProgress;
        next.serving = tie_break.initial_server().opponent();
        next.deuce = initial_deuce_state(next.config.scoring_mode);
        return win_set(next, winner);
    }

    next.serving = tie_break_server(tie_break.initial_server(), point.tie_break.points_played());
    next.tie_break = Some(point.tie_break);
    next.announce = Some(announce::tie_break_score(&next, &point.tie_break));
    next
}

fn win_set(mut next: MatchState, team: Team) -> MatchState {
    for side in Team::ALL {
        next.score[side].close_set(side == team);
    }
    next.deuce = initial_deuce_state(next.config.scoring_mode);
    debug!(
        %team,
        sets_a = next.score.a.sets,
        sets_b = next.score.b.sets,
        "set won"
    );

    if next.score[team].sets >= next.sets_to_win() {
        debug!(winner = %team, "match finished");
        next.phase = MatchPhase::Finished;
        next.winner = Some(team);
        next.announce = Some(announce::match_won(&next, team));
        return next;
    }

    next.announce = Some(announce::set_won(&next, team));
    next
}
