//! Announcement strings.
//!
//! Regular-game scores read server first: `Fifteen — Love`, `Thirty all`,
//! `Deuce`, `Advantage Alpha`. Tie-break scores are numeric, server first.
//! Game, set and match events use fixed templates.

use crate::scoring::{GamePoint, MatchState, TieBreakState};
use crate::team::Team;

const SCORE_SEPARATOR: &str = " — ";

/// Options for [`format_announcement`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnounceOptions {
    /// Append `(<server> serving)`.
    pub include_serving: bool,
}

/// Current score as it would be called, derived from the snapshot alone.
#[must_use]
pub fn announce_score(state: &MatchState) -> String {
    if let Some(winner) = state.winner() {
        return match_won(state, winner);
    }
    match state.tie_break() {
        Some(tie_break) => tie_break_score(state, tie_break),
        None => point_score(state),
    }
}

/// The snapshot's announcement, optionally followed by the serving side.
///
/// Returns `None` before the first point.
#[must_use]
pub fn format_announcement(state: &MatchState, options: AnnounceOptions) -> Option<String> {
    let announce = state.announcement()?;
    if !options.include_serving {
        return Some(announce.to_owned());
    }
    Some(format!(
        "{announce} ({} serving)",
        state.team_label(state.serving())
    ))
}

pub(crate) fn point_score(state: &MatchState) -> String {
    let server = state.serving();
    let receiver = server.opponent();
    let server_points = state.score()[server].points;
    let receiver_points = state.score()[receiver].points;

    if server_points == GamePoint::Advantage {
        return format!("Advantage {}", state.team_label(server));
    }
    if receiver_points == GamePoint::Advantage {
        return format!("Advantage {}", state.team_label(receiver));
    }
    if server_points != receiver_points {
        return format!(
            "{}{SCORE_SEPARATOR}{}",
            server_points.name(),
            receiver_points.name()
        );
    }
    if server_points == GamePoint::Forty {
        "Deuce".to_owned()
    } else {
        format!("{} all", server_points.name())
    }
}

pub(crate) fn tie_break_score(state: &MatchState, tie_break: &TieBreakState) -> String {
    let server = state.serving();
    format!(
        "{}{SCORE_SEPARATOR}{}",
        tie_break.points(server),
        tie_break.points(server.opponent())
    )
}

pub(crate) fn deuce() -> String {
    "Deuce".to_owned()
}

pub(crate) fn game_won(state: &MatchState, team: Team) -> String {
    format!("Game {}", state.team_label(team))
}

pub(crate) fn set_won(state: &MatchState, team: Team) -> String {
    format!("Set {}", state.team_label(team))
}

pub(crate) fn match_won(state: &MatchState, team: Team) -> String {
    format!("Game, set and match {}", state.team_label(team))
}
