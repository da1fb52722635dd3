//! Output formatting utilities for CLI.

use deuce::replay::Command;
use deuce::{
    AnnounceOptions, CourtSide, MatchState, Team, format_announcement, serving_side,
};
use serde::Serialize;

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JsonMatchResult<'a> {
    /// Commands applied.
    commands: usize,
    /// Formatted announcement of the last command.
    announcement: Option<String>,
    /// Court side of the next serve.
    serving_side: CourtSide,
    /// Final snapshot.
    state: &'a MatchState,
}

impl<'a> JsonMatchResult<'a> {
    /// Create from a final snapshot.
    pub(super) fn new(state: &'a MatchState, commands: usize, options: AnnounceOptions) -> Self {
        Self {
            commands,
            announcement: format_announcement(state, options),
            serving_side: serving_side(state),
            state,
        }
    }
}

/// Format one replayed command.
pub(super) fn format_step(
    step: usize,
    command: Command,
    state: &MatchState,
    options: AnnounceOptions,
) -> String {
    let announcement = format_announcement(state, options).unwrap_or_default();
    format!(
        "{:>4}  {command:<4}  {announcement:<40}  [{}]",
        step + 1,
        serving_side(state)
    )
}

/// Format a snapshot as a scoreboard.
pub(super) fn format_scoreboard(state: &MatchState) -> String {
    let mut output = String::new();
    let width = Team::ALL
        .iter()
        .map(|&team| state.team_label(team).chars().count())
        .max()
        .unwrap_or(0);

    for team in Team::ALL {
        let score = &state.score()[team];
        let marker = if !state.is_finished() && state.serving() == team {
            '*'
        } else {
            ' '
        };
        output.push_str(&format!("{:<width$} {marker}", state.team_label(team)));

        // Closed sets, then the open one unless the match is over
        let sets_played = score.set_games.len() - 1;
        let shown = if state.is_finished() {
            sets_played
        } else {
            score.set_games.len()
        };
        for games in &score.set_games[..shown] {
            output.push_str(&format!(" {games:>2}"));
        }

        if !state.is_finished() {
            match state.tie_break() {
                Some(tie_break) => {
                    output.push_str(&format!("  ({})", tie_break.points(team)));
                }
                None => output.push_str(&format!("  {:>2}", score.points)),
            }
        }
        output.push('\n');
    }

    if let Some(winner) = state.winner() {
        output.push_str(&format!("Winner: {}\n", state.team_label(winner)));
    } else {
        output.push_str(&format!("Phase: {:?}\n", state.phase()));
    }
    output
}
