//! Match snapshots.
//!
//! A [`MatchState`] is never modified once handed to a caller. Every scored
//! point produces a new snapshot whose [`History`] points back at its
//! predecessor, so lineages share structure instead of copying it.

use std::fmt;
use std::ptr;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::config::MatchConfig;
use crate::scoring::{GameDeuceState, GamePoint, TieBreakState, initial_deuce_state};
use crate::team::{PerTeam, Team};

/// One side's score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    /// Standing in the current game.
    pub points: GamePoint,
    /// Games won in the current set.
    pub games: u32,
    /// Sets won.
    pub sets: u32,
    /// Games won per set; the last entry is the set in progress.
    pub set_games: Vec<u32>,
}

impl TeamScore {
    /// Score at the start of a match.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: GamePoint::Love,
            games: 0,
            sets: 0,
            set_games: vec![0],
        }
    }

    /// Record a game won in the open set.
    pub(crate) fn win_game(&mut self) {
        self.games += 1;
        self.points = GamePoint::Love;
        if let Some(open) = self.set_games.last_mut() {
            *open = self.games;
        }
    }

    /// Freeze the open set's tally and open a new one.
    pub(crate) fn close_set(&mut self, won: bool) {
        if let Some(open) = self.set_games.last_mut() {
            *open = self.games;
        }
        self.set_games.push(0);
        self.games = 0;
        self.points = GamePoint::Love;
        if won {
            self.sets += 1;
        }
    }
}

impl Default for TeamScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Score of both sides.
pub type Score = PerTeam<TeamScore>;

/// Stage of the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPhase {
    /// Regular games are being played.
    #[default]
    InProgress,
    /// A set is being decided by a tie-break to 7.
    TieBreak,
    /// The deciding set is being decided by a tie-break to 10.
    SuperTieBreak,
    /// A winner is decided; no further points are accepted.
    Finished,
}

impl MatchPhase {
    /// Tie-break or super tie-break.
    #[must_use]
    pub const fn is_tie_break(self) -> bool {
        matches!(self, MatchPhase::TieBreak | MatchPhase::SuperTieBreak)
    }
}

/// Earlier snapshots of a match, newest first.
#[derive(Clone, Default)]
pub struct History {
    latest: Option<Arc<MatchState>>,
    len: usize,
}

impl History {
    /// History whose newest entry is `previous`.
    pub(crate) fn after(previous: &MatchState) -> Self {
        Self {
            latest: Some(Arc::new(previous.clone())),
            len: previous.history.len + 1,
        }
    }

    /// Number of earlier snapshots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no earlier snapshots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The immediately preceding snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&MatchState> {
        self.latest.as_deref()
    }

    /// Earlier snapshots, newest first.
    #[must_use]
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            next: self.latest(),
        }
    }
}

impl PartialEq for History {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        // Walk both lineages in step until they converge on a shared snapshot.
        for (a, b) in self.iter().zip(other.iter()) {
            if ptr::eq(a, b) {
                return true;
            }
            if !a.fields_eq(b) {
                return false;
            }
        }
        true
    }
}

impl Eq for History {}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History").field("len", &self.len).finish()
    }
}

impl Drop for History {
    fn drop(&mut self) {
        // Unlink iteratively so long lineages don't recurse on drop.
        let mut next = self.latest.take();
        while let Some(snapshot) = next {
            match Arc::try_unwrap(snapshot) {
                Ok(mut state) => next = state.history.latest.take(),
                Err(_) => break,
            }
        }
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.len as u64)
    }
}

/// Iterator over a [`History`], newest first.
#[derive(Debug, Clone)]
pub struct HistoryIter<'a> {
    next: Option<&'a MatchState>,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a MatchState;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.history.latest();
        Some(current)
    }
}

/// Immutable snapshot of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub(crate) config: Arc<MatchConfig>,
    pub(crate) score: Score,
    pub(crate) phase: MatchPhase,
    pub(crate) serving: Team,
    pub(crate) tie_break: Option<TieBreakState>,
    #[serde(rename = "gameDeuceState")]
    pub(crate) deuce: Option<GameDeuceState>,
    pub(crate) winner: Option<Team>,
    pub(crate) announce: Option<String>,
    #[serde(rename = "historyDepth")]
    pub(crate) history: History,
}

impl MatchState {
    /// Start a match: zeroed score, configured first server, empty history.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let serving = config.first_server();
        let deuce = initial_deuce_state(config.scoring_mode);
        Self {
            config: Arc::new(config),
            score: PerTeam::splat(TeamScore::new()),
            phase: MatchPhase::InProgress,
            serving,
            tie_break: None,
            deuce,
            winner: None,
            announce: None,
            history: History::default(),
        }
    }

    /// Equality of everything except the history.
    fn fields_eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.score == other.score
            && self.phase == other.phase
            && self.serving == other.serving
            && self.tie_break == other.tie_break
            && self.deuce == other.deuce
            && self.winner == other.winner
            && self.announce == other.announce
    }

    /// Rules of the match.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score of both sides.
    #[must_use]
    pub const fn score(&self) -> &Score {
        &self.score
    }

    /// Current stage.
    #[must_use]
    pub const fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Side holding serve.
    #[must_use]
    pub const fn serving(&self) -> Team {
        self.serving
    }

    /// Tie-break score while one is being played.
    #[must_use]
    pub const fn tie_break(&self) -> Option<&TieBreakState> {
        self.tie_break.as_ref()
    }

    /// Star-point counter; `None` under the other modes.
    #[must_use]
    pub const fn deuce_state(&self) -> Option<GameDeuceState> {
        self.deuce
    }

    /// Match winner once finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Announcement produced by the last point, if any.
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announce.as_deref()
    }

    /// Earlier snapshots.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Whether the match is decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    /// Sets a side must win to take the match.
    #[must_use]
    pub fn sets_to_win(&self) -> u32 {
        self.config.sets_to_win()
    }

    /// Points scored to reach this snapshot.
    #[must_use]
    pub const fn points_played(&self) -> usize {
        self.history.len()
    }

    /// Display label for a side: its configured name, else `Team A` / `Team B`.
    #[must_use]
    pub fn team_label(&self, team: Team) -> String {
        self.config.team_names.as_ref().map_or_else(
            || format!("Team {team}"),
            |names| names.get(team).to_owned(),
        )
    }

    /// Whether both sides are one set from taking the match.
    pub(crate) fn is_final_set(&self) -> bool {
        let needed = self.sets_to_win() - 1;
        self.score.a.sets == needed && self.score.b.sets == needed
    }
}

/// Start a match from its configuration.
#[must_use]
pub fn create_match(config: MatchConfig) -> MatchState {
    MatchState::new(config)
}
