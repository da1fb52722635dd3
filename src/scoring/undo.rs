//! Undo.

use tracing::debug;

use crate::error::{ScoreError, ScoreResult};
use crate::scoring::MatchState;

/// The snapshot that preceded `state`, exactly as it was.
///
/// # Errors
///
/// Returns [`ScoreError::EmptyHistoryUndo`] when `state` has no predecessor.
pub fn undo(state: &MatchState) -> ScoreResult<MatchState> {
    let previous = state
        .history()
        .latest()
        .cloned()
        .ok_or(ScoreError::EmptyHistoryUndo)?;
    debug!(remaining = previous.history().len(), "point undone");
    Ok(previous)
}
