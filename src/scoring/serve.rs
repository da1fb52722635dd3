//! Serve rotation.
//!
//! Service passes to the opponent after every completed game. Inside a
//! tie-break the initial server serves one point, then each side serves two
//! in turn: `A, B B, A A, B B, ...`.

use crate::team::Team;

/// Server for the game after `serving`'s game.
#[must_use]
pub const fn toggle_serve(serving: Team) -> Team {
    serving.opponent()
}

/// Server of the next tie-break point after `points_played` points.
#[must_use]
pub const fn tie_break_server(initial_server: Team, points_played: u32) -> Team {
    if points_played == 0 {
        return initial_server;
    }
    if ((points_played - 1) / 2) % 2 == 0 {
        initial_server.opponent()
    } else {
        initial_server
    }
}
