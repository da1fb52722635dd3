//! The two competing sides and per-side storage.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Side A.
    A,
    /// Side B.
    B,
}

impl Team {
    /// Both sides, A first.
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.pad("A"),
            Team::B => f.pad("B"),
        }
    }
}

/// A value held once per side.
///
/// Serialized with `"A"` / `"B"` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerTeam<T> {
    /// Value for side A.
    #[serde(rename = "A")]
    pub a: T,
    /// Value for side B.
    #[serde(rename = "B")]
    pub b: T,
}

impl<T> PerTeam<T> {
    /// Build from explicit values.
    #[must_use]
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

impl<T: Clone> PerTeam<T> {
    /// The same value for both sides.
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self {
            a: value.clone(),
            b: value,
        }
    }
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }
}
