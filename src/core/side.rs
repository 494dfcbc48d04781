//! Team identification and per-side data storage.
//!
//! ## Side
//!
//! The two competing teams. Home defends the goal on the last row and
//! attacks towards row 0; Away mirrors it.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for scores and piece
//! counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides, Home first.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    /// The other team.
    ///
    /// ```
    /// use gridball::core::Side;
    ///
    /// assert_eq!(Side::Home.opponent(), Side::Away);
    /// assert_eq!(Side::Away.opponent(), Side::Home);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Lowercase label used in identifiers and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use gridball::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::default();
/// score[Side::Home] += 1;
///
/// assert_eq!(score[Side::Home], 1);
/// assert_eq!(score[Side::Away], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub home: T,
    pub away: T,
}

impl<T> SideMap<T> {
    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Iterate over (Side, &T) pairs, Home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Away, &self.away)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
