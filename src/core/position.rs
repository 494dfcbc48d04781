//! Grid coordinates and goal geometry.
//!
//! The pitch is `ROWS` × `COLS`. Row 0 is Away's back row and holds Away's
//! goal; row `ROWS - 1` is Home's back row and holds Home's goal. Each goal
//! is the two center columns of its back row.
//!
//! Coordinates are signed so that out-of-bounds destinations submitted by a
//! caller are representable and can be rejected by the validator.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Number of rows on the pitch.
pub const ROWS: i32 = 12;

/// Number of columns on the pitch.
pub const COLS: i32 = 8;

/// Columns occupied by each goal.
pub const GOAL_COLS: [i32; 2] = [3, 4];

/// A cell on the pitch (or a proposed cell, which may be off the pitch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if the position lies on the pitch.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < ROWS && self.col >= 0 && self.col < COLS
    }

    /// Flat index into a row-major grid. Only meaningful when in bounds.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.row * COLS + self.col) as usize
    }

    /// The position reflected across the row axis (`row' = ROWS - 1 - row`).
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(ROWS - 1 - self.row, self.col)
    }

    /// Step by `(d_row, d_col)`, returning `None` if the result is off the pitch.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let next = Self::new(self.row + d_row, self.col + d_col);
        next.in_bounds().then_some(next)
    }

    /// Check if this cell is the goal defended by `side`.
    #[must_use]
    pub fn is_goal_of(self, side: Side) -> bool {
        self.row == goal_row(side) && GOAL_COLS.contains(&self.col)
    }

    /// Chebyshev distance (`max(|Δrow|, |Δcol|)`).
    #[must_use]
    pub fn distance(self, other: Self) -> i32 {
        (other.row - self.row).abs().max((other.col - self.col).abs())
    }

    /// All cells of the pitch in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Back row holding the goal defended by `side`.
#[must_use]
pub const fn goal_row(side: Side) -> i32 {
    match side {
        Side::Home => ROWS - 1,
        Side::Away => 0,
    }
}

/// Unit step along one of the eight compass directions.
pub type Direction = (i32, i32);

/// Rook-like directions.
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop-like directions.
pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight directions.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
