//! The 12×8 pitch and the fixed starting layout.
//!
//! ## Layout
//!
//! `HOME_LAYOUT` is the only layout table. Away's layout is Home's
//! reflected across the row axis, so both sides face each other
//! symmetrically:
//!
//! ```text
//!      0 1 2 3 4 5 6 7
//!  0   . d d # # d d .     <- Away back row, goal at columns 3-4
//!  1   l . m m m m . l
//!  2   . . . f f . . .
//!  ...
//!  9   . . . F F . . .
//! 10   L . M M M M . L
//! 11   . D D # # D D .     <- Home back row, goal at columns 3-4
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceId, PieceKind};
use super::position::{Position, COLS, ROWS};
use super::side::{Side, SideMap};
use crate::error::StateError;

/// Number of pieces each side starts an epoch with.
pub const PIECES_PER_SIDE: usize = 12;

/// Home's starting layout as (kind, row, col), in ordinal order.
pub static HOME_LAYOUT: [(PieceKind, i32, i32); PIECES_PER_SIDE] = [
    (PieceKind::Defender, 11, 1),
    (PieceKind::Defender, 11, 2),
    (PieceKind::Defender, 11, 5),
    (PieceKind::Defender, 11, 6),
    (PieceKind::Flanker, 10, 0),
    (PieceKind::Flanker, 10, 7),
    (PieceKind::Midfielder, 10, 2),
    (PieceKind::Midfielder, 10, 3),
    (PieceKind::Midfielder, 10, 4),
    (PieceKind::Midfielder, 10, 5),
    (PieceKind::Forward, 9, 3),
    (PieceKind::Forward, 9, 4),
];

/// Starting layout for `side` as (kind, position) pairs.
pub fn layout(side: Side) -> impl Iterator<Item = (PieceKind, Position)> {
    HOME_LAYOUT.iter().map(move |&(kind, row, col)| {
        let home = Position::new(row, col);
        let pos = match side {
            Side::Home => home,
            Side::Away => home.mirrored(),
        };
        (kind, pos)
    })
}

/// A grid of optional pieces. At most one piece per cell.
///
/// Always holds exactly `ROWS * COLS` cells; deserializing a grid of any
/// other size fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Vec<Option<Piece>>,
}

/// Wire shape of a `Board` before the grid size is checked.
#[derive(Deserialize)]
struct RawBoard {
    cells: Vec<Option<Piece>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = StateError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = (ROWS * COLS) as usize;
        if raw.cells.len() != expected {
            return Err(StateError::BoardShape {
                cells: raw.cells.len(),
                expected,
            });
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![None; (ROWS * COLS) as usize],
        }
    }

    /// A fresh starting layout for the given epoch.
    #[must_use]
    pub fn initial(epoch: u32) -> Self {
        let mut board = Self::empty();

        for side in Side::ALL {
            let mut ordinals: FxHashMap<PieceKind, u8> = FxHashMap::default();
            for (kind, pos) in layout(side) {
                let ordinal = ordinals.entry(kind).or_insert(0);
                *ordinal += 1;
                board.place(pos, Piece::new(PieceId::new(epoch, side, kind, *ordinal)));
            }
        }

        debug_assert!(board.has_standard_composition());
        board
    }

    /// Get the piece at `pos`. Off-pitch positions are always empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.cells[pos.index()]
        } else {
            None
        }
    }

    /// Check if `pos` is on the pitch and empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.in_bounds() && self.cells[pos.index()].is_none()
    }

    /// Put `piece` on `pos`, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the pitch.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        assert!(pos.in_bounds(), "cannot place a piece off the pitch at {pos}");
        self.cells[pos.index()].replace(piece)
    }

    /// Remove and return the piece at `pos`.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.cells[pos.index()].take()
        } else {
            None
        }
    }

    /// Iterate over every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.cells[pos.index()].map(|p| (pos, p)))
    }

    /// Iterate over the pieces belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    /// Count the pieces of `side` and `kind`.
    #[must_use]
    pub fn count(&self, side: Side, kind: PieceKind) -> usize {
        self.pieces_of(side).filter(|(_, p)| p.kind == kind).count()
    }

    /// Count the pieces of each side.
    #[must_use]
    pub fn side_counts(&self) -> SideMap<usize> {
        let mut counts = SideMap::default();
        for (_, piece) in self.pieces() {
            counts[piece.side] += 1;
        }
        counts
    }

    /// Check the 12-per-side, 2/4/4/2 composition of a fresh layout.
    #[must_use]
    pub fn has_standard_composition(&self) -> bool {
        Side::ALL.iter().all(|&side| {
            PieceKind::ALL
                .iter()
                .all(|&kind| self.count(side, kind) == kind.per_side())
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Position::new(row, col);
                let c = match self.get(pos) {
                    Some(p) if p.side == Side::Home => p.kind.symbol(),
                    Some(p) => p.kind.symbol().to_ascii_lowercase(),
                    None if pos.is_goal_of(Side::Home) || pos.is_goal_of(Side::Away) => '#',
                    None => '.',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
