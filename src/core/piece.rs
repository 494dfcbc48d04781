//! Pieces and their identifiers.
//!
//! A `PieceId` is stable within one epoch of the board and is derived from
//! `{side}-{kind}-{ordinal}`, ordinals counted per (side, kind) in layout
//! order starting at 1. The epoch is part of the identifier so pieces from
//! different layouts never compare equal.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// The four piece types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Straight line, one or two cells.
    Flanker,
    /// Any adjacent cell. Cannot score.
    Defender,
    /// Diagonal, any distance.
    Midfielder,
    /// Straight or diagonal, any distance.
    Forward,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Flanker,
        PieceKind::Defender,
        PieceKind::Midfielder,
        PieceKind::Forward,
    ];

    /// Whether pieces of this kind may enter the opponent's goal.
    #[must_use]
    pub const fn can_score(self) -> bool {
        !matches!(self, PieceKind::Defender)
    }

    /// Number of pieces of this kind each side starts an epoch with.
    #[must_use]
    pub const fn per_side(self) -> usize {
        match self {
            PieceKind::Flanker | PieceKind::Forward => 2,
            PieceKind::Defender | PieceKind::Midfielder => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PieceKind::Flanker => "flanker",
            PieceKind::Defender => "defender",
            PieceKind::Midfielder => "midfielder",
            PieceKind::Forward => "forward",
        }
    }

    /// Single-letter symbol used by the board renderer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Flanker => 'L',
            PieceKind::Defender => 'D',
            PieceKind::Midfielder => 'M',
            PieceKind::Forward => 'F',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a piece within one board epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub epoch: u32,
    pub side: Side,
    pub kind: PieceKind,
    pub ordinal: u8,
}

impl PieceId {
    #[must_use]
    pub const fn new(epoch: u32, side: Side, kind: PieceKind, ordinal: u8) -> Self {
        Self {
            epoch,
            side,
            kind,
            ordinal,
        }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.side, self.kind, self.ordinal)
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self {
            id,
            kind: id.kind,
            side: id.side,
        }
    }

    #[must_use]
    pub const fn can_score(&self) -> bool {
        self.kind.can_score()
    }
}
