//! Move input and the move log.
//!
//! A `Move` is what a caller proposes. A `MoveRecord` is what the executor
//! appends to the game history once the move has been applied.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::position::Position;
use super::side::Side;

/// A proposed move.
///
/// ## Example
///
/// ```
/// use gridball::core::{Move, Position, Side};
///
/// let mv = Move::new(Side::Home, Position::new(11, 1), Position::new(10, 1));
/// assert_eq!(mv.to_string(), "home (11, 1) -> (10, 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side claiming to make the move.
    pub acting_side: Side,
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(acting_side: Side, from: Position, to: Position) -> Self {
        Self {
            acting_side,
            from,
            to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.acting_side, self.from, self.to)
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - The append-only game log handed back to callers
/// - Replay and debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Sequential number starting at 1.
    pub move_number: u32,

    pub acting_side: Side,
    pub from: Position,
    pub to: Position,

    /// The piece that moved.
    pub moved_piece: PieceId,

    /// The enemy piece removed from the destination, if any.
    pub captured_piece: Option<PieceId>,

    /// The side that scored, if this move scored a goal.
    pub goal: Option<Side>,

    /// Milliseconds since the UNIX epoch.
    pub timestamp: u64,
}
