//! Game state snapshot.
//!
//! ## GameState
//!
//! Everything the rule engine needs to decide and apply a move:
//! - Board (current epoch's layout and captures so far)
//! - Side to move
//! - Score per side
//! - Append-only move history and the last move
//!
//! States are never mutated by the rules; the executor builds a new one per
//! move. History uses an `im` persistent vector so that cloning a state (for
//! the executor or during bot search) is cheap regardless of game length.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::{Board, PIECES_PER_SIDE};
use super::side::{Side, SideMap};
use crate::error::StateError;

/// A complete, serializable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    /// Side to move.
    pub turn: Side,

    /// Goals scored per side.
    pub score: SideMap<u32>,

    /// The most recent history entry, if any.
    pub last_move: Option<MoveRecord>,

    /// Every applied move, oldest first.
    pub history: Vector<MoveRecord>,

    /// Side that moved first in the game.
    pub starting_player: Side,

    /// Board layouts so far, minus one. Incremented on each goal.
    pub epoch: u32,
}

impl GameState {
    /// Create the state for a new game.
    ///
    /// ```
    /// use gridball::core::{GameState, Side};
    ///
    /// let state = GameState::new(Side::Away);
    /// assert_eq!(state.turn, Side::Away);
    /// assert!(state.history.is_empty());
    /// assert!(state.board.has_standard_composition());
    /// ```
    #[must_use]
    pub fn new(starting_side: Side) -> Self {
        Self {
            board: Board::initial(0),
            turn: starting_side,
            score: SideMap::default(),
            last_move: None,
            history: Vector::new(),
            starting_player: starting_side,
            epoch: 0,
        }
    }

    /// Build a state around an arbitrary board, with no history.
    #[must_use]
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            score: SideMap::default(),
            last_move: None,
            history: Vector::new(),
            starting_player: turn,
            epoch: 0,
        }
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Check the model invariants on a snapshot received from outside.
    ///
    /// Captures legitimately reduce piece counts, so only upper bounds are
    /// checked here.
    pub fn check_integrity(&self) -> Result<(), StateError> {
        let last_number = self.last_move.as_ref().map(|r| r.move_number);
        let consistent = match (&self.last_move, self.history.last()) {
            (None, None) => true,
            (Some(last), Some(tail)) => last == tail && last.move_number as usize == self.move_count(),
            _ => false,
        };
        if !consistent {
            return Err(StateError::HistoryMismatch {
                history: self.move_count(),
                last_move: last_number,
            });
        }

        for (index, record) in self.history.iter().enumerate() {
            if record.move_number as usize != index + 1 {
                return Err(StateError::HistoryNumbering {
                    index,
                    move_number: record.move_number,
                });
            }
        }

        for (side, &count) in self.board.side_counts().iter() {
            if count > PIECES_PER_SIDE {
                return Err(StateError::TooManyPieces { side, count });
            }
        }

        let mut seen = FxHashSet::default();
        for (pos, piece) in self.board.pieces() {
            if piece.kind != piece.id.kind || piece.side != piece.id.side {
                return Err(StateError::IdentityMismatch { piece: piece.id, pos });
            }
            if pos.is_goal_of(piece.side) {
                return Err(StateError::PieceInOwnGoal { piece: piece.id, pos });
            }
            if !seen.insert(piece.id) {
                return Err(StateError::DuplicatePiece(piece.id));
            }
        }

        Ok(())
    }
}
