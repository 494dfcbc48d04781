use crate::core::{Move, PieceId, Position, Side};
use crate::rules::RuleViolation;

/// Returned by the executor when handed a move that is not legal for the
/// given state. Callers are expected to validate first; seeing this means
/// the move was never validated or was validated against another snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {mv}: {violation}")]
pub struct IllegalMoveError {
    pub mv: Move,
    pub violation: RuleViolation,
}

/// A snapshot that breaks the game model's invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("history holds {history} moves but the last move is numbered {last_move:?}")]
    HistoryMismatch {
        history: usize,
        last_move: Option<u32>,
    },

    #[error("history entry {index} is numbered {move_number}")]
    HistoryNumbering { index: usize, move_number: u32 },

    #[error("{side} has {count} pieces on the board")]
    TooManyPieces { side: Side, count: usize },

    #[error("{piece} stands in its own goal at {pos}")]
    PieceInOwnGoal { piece: PieceId, pos: Position },

    #[error("piece {piece} at {pos} does not match its identifier")]
    IdentityMismatch { piece: PieceId, pos: Position },

    #[error("piece {0} appears more than once")]
    DuplicatePiece(PieceId),

    #[error("board has {cells} cells, expected {expected}")]
    BoardShape { cells: usize, expected: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PassError {
    #[error("{side} has a legal move and cannot pass")]
    LegalMoveAvailable { side: Side },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?}, expected one of: easy, medium, hard")]
pub struct ParseDifficultyError(pub String);
