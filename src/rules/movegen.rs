//! Legal-move enumeration.
//!
//! Candidates are generated from each piece's movement pattern and then
//! probed through the validator with the turn check skipped, so the result is
//! exactly what `validate_move` would accept for that origin if it were the
//! piece's side to move.
//!
//! Ray pieces stop extending a ray at the first occupied cell; that cell is
//! still probed, since it may hold a capturable enemy.

use smallvec::SmallVec;

use super::validate::check_on_board;
use crate::core::{
    Board, Direction, GameState, Move, PieceKind, Position, Side, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL,
};

/// Candidate destinations for one piece. A Forward on an open pitch reaches
/// at most 32 cells.
type Candidates = SmallVec<[Position; 32]>;

/// Legal destinations for the piece on `origin`, in generation order.
///
/// Returns an empty list if `origin` is empty or off the pitch.
#[must_use]
pub fn legal_moves_for_piece(state: &GameState, origin: Position) -> Vec<Position> {
    destinations(&state.board, origin).into_vec()
}

/// Every legal move for `side`, judged as if it were `side`'s turn.
#[must_use]
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    state
        .board
        .pieces_of(side)
        .flat_map(|(from, _)| {
            destinations(&state.board, from)
                .into_iter()
                .map(move |to| Move::new(side, from, to))
        })
        .collect()
}

/// Whether `side` has at least one legal move.
#[must_use]
pub fn has_any_legal_move(state: &GameState, side: Side) -> bool {
    state
        .board
        .pieces_of(side)
        .any(|(from, _)| !destinations(&state.board, from).is_empty())
}

fn destinations(board: &Board, origin: Position) -> Candidates {
    let Some(piece) = board.get(origin) else {
        return Candidates::new();
    };

    let mut candidates = Candidates::new();
    match piece.kind {
        PieceKind::Defender => collect_rays(board, origin, &ALL_DIRECTIONS, 1, &mut candidates),
        PieceKind::Flanker => collect_rays(board, origin, &ORTHOGONAL, 2, &mut candidates),
        PieceKind::Midfielder => collect_rays(board, origin, &DIAGONAL, usize::MAX, &mut candidates),
        PieceKind::Forward => collect_rays(board, origin, &ALL_DIRECTIONS, usize::MAX, &mut candidates),
    }

    candidates.retain(|to| check_on_board(board, &Move::new(piece.side, origin, *to)).is_ok());
    candidates
}

fn collect_rays(board: &Board, origin: Position, directions: &[Direction], reach: usize, out: &mut Candidates) {
    for &(d_row, d_col) in directions {
        let mut cursor = origin;
        for _ in 0..reach {
            let Some(next) = cursor.offset(d_row, d_col) else {
                break;
            };
            out.push(next);
            if !board.is_empty_at(next) {
                break;
            }
            cursor = next;
        }
    }
}
