//! State transitions.
//!
//! `apply_move` re-validates the move, then builds the next state from a
//! copy of the board: the mover leaves the origin, any enemy on the
//! destination is captured, and a goal replaces the board with a fresh
//! layout for the next epoch. The turn always passes to the mover's
//! opponent, so after a goal the conceding side kicks off.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::movegen::has_any_legal_move;
use super::validate::{validate_move, RuleViolation, ValidateOptions};
use crate::core::{Board, GameState, Move, MoveRecord, Piece, Side};
use crate::error::{IllegalMoveError, PassError};

/// Result of applying a legal move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub next_state: GameState,

    /// Enemy piece removed from the destination.
    pub captured_piece: Option<Piece>,

    /// Side that scored, if the move entered the opponent's goal.
    pub goal: Option<Side>,
}

/// Apply `mv`, stamping the history entry with the current wall-clock time.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<MoveOutcome, IllegalMoveError> {
    apply_move_at(state, mv, now_millis())
}

/// Apply `mv` with an explicit timestamp (milliseconds since the UNIX epoch).
#[instrument(level = "debug", skip(state, mv), fields(%mv, move_number = state.move_count() + 1), err)]
pub fn apply_move_at(state: &GameState, mv: &Move, timestamp: u64) -> Result<MoveOutcome, IllegalMoveError> {
    let outcome = transition(state, mv, timestamp)?;

    if let Some(scorer) = outcome.goal {
        debug!(
            %scorer,
            home = outcome.next_state.score.home,
            away = outcome.next_state.score.away,
            epoch = outcome.next_state.epoch,
            "goal scored, board reset"
        );
    }
    if let Some(captured) = outcome.captured_piece {
        debug!(captured = %captured.id, "piece captured");
    }

    Ok(outcome)
}

/// The transition itself, without logging. Used directly by bot search.
pub(crate) fn transition(state: &GameState, mv: &Move, timestamp: u64) -> Result<MoveOutcome, IllegalMoveError> {
    let illegal = |violation| IllegalMoveError { mv: *mv, violation };

    let (_, goal) = validate_move(state, mv, ValidateOptions::default())
        .into_result()
        .map_err(illegal)?;

    let mut board = state.board.clone();
    let moving = board
        .take(mv.from)
        .ok_or_else(|| illegal(RuleViolation::NoPieceAtOrigin))?;
    let captured_piece = board.place(mv.to, moving);

    let mut score = state.score;
    let mut epoch = state.epoch;
    let scorer = goal.then_some(mv.acting_side);
    if let Some(side) = scorer {
        score[side] += 1;
        epoch += 1;
        board = Board::initial(epoch);
        debug_assert!(board.has_standard_composition());
    }

    let record = MoveRecord {
        move_number: state.move_count() as u32 + 1,
        acting_side: mv.acting_side,
        from: mv.from,
        to: mv.to,
        moved_piece: moving.id,
        captured_piece: captured_piece.map(|p| p.id),
        goal: scorer,
        timestamp,
    };

    let mut history = state.history.clone();
    history.push_back(record.clone());

    Ok(MoveOutcome {
        next_state: GameState {
            board,
            turn: mv.acting_side.opponent(),
            score,
            last_move: Some(record),
            history,
            starting_player: state.starting_player,
            epoch,
        },
        captured_piece,
        goal: scorer,
    })
}

/// Hand the turn to the opponent when the side to move has no legal move.
///
/// History is left untouched: a pass is not a move.
#[instrument(level = "debug", skip(state), fields(turn = %state.turn), err)]
pub fn pass_turn(state: &GameState) -> Result<GameState, PassError> {
    if has_any_legal_move(state, state.turn) {
        return Err(PassError::LegalMoveAvailable { side: state.turn });
    }

    let mut next = state.clone();
    next.turn = state.turn.opponent();
    Ok(next)
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceId, PieceKind, Position};

    fn piece(side: Side, kind: PieceKind, ordinal: u8) -> Piece {
        Piece::new(PieceId::new(0, side, kind, ordinal))
    }

    #[test]
    fn test_simple_move() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Home, Position::new(11, 1), Position::new(10, 1));

        let outcome = apply_move_at(&state, &mv, 1_000).unwrap();
        let next = &outcome.next_state;

        assert!(outcome.captured_piece.is_none());
        assert!(outcome.goal.is_none());
        assert_eq!(next.turn, Side::Away);
        assert!(next.board.get(Position::new(11, 1)).is_none());
        assert_eq!(next.board.get(Position::new(10, 1)), state.board.get(Position::new(11, 1)));

        let record = next.last_move.as_ref().unwrap();
        assert_eq!(record.move_number, 1);
        assert_eq!(record.timestamp, 1_000);
        assert_eq!(record.moved_piece.to_string(), "home-defender-1");
        assert_eq!(next.history.len(), 1);
    }

    #[test]
    fn test_input_state_is_untouched() {
        let state = GameState::new(Side::Home);
        let before = state.clone();
        let mv = Move::new(Side::Home, Position::new(9, 3), Position::new(5, 3));

        let _ = apply_move(&state, &mv).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_capture() {
        let mut board = Board::empty();
        board.place(Position::new(5, 5), piece(Side::Away, PieceKind::Forward, 1));
        board.place(Position::new(7, 5), piece(Side::Away, PieceKind::Defender, 1));
        board.place(Position::new(3, 5), piece(Side::Home, PieceKind::Defender, 1));
        let state = GameState::from_board(board, Side::Away);

        let mv = Move::new(Side::Away, Position::new(5, 5), Position::new(3, 5));
        let outcome = apply_move_at(&state, &mv, 0).unwrap();

        assert_eq!(outcome.captured_piece, Some(piece(Side::Home, PieceKind::Defender, 1)));
        assert_eq!(outcome.next_state.board.side_counts().home, 0);
        assert_eq!(
            outcome.next_state.last_move.unwrap().captured_piece.map(|id| id.to_string()),
            Some("home-defender-1".to_string())
        );
    }

    #[test]
    fn test_goal_resets_board_and_flips_turn() {
        let mut board = Board::empty();
        board.place(Position::new(2, 4), piece(Side::Away, PieceKind::Forward, 1));
        board.place(Position::new(9, 4), piece(Side::Away, PieceKind::Midfielder, 1));
        board.place(Position::new(6, 6), piece(Side::Home, PieceKind::Forward, 1));
        let state = GameState::from_board(board, Side::Away);

        let mv = Move::new(Side::Away, Position::new(9, 4), Position::new(10, 3));
        let next = apply_move_at(&state, &mv, 0).unwrap().next_state;
        let mv = Move::new(Side::Home, Position::new(6, 6), Position::new(6, 7));
        let next = apply_move_at(&next, &mv, 0).unwrap().next_state;

        let mv = Move::new(Side::Away, Position::new(10, 3), Position::new(11, 4));
        let outcome = apply_move_at(&next, &mv, 0).unwrap();
        let scored = &outcome.next_state;

        assert_eq!(outcome.goal, Some(Side::Away));
        assert_eq!(scored.score[Side::Away], 1);
        assert_eq!(scored.score[Side::Home], 0);
        assert_eq!(scored.turn, Side::Home);
        assert_eq!(scored.epoch, 1);
        assert!(scored.board.has_standard_composition());
        assert_eq!(scored.history.len(), 3);
        assert_eq!(scored.last_move.as_ref().unwrap().goal, Some(Side::Away));
        assert!(scored.board.pieces().all(|(_, p)| p.id.epoch == 1));
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Away, Position::new(0, 1), Position::new(1, 1));

        let err = apply_move(&state, &mv).unwrap_err();
        assert_eq!(err.violation, RuleViolation::NotYourTurn { turn: Side::Home });
        assert_eq!(err.mv, mv);
    }

    #[test]
    fn test_pass_turn() {
        let mut board = Board::empty();
        board.place(Position::new(5, 5), piece(Side::Away, PieceKind::Forward, 1));
        let state = GameState::from_board(board, Side::Home);

        let next = pass_turn(&state).unwrap();
        assert_eq!(next.turn, Side::Away);
        assert!(next.history.is_empty());

        assert_eq!(
            pass_turn(&next),
            Err(PassError::LegalMoveAvailable { side: Side::Away })
        );
    }
}
