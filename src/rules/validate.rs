//! Move legality.
//!
//! `validate_move` is a pure predicate. Illegal moves are ordinary results,
//! not errors: the caller gets a `MoveValidation::Invalid` carrying a
//! `RuleViolation` whose `Display` is the user-facing reason.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. Turn ownership (skipped for legality probes)
//! 2. A piece of the acting side stands on the origin
//! 3. Destination on the pitch
//! 4. No friendly piece on the destination
//! 5. Destination is not the mover's own goal
//! 6. Defenders may not enter the opponent's goal
//! 7. Piece geometry and a clear path

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, GameState, Move, Piece, PieceKind, Position, Side};

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleViolation {
    #[error("not your turn")]
    NotYourTurn { turn: Side },

    #[error("no piece of yours on the origin square")]
    NoPieceAtOrigin,

    #[error("out of bounds")]
    OutOfBounds,

    #[error("destination occupied by your own piece")]
    OwnPieceAtDestination,

    #[error("cannot end inside your own goal")]
    OwnGoal,

    #[error("defenders cannot score")]
    DefenderCannotScore,

    #[error("illegal shape for this piece type")]
    IllegalShape { kind: PieceKind },

    #[error("defenders move exactly one square: distance must be 1")]
    DefenderDistance,

    #[error("flankers move one or two squares")]
    FlankerDistance,

    #[error("path is blocked at {at}")]
    PathBlocked { at: Position },
}

impl RuleViolation {
    /// The user-displayable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Outcome of validating a move: either legal with details, or illegal with
/// a reason.
///
/// Serialized with the reason text next to the violated rule, so a holder
/// of the JSON can show it without this crate:
///
/// ```
/// use gridball::core::{GameState, Move, Position, Side};
/// use gridball::rules::{validate_move, ValidateOptions};
///
/// let state = GameState::new(Side::Home);
/// let mv = Move::new(Side::Away, Position::new(0, 1), Position::new(1, 1));
/// let json = serde_json::to_value(validate_move(&state, &mv, ValidateOptions::default())).unwrap();
///
/// assert_eq!(json["status"], "invalid");
/// assert_eq!(json["reason"], "not your turn");
/// assert_eq!(json["violation"]["rule"], "not_your_turn");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ValidationRepr", from = "ValidationRepr")]
pub enum MoveValidation {
    Valid {
        /// The destination holds an enemy piece.
        capture: bool,
        /// The destination is the opponent's goal.
        goal: bool,
    },
    Invalid { reason: RuleViolation },
}

impl MoveValidation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveValidation::Valid { .. })
    }

    /// The violation, if the move was rejected.
    #[must_use]
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            MoveValidation::Valid { .. } => None,
            MoveValidation::Invalid { reason } => Some(reason),
        }
    }

    /// Convert into a `Result`, for use with `?`.
    pub fn into_result(self) -> Result<(bool, bool), RuleViolation> {
        match self {
            MoveValidation::Valid { capture, goal } => Ok((capture, goal)),
            MoveValidation::Invalid { reason } => Err(reason),
        }
    }
}

/// Wire shape of `MoveValidation`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ValidationRepr {
    Valid { capture: bool, goal: bool },
    Invalid { reason: String, violation: RuleViolation },
}

impl From<MoveValidation> for ValidationRepr {
    fn from(validation: MoveValidation) -> Self {
        match validation {
            MoveValidation::Valid { capture, goal } => ValidationRepr::Valid { capture, goal },
            MoveValidation::Invalid { reason } => ValidationRepr::Invalid {
                reason: reason.reason(),
                violation: reason,
            },
        }
    }
}

impl From<ValidationRepr> for MoveValidation {
    fn from(repr: ValidationRepr) -> Self {
        match repr {
            ValidationRepr::Valid { capture, goal } => MoveValidation::Valid { capture, goal },
            // The text is derived from the rule; the rule wins.
            ValidationRepr::Invalid { violation, .. } => MoveValidation::Invalid { reason: violation },
        }
    }
}

/// Options for `validate_move`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Judge legality as if it were the acting side's turn.
    pub skip_turn_check: bool,
}

impl ValidateOptions {
    /// Options for a legality probe (move hints, bot candidates).
    #[must_use]
    pub const fn probe() -> Self {
        Self {
            skip_turn_check: true,
        }
    }
}

/// Decide whether `mv` is legal from `state`.
pub fn validate_move(state: &GameState, mv: &Move, options: ValidateOptions) -> MoveValidation {
    if !options.skip_turn_check && mv.acting_side != state.turn {
        return MoveValidation::Invalid {
            reason: RuleViolation::NotYourTurn { turn: state.turn },
        };
    }

    match check_on_board(&state.board, mv) {
        Ok((capture, goal)) => MoveValidation::Valid { capture, goal },
        Err(reason) => {
            trace!(%mv, %reason, "move rejected");
            MoveValidation::Invalid { reason }
        }
    }
}

/// Checks 2-7, which depend only on the board.
pub(crate) fn check_on_board(board: &Board, mv: &Move) -> Result<(bool, bool), RuleViolation> {
    let piece = board
        .get(mv.from)
        .filter(|p| p.side == mv.acting_side)
        .ok_or(RuleViolation::NoPieceAtOrigin)?;

    if !mv.to.in_bounds() {
        return Err(RuleViolation::OutOfBounds);
    }

    let target = board.get(mv.to);
    if target.is_some_and(|t| t.side == piece.side) {
        return Err(RuleViolation::OwnPieceAtDestination);
    }

    if mv.to.is_goal_of(piece.side) {
        return Err(RuleViolation::OwnGoal);
    }

    let goal = mv.to.is_goal_of(piece.side.opponent());
    if goal && !piece.can_score() {
        return Err(RuleViolation::DefenderCannotScore);
    }

    check_geometry(board, &piece, mv.from, mv.to)?;

    Ok((target.is_some(), goal))
}

fn check_geometry(board: &Board, piece: &Piece, from: Position, to: Position) -> Result<(), RuleViolation> {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let straight = (d_row == 0) != (d_col == 0);
    let diagonal = d_row != 0 && d_row.abs() == d_col.abs();
    let distance = from.distance(to);
    let illegal_shape = RuleViolation::IllegalShape { kind: piece.kind };

    match piece.kind {
        PieceKind::Defender => {
            if distance != 1 {
                return Err(RuleViolation::DefenderDistance);
            }
            // Adjacent: nothing to jump over.
            Ok(())
        }
        PieceKind::Flanker => {
            if !straight {
                return Err(illegal_shape);
            }
            if distance > 2 {
                return Err(RuleViolation::FlankerDistance);
            }
            check_path(board, from, to)
        }
        PieceKind::Midfielder => {
            if !diagonal {
                return Err(illegal_shape);
            }
            check_path(board, from, to)
        }
        PieceKind::Forward => {
            if !(straight || diagonal) {
                return Err(illegal_shape);
            }
            check_path(board, from, to)
        }
    }
}

/// Every cell strictly between `from` and `to` must be empty.
/// Assumes a straight or diagonal line.
fn check_path(board: &Board, from: Position, to: Position) -> Result<(), RuleViolation> {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();

    let mut cursor = Position::new(from.row + step_row, from.col + step_col);
    while cursor != to {
        if !board.is_empty_at(cursor) {
            return Err(RuleViolation::PathBlocked { at: cursor });
        }
        cursor = Position::new(cursor.row + step_row, cursor.col + step_col);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceId;

    fn piece(side: Side, kind: PieceKind, ordinal: u8) -> Piece {
        Piece::new(PieceId::new(0, side, kind, ordinal))
    }

    fn state_with(pieces: &[(Position, Piece)], turn: Side) -> GameState {
        let mut board = Board::empty();
        for &(pos, p) in pieces {
            board.place(pos, p);
        }
        GameState::from_board(board, turn)
    }

    fn reason(state: &GameState, mv: Move) -> RuleViolation {
        validate_move(state, &mv, ValidateOptions::default())
            .violation()
            .cloned()
            .expect("move should be invalid")
    }

    #[test]
    fn test_turn_check_comes_first() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Away, Position::new(5, 5), Position::new(-3, 40));

        assert_eq!(reason(&state, mv), RuleViolation::NotYourTurn { turn: Side::Home });
    }

    #[test]
    fn test_probe_skips_turn_check() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Away, Position::new(0, 1), Position::new(1, 1));

        assert!(!validate_move(&state, &mv, ValidateOptions::default()).is_valid());
        assert!(validate_move(&state, &mv, ValidateOptions::probe()).is_valid());
    }

    #[test]
    fn test_origin_must_hold_own_piece() {
        let state = GameState::new(Side::Home);

        let empty = Move::new(Side::Home, Position::new(6, 6), Position::new(5, 6));
        assert_eq!(reason(&state, empty), RuleViolation::NoPieceAtOrigin);

        let enemy = Move::new(Side::Home, Position::new(0, 1), Position::new(1, 1));
        assert_eq!(reason(&state, enemy), RuleViolation::NoPieceAtOrigin);

        let off_pitch = Move::new(Side::Home, Position::new(-1, 0), Position::new(0, 0));
        assert_eq!(reason(&state, off_pitch), RuleViolation::NoPieceAtOrigin);
    }

    #[test]
    fn test_out_of_bounds() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Home, Position::new(10, 0), Position::new(10, -1));

        assert_eq!(reason(&state, mv), RuleViolation::OutOfBounds);
    }

    #[test]
    fn test_no_friendly_capture() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Home, Position::new(11, 2), Position::new(10, 2));

        assert_eq!(reason(&state, mv), RuleViolation::OwnPieceAtDestination);
    }

    #[test]
    fn test_null_move_is_friendly_occupied() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Home, Position::new(9, 3), Position::new(9, 3));

        assert_eq!(reason(&state, mv), RuleViolation::OwnPieceAtDestination);
    }

    #[test]
    fn test_cannot_enter_own_goal() {
        let state = GameState::new(Side::Home);
        let mv = Move::new(Side::Home, Position::new(11, 2), Position::new(11, 3));

        assert_eq!(reason(&state, mv), RuleViolation::OwnGoal);
    }

    #[test]
    fn test_defender_cannot_score() {
        let state = state_with(&[(Position::new(1, 3), piece(Side::Home, PieceKind::Defender, 1))], Side::Home);
        let mv = Move::new(Side::Home, Position::new(1, 3), Position::new(0, 3));

        assert_eq!(reason(&state, mv), RuleViolation::DefenderCannotScore);
    }

    #[test]
    fn test_defender_geometry() {
        let from = Position::new(6, 4);
        let state = state_with(&[(from, piece(Side::Away, PieceKind::Defender, 1))], Side::Away);

        for (d_row, d_col) in crate::core::ALL_DIRECTIONS {
            let mv = Move::new(Side::Away, from, Position::new(6 + d_row, 4 + d_col));
            assert!(validate_move(&state, &mv, ValidateOptions::default()).is_valid());
        }

        let far = Move::new(Side::Away, from, Position::new(8, 4));
        assert_eq!(reason(&state, far), RuleViolation::DefenderDistance);

        let knight = Move::new(Side::Away, from, Position::new(8, 5));
        assert_eq!(reason(&state, knight), RuleViolation::DefenderDistance);
    }

    #[test]
    fn test_flanker_geometry() {
        let from = Position::new(6, 4);
        let state = state_with(&[(from, piece(Side::Home, PieceKind::Flanker, 1))], Side::Home);
        let check = |to: Position| validate_move(&state, &Move::new(Side::Home, from, to), ValidateOptions::default());

        assert!(check(Position::new(5, 4)).is_valid());
        assert!(check(Position::new(4, 4)).is_valid());
        assert!(check(Position::new(6, 2)).is_valid());

        assert_eq!(
            check(Position::new(5, 5)).violation(),
            Some(&RuleViolation::IllegalShape { kind: PieceKind::Flanker })
        );
        assert_eq!(check(Position::new(3, 4)).violation(), Some(&RuleViolation::FlankerDistance));
    }

    #[test]
    fn test_midfielder_geometry() {
        let from = Position::new(6, 4);
        let state = state_with(&[(from, piece(Side::Home, PieceKind::Midfielder, 1))], Side::Home);
        let check = |to: Position| validate_move(&state, &Move::new(Side::Home, from, to), ValidateOptions::default());

        assert!(check(Position::new(2, 0)).is_valid());
        assert!(check(Position::new(9, 7)).is_valid());
        assert_eq!(
            check(Position::new(6, 0)).violation(),
            Some(&RuleViolation::IllegalShape { kind: PieceKind::Midfielder })
        );
    }

    #[test]
    fn test_forward_geometry() {
        let from = Position::new(6, 4);
        let state = state_with(&[(from, piece(Side::Away, PieceKind::Forward, 1))], Side::Away);
        let check = |to: Position| validate_move(&state, &Move::new(Side::Away, from, to), ValidateOptions::default());

        assert!(check(Position::new(6, 0)).is_valid());
        assert!(check(Position::new(10, 4)).is_valid());
        assert!(check(Position::new(3, 1)).is_valid());
        assert_eq!(
            check(Position::new(8, 5)).violation(),
            Some(&RuleViolation::IllegalShape { kind: PieceKind::Forward })
        );
    }

    #[test]
    fn test_blocked_path_by_friend_or_foe() {
        let from = Position::new(6, 4);
        for blocker_side in Side::ALL {
            let state = state_with(
                &[
                    (from, piece(Side::Home, PieceKind::Forward, 1)),
                    (Position::new(4, 4), piece(blocker_side, PieceKind::Defender, 1)),
                ],
                Side::Home,
            );
            let mv = Move::new(Side::Home, from, Position::new(2, 4));

            assert_eq!(
                reason(&state, mv),
                RuleViolation::PathBlocked { at: Position::new(4, 4) }
            );
        }
    }

    #[test]
    fn test_capture_and_goal_flags() {
        let state = state_with(
            &[
                (Position::new(3, 3), piece(Side::Home, PieceKind::Midfielder, 1)),
                (Position::new(4, 4), piece(Side::Home, PieceKind::Forward, 1)),
                (Position::new(2, 2), piece(Side::Away, PieceKind::Flanker, 1)),
            ],
            Side::Home,
        );

        let capture = Move::new(Side::Home, Position::new(3, 3), Position::new(2, 2));
        assert_eq!(
            validate_move(&state, &capture, ValidateOptions::default()),
            MoveValidation::Valid { capture: true, goal: false }
        );

        let goal = Move::new(Side::Home, Position::new(4, 4), Position::new(0, 4));
        assert_eq!(
            validate_move(&state, &goal, ValidateOptions::default()),
            MoveValidation::Valid { capture: false, goal: true }
        );
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(RuleViolation::OutOfBounds.reason(), "out of bounds");
        assert_eq!(RuleViolation::NotYourTurn { turn: Side::Away }.reason(), "not your turn");
        assert_eq!(RuleViolation::DefenderCannotScore.reason(), "defenders cannot score");
        assert!(RuleViolation::DefenderDistance.reason().contains("distance must be 1"));
    }

    #[test]
    fn test_validation_serialization() {
        let invalid = MoveValidation::Invalid {
            reason: RuleViolation::PathBlocked { at: Position::new(1, 2) },
        };
        let json = serde_json::to_value(&invalid).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"], "path is blocked at (1, 2)");
        assert_eq!(json["violation"]["rule"], "path_blocked");

        let deserialized: MoveValidation = serde_json::from_value(json).unwrap();
        assert_eq!(invalid, deserialized);

        let valid = MoveValidation::Valid { capture: true, goal: false };
        let json = serde_json::to_string(&valid).unwrap();
        assert_eq!(json, r#"{"status":"valid","capture":true,"goal":false}"#);
        assert_eq!(serde_json::from_str::<MoveValidation>(&json).unwrap(), valid);
    }
}
