//! Position evaluation.

use crate::core::{goal_row, GameState, PieceKind, Side};

/// Evaluates a state from one side's perspective. Higher is better for `side`.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, state: &GameState, side: Side) -> i32;
}

/// Material value of a piece.
#[must_use]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Forward => 900,
        PieceKind::Midfielder => 500,
        PieceKind::Flanker => 400,
        PieceKind::Defender => 300,
    }
}

/// Score difference, then material, then how far scoring pieces have
/// pushed up the pitch.
#[derive(Clone, Debug)]
pub struct MaterialHeuristic {
    pub goal_weight: i32,
    pub advance_weight: i32,
}

impl Default for MaterialHeuristic {
    fn default() -> Self {
        Self {
            goal_weight: 100_000,
            advance_weight: 8,
        }
    }
}

impl Heuristic for MaterialHeuristic {
    fn evaluate(&self, state: &GameState, side: Side) -> i32 {
        let opponent = side.opponent();
        let goals = state.score[side] as i32 - state.score[opponent] as i32;
        let mut score = goals.saturating_mul(self.goal_weight);

        for (pos, piece) in state.board.pieces() {
            let mut value = piece_value(piece.kind);
            if piece.can_score() {
                value += (pos.row - goal_row(piece.side)).abs() * self.advance_weight;
            }
            if piece.side == side {
                score += value;
            } else {
                score -= value;
            }
        }

        score
    }
}
