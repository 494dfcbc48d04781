//! Move-selection policies, one per difficulty tier.
//!
//! Policies are trait-based to allow customization:
//! - `RandomPolicy`: goal if available, otherwise uniform random (Easy)
//! - `GreedyPolicy`: best heuristic score after one move (Medium)
//! - `LookaheadPolicy`: negamax with alpha-beta over both sides' moves (Hard)
//!
//! Every policy chooses from the candidate list it is handed, which the
//! search builds with the legal-move generator.

use std::cmp::Reverse;

use tracing::trace;

use crate::core::{GameRng, GameState, Move, Side};
use crate::rules::execute::transition;
use crate::rules::legal_moves;

use super::config::BotConfig;
use super::eval::{piece_value, Heuristic};
use super::stats::SearchStats;

/// Bound larger than any heuristic value. Negation-safe, unlike `i32::MIN`.
const INF: i32 = 1_000_000_000;

/// Everything a policy may use besides the position itself.
pub struct SearchContext<'a> {
    pub config: &'a BotConfig,
    pub heuristic: &'a dyn Heuristic,
    pub rng: &'a mut GameRng,
    pub stats: &'a mut SearchStats,
}

/// Policy for choosing one move among the legal candidates.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `side`.
    ///
    /// `state.turn` is `side` and `candidates` is non-empty. The returned move
    /// must be one of `candidates`.
    fn choose(&self, state: &GameState, side: Side, candidates: &[Move], ctx: &mut SearchContext<'_>) -> Option<Move>;
}

/// Takes a goal if one is available, otherwise picks uniformly.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, _state: &GameState, _side: Side, candidates: &[Move], ctx: &mut SearchContext<'_>) -> Option<Move> {
        let goals: Vec<Move> = candidates.iter().copied().filter(is_goal_move).collect();
        if goals.is_empty() {
            ctx.rng.choose(candidates).copied()
        } else {
            ctx.rng.choose(&goals).copied()
        }
    }
}

/// Scores each candidate by the heuristic after applying it.
///
/// Candidates are visited in shuffled order and only a strictly better score
/// replaces the incumbent, so ties break randomly.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose(&self, state: &GameState, side: Side, candidates: &[Move], ctx: &mut SearchContext<'_>) -> Option<Move> {
        let mut order = candidates.to_vec();
        ctx.rng.shuffle(&mut order);

        let mut best: Option<(i32, Move)> = None;
        for mv in order {
            let Some(next) = expand(state, &mv, ctx) else {
                continue;
            };

            ctx.stats.positions_evaluated += 1;
            let jitter = match ctx.config.noise {
                0 => 0,
                noise => ctx.rng.gen_range_usize(0..noise as usize) as i32,
            };
            let score = ctx.heuristic.evaluate(&next, side).saturating_add(jitter);
            trace!(%mv, score, "greedy candidate");

            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv)
    }
}

/// Negamax with alpha-beta pruning to `config.depth` plies.
#[derive(Clone, Debug, Default)]
pub struct LookaheadPolicy;

impl LookaheadPolicy {
    fn negamax(&self, state: &GameState, depth: u32, mut alpha: i32, beta: i32, ctx: &mut SearchContext<'_>) -> i32 {
        let side = state.turn;

        if depth == 0 {
            ctx.stats.positions_evaluated += 1;
            return ctx.heuristic.evaluate(state, side);
        }

        let mut moves = legal_moves(state, side);
        if moves.is_empty() {
            let mut passed = state.clone();
            passed.turn = side.opponent();
            return -self.negamax(&passed, depth - 1, -beta, -alpha, ctx);
        }
        moves.sort_by_key(|mv| Reverse(move_priority(state, mv)));

        let mut best = -INF;
        for mv in moves {
            let Some(next) = expand(state, &mv, ctx) else {
                continue;
            };
            let score = -self.negamax(&next, depth - 1, -beta, -alpha, ctx);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl MovePolicy for LookaheadPolicy {
    fn choose(&self, state: &GameState, _side: Side, candidates: &[Move], ctx: &mut SearchContext<'_>) -> Option<Move> {
        let depth = ctx.config.depth.max(1);

        let mut order = candidates.to_vec();
        ctx.rng.shuffle(&mut order);
        // Stable: equal-priority moves keep their shuffled order.
        order.sort_by_key(|mv| Reverse(move_priority(state, mv)));

        let mut best: Option<(i32, Move)> = None;
        for mv in order {
            let Some(next) = expand(state, &mv, ctx) else {
                continue;
            };

            let alpha = best.map_or(-INF, |(s, _)| s);
            let score = -self.negamax(&next, depth - 1, -INF, -alpha, ctx);
            trace!(%mv, score, "lookahead candidate");

            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv)
    }
}

/// Whether a legal move enters the opponent's goal.
pub(crate) fn is_goal_move(mv: &Move) -> bool {
    mv.to.is_goal_of(mv.acting_side.opponent())
}

/// Search ordering: goals, then captures by victim value, then quiet moves.
fn move_priority(state: &GameState, mv: &Move) -> i32 {
    if is_goal_move(mv) {
        return INF;
    }
    state.board.get(mv.to).map_or(0, |victim| piece_value(victim.kind))
}

fn expand(state: &GameState, mv: &Move, ctx: &mut SearchContext<'_>) -> Option<GameState> {
    ctx.stats.nodes_expanded += 1;
    transition(state, mv, 0).ok().map(|outcome| outcome.next_state)
}
