//! Bot move selection.
//!
//! `BotSearch` owns the configuration, RNG, heuristic and policy, and
//! returns one legal move per call. Candidates always come from
//! `legal_moves`, so whatever the policy does, the returned move validates
//! with the turn check skipped.

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::core::{GameRng, GameState, Move, Side};
use crate::error::ParseDifficultyError;
use crate::rules::legal_moves;

use super::config::{BotConfig, Difficulty};
use super::eval::{Heuristic, MaterialHeuristic};
use super::policy::{GreedyPolicy, LookaheadPolicy, MovePolicy, RandomPolicy, SearchContext};
use super::stats::SearchStats;

/// Bot decision context.
pub struct BotSearch {
    config: BotConfig,
    rng: GameRng,
    heuristic: Box<dyn Heuristic>,
    policy: Box<dyn MovePolicy>,
    stats: SearchStats,
}

impl BotSearch {
    /// Create a bot with the policy matching `config.difficulty`.
    pub fn new(config: BotConfig) -> Self {
        let policy: Box<dyn MovePolicy> = match config.difficulty {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Medium => Box::new(GreedyPolicy),
            Difficulty::Hard => Box::new(LookaheadPolicy),
        };

        Self {
            rng: GameRng::new(config.seed),
            config,
            heuristic: Box::new(MaterialHeuristic::default()),
            policy,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom heuristic.
    pub fn with_heuristic<H: Heuristic + 'static>(mut self, heuristic: H) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Set a custom policy.
    pub fn with_policy<P: MovePolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Statistics from the last call to `pick`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for `side`, or `None` if `side` has no legal move.
    ///
    /// `side` need not be `state.turn`; the position is judged as if it were
    /// `side`'s move.
    #[instrument(level = "debug", skip(self, state), fields(difficulty = %self.config.difficulty, move_number = state.move_count() + 1))]
    pub fn pick(&mut self, state: &GameState, side: Side) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let root = if state.turn == side {
            state.clone()
        } else {
            GameState {
                turn: side,
                ..state.clone()
            }
        };

        let candidates = legal_moves(&root, side);
        self.stats.candidates = candidates.len() as u32;

        let chosen = match candidates.as_slice() {
            [] => {
                debug!("no legal move, turn must be passed");
                None
            }
            [only] => Some(*only),
            _ => {
                let mut ctx = SearchContext {
                    config: &self.config,
                    heuristic: self.heuristic.as_ref(),
                    rng: &mut self.rng,
                    stats: &mut self.stats,
                };
                match self.policy.choose(&root, side, &candidates, &mut ctx) {
                    Some(mv) if candidates.contains(&mv) => Some(mv),
                    other => {
                        warn!(?other, "policy returned a move outside the candidates");
                        candidates.first().copied()
                    }
                }
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(mv) = chosen {
            debug!(
                %mv,
                candidates = self.stats.candidates,
                nodes = self.stats.nodes_expanded,
                time_us = self.stats.time_us,
                "bot move chosen"
            );
        }
        chosen
    }
}

/// Choose a move for `side` at the given difficulty.
///
/// Deterministic for a given state: the RNG is seeded from the tier's preset
/// seed and the number of moves played so far.
pub fn pick_bot_move(state: &GameState, side: Side, difficulty: Difficulty) -> Option<Move> {
    let preset = difficulty.config();
    let seed = GameRng::new(preset.seed).derive(state.move_count() as u64).seed();
    BotSearch::new(preset.with_seed(seed)).pick(state, side)
}

/// `pick_bot_move` taking a difficulty label (`"easy"`, `"medium"`, `"hard"`).
pub fn pick_bot_move_by_label(state: &GameState, side: Side, label: &str) -> Result<Option<Move>, ParseDifficultyError> {
    let difficulty: Difficulty = label.parse()?;
    Ok(pick_bot_move(state, side, difficulty))
}
