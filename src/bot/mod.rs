//! Computer opponent.
//!
//! Three difficulty tiers share one entry point, `BotSearch::pick`:
//!
//! - **Easy**: random legal move, but never misses an open goal
//! - **Medium**: one-ply greedy on `MaterialHeuristic`, with score jitter
//! - **Hard**: negamax with alpha-beta to a fixed depth
//!
//! The bot only ever returns a move produced by the legal-move generator.

pub mod config;
pub mod eval;
pub mod policy;
pub mod search;
pub mod stats;

pub use config::{BotConfig, Difficulty};
pub use eval::{piece_value, Heuristic, MaterialHeuristic};
pub use policy::{GreedyPolicy, LookaheadPolicy, MovePolicy, RandomPolicy, SearchContext};
pub use search::{pick_bot_move, pick_bot_move_by_label, BotSearch};
pub use stats::SearchStats;
