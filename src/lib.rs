//! # gridball
//!
//! A rule engine and computer opponent for a turn-based football game played
//! on a 12×8 grid.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Applying a move never mutates its input.
//!    Every transition returns a fresh `GameState`.
//!
//! 2. **One Source of Legality**: The legal-move generator and the bot both
//!    go through the validator, so they can never disagree with it.
//!
//! 3. **Deterministic Bots**: Bot randomness comes from a seeded `GameRng`.
//!    The same seed and state always produce the same move.
//!
//! ## Architecture
//!
//! - **Persistent History**: Move records live in an `im::Vector`, so
//!   cloning a state for search is cheap.
//!
//! - **Epochs**: A goal resets the board. Piece identities carry the epoch
//!   they were placed in, so ids stay unique across resets.
//!
//! ## Modules
//!
//! - `core`: Sides, positions, pieces, board, moves, state, RNG
//! - `rules`: Move validation, execution, and legal-move generation
//! - `bot`: Difficulty-tiered move selection
//! - `error`: Error types

pub mod bot;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameRng, GameState, Move, MoveRecord, Piece, PieceId, PieceKind, Position, Side, SideMap, COLS, ROWS,
};

pub use crate::rules::{
    apply_move, apply_move_at, has_any_legal_move, legal_moves, legal_moves_for_piece, pass_turn, validate_move,
    MoveOutcome, MoveValidation, RuleViolation, ValidateOptions,
};

pub use crate::bot::{
    pick_bot_move, pick_bot_move_by_label, BotConfig, BotSearch, Difficulty, Heuristic, MaterialHeuristic,
    SearchStats,
};

pub use crate::error::{IllegalMoveError, ParseDifficultyError, PassError, StateError};
