//! Rule engine: validation, execution, and legal-move generation.
//!
//! Data flow for a caller:
//!
//! ```text
//! Move -> validate_move -> (valid) apply_move -> MoveOutcome { next_state, .. }
//! ```
//!
//! `legal_moves_for_piece` and `legal_moves` probe the validator without the
//! turn check and are what the bot and move hints consume.

pub mod execute;
pub mod movegen;
pub mod validate;

pub use execute::{apply_move, apply_move_at, pass_turn, MoveOutcome};
pub use movegen::{has_any_legal_move, legal_moves, legal_moves_for_piece};
pub use validate::{validate_move, MoveValidation, RuleViolation, ValidateOptions};
