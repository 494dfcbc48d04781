//! Core model types: sides, positions, pieces, board, moves, state, RNG.
//!
//! This module holds data and invariants only. Legality and state
//! transitions live in `rules`.

pub mod action;
pub mod board;
pub mod piece;
pub mod position;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Move, MoveRecord};
pub use board::{layout, Board, HOME_LAYOUT, PIECES_PER_SIDE};
pub use piece::{Piece, PieceId, PieceKind};
pub use position::{goal_row, Direction, Position, ALL_DIRECTIONS, COLS, DIAGONAL, GOAL_COLS, ORTHOGONAL, ROWS};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::GameState;
