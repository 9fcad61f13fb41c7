//! Gomoku (five in a row) on an N x N board between a human and a plain
//! minimax AI, or between the minimax AI and an alpha-beta AI.
//!
//! - [`core`]: board, cells and positions
//! - [`logic`]: win / draw rules and the candidate move generator
//! - [`player`]: the evaluator, both searches, and the controllers that use them
//! - [`game`]: a single game session
//! - [`selfplay`]: batches of AI-vs-AI games run in parallel
//!
//! ```
//! use gomoku_duel::core::{Board, Cell, Position};
//! use gomoku_duel::player::ai::minimax;
//!
//! let mut board = Board::new(6);
//! board.make_move(Position::new(2, 2), Cell::PlayerHuman);
//! let result = minimax(&mut board, 0, true, 1, Cell::PlayerHuman);
//! if let Some(mv) = result.best_move {
//!     board.make_move(mv, Cell::PlayerMinimax);
//! }
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
pub mod ui;


pub use crate::core::{Board, Cell, Position};
pub use error::{GameError, Result};
